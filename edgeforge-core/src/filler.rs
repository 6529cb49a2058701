//! Deterministic filler edge stream.
//!
//! Fills the gap between the embedded edges and the requested edge budget.
//! Endpoints come from a fixed formula of the edge's ordinal index, labels
//! from a locally-owned seeded generator, so the whole stream replays
//! byte-for-byte for a given `(vertices, labels, seed, count)`.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::fixture::Edge;

/// Iterator producing the deterministic filler edges of a fixture.
///
/// For the edge at ordinal `index`:
///
/// - `src = index % vertices`
/// - `tgt = (index * 17 + 23) % vertices`, stepped forward by one (mod
///   `vertices`) whenever the formula lands on `src`, so filler edges are
///   never self-loops on graphs with at least two vertices
/// - `label` is drawn uniformly from `[0, labels)` off a [`SmallRng`] seeded
///   with `seed`
///
/// The label stream always begins at the seed: the first edge yielded takes
/// the first draw, regardless of the starting ordinal. Both `vertices` and
/// `labels` must be positive; iteration divides by both.
///
/// # Examples
///
/// ```
/// use edgeforge_core::FillerStream;
///
/// let mut filler = FillerStream::new(10, 4, 1, 3);
/// let edge = filler.next().expect("stream yields three edges");
/// assert_eq!((edge.src, edge.tgt), (0, 3));
/// assert!(edge.label < 4);
/// assert_eq!(filler.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct FillerStream {
    vertices: u64,
    labels: u64,
    rng: SmallRng,
    index: u64,
    remaining: u64,
}

impl FillerStream {
    /// Create a stream of `count` filler edges starting at ordinal zero.
    #[must_use]
    pub fn new(vertices: u64, labels: u64, seed: u64, count: u64) -> Self {
        Self::starting_at(vertices, labels, seed, 0, count)
    }

    /// Create a stream of `count` filler edges starting at ordinal `start`.
    ///
    /// Only the endpoint formula observes `start`; the label stream restarts
    /// from the seed.
    #[must_use]
    pub fn starting_at(vertices: u64, labels: u64, seed: u64, start: u64, count: u64) -> Self {
        Self {
            vertices,
            labels,
            rng: SmallRng::seed_from_u64(seed),
            index: start,
            remaining: count,
        }
    }
}

impl Iterator for FillerStream {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.index;
        self.index = self.index.wrapping_add(1);
        self.remaining -= 1;

        let src = index % self.vertices;
        let mut tgt = index.wrapping_mul(17).wrapping_add(23) % self.vertices;
        if tgt == src && self.vertices > 1 {
            tgt = (tgt + 1) % self.vertices;
        }
        let label = self.rng.gen_range(0..self.labels);
        Some(Edge { src, tgt, label })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FillerStream {}

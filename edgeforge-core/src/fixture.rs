//! Generated fixture types.
//!
//! A [`GraphFixture`] is the complete result of one generation call: the
//! requested dimensions, the seed, the placement ground truth, and the full
//! edge vector with embedded edges first and filler edges after.

use thiserror::Error;

use crate::builder::GraphDims;

/// One absolute edge of a generated graph.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    /// Source vertex id in `[0, vertices)`.
    pub src: u64,
    /// Target vertex id in `[0, vertices)`.
    pub tgt: u64,
    /// Edge label.
    pub label: u64,
}

/// Ground-truth record of one embedded pattern instance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlacedPattern {
    /// Catalogue name of the embedded pattern.
    pub name: String,
    /// Offset added (mod vertices) to the pattern's relative vertex ids.
    pub offset: u64,
    /// Number of edges the instance contributed.
    pub edge_count: u64,
}

/// Error raised when fixture parts do not describe a coherent graph.
///
/// These are programming errors in the caller, not runtime conditions: the
/// generator itself always produces consistent parts.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InconsistentFixture {
    /// The edge vector length does not match the declared edge count.
    #[error("fixture holds {actual} edges but its dimensions declare {declared}")]
    EdgeCountMismatch {
        /// Edges actually supplied.
        actual: u64,
        /// Edge count the dimensions declare.
        declared: u64,
    },
    /// The placements declare more embedded edges than the fixture holds.
    #[error("placements declare {embedded} embedded edges but the fixture holds {actual}")]
    EmbeddedOverrun {
        /// Embedded edges the placements sum to.
        embedded: u64,
        /// Edges actually supplied.
        actual: u64,
    },
}

/// A fully synthesized fixture graph.
///
/// Edge order is the serialization order: all embedded edges in plan order,
/// then all filler edges in ordinal order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphFixture {
    dims: GraphDims,
    seed: u64,
    embedded: usize,
    placements: Vec<PlacedPattern>,
    edges: Vec<Edge>,
}

impl GraphFixture {
    /// Assemble a fixture from its parts, panicking on inconsistency.
    ///
    /// # Panics
    ///
    /// Panics when [`GraphFixture::try_from_parts`] would return an error.
    #[must_use]
    pub fn from_parts(
        dims: GraphDims,
        seed: u64,
        placements: Vec<PlacedPattern>,
        edges: Vec<Edge>,
    ) -> Self {
        Self::try_from_parts(dims, seed, placements, edges).expect("fixture parts are consistent")
    }

    /// Assemble a fixture from its parts, validating their consistency.
    ///
    /// The edge vector must hold exactly `dims.edges` entries and the
    /// placements must not declare more embedded edges than the vector
    /// holds.
    ///
    /// # Errors
    ///
    /// Returns [`InconsistentFixture`] describing the first violated
    /// invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeforge_core::{Edge, GraphDims, GraphFixture, PlacedPattern};
    ///
    /// let dims = GraphDims {
    ///     vertices: 4,
    ///     edges: 2,
    ///     labels: 3,
    /// };
    /// let edges = vec![
    ///     Edge { src: 0, tgt: 1, label: 1 },
    ///     Edge { src: 1, tgt: 2, label: 0 },
    /// ];
    /// let placements = vec![PlacedPattern {
    ///     name: "pair".into(),
    ///     offset: 0,
    ///     edge_count: 1,
    /// }];
    /// let fixture = GraphFixture::try_from_parts(dims, 7, placements, edges)?;
    /// assert_eq!(fixture.embedded().len(), 1);
    /// assert_eq!(fixture.filler().len(), 1);
    /// # Ok::<(), edgeforge_core::InconsistentFixture>(())
    /// ```
    pub fn try_from_parts(
        dims: GraphDims,
        seed: u64,
        placements: Vec<PlacedPattern>,
        edges: Vec<Edge>,
    ) -> Result<Self, InconsistentFixture> {
        let actual = edges.len() as u64;
        if actual != dims.edges {
            return Err(InconsistentFixture::EdgeCountMismatch {
                actual,
                declared: dims.edges,
            });
        }
        let declared_embedded = placements
            .iter()
            .fold(0u64, |total, placement| total.saturating_add(placement.edge_count));
        let embedded = match usize::try_from(declared_embedded) {
            Ok(embedded) if embedded <= edges.len() => embedded,
            _ => {
                return Err(InconsistentFixture::EmbeddedOverrun {
                    embedded: declared_embedded,
                    actual,
                });
            }
        };
        Ok(Self {
            dims,
            seed,
            embedded,
            placements,
            edges,
        })
    }

    /// Dimensions the fixture was generated for.
    pub const fn dims(&self) -> GraphDims {
        self.dims
    }

    /// Seed the fixture was generated with.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Every edge, embedded first, then filler, in serialization order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The embedded edges, in plan order.
    pub fn embedded(&self) -> &[Edge] {
        let (embedded, _) = self.edges.split_at(self.embedded);
        embedded
    }

    /// The filler edges, in ordinal order.
    pub fn filler(&self) -> &[Edge] {
        let (_, filler) = self.edges.split_at(self.embedded);
        filler
    }

    /// Number of embedded edges at the front of the edge vector.
    pub fn embedded_count(&self) -> u64 {
        self.embedded as u64
    }

    /// Ground-truth placements, in plan order.
    pub fn placements(&self) -> &[PlacedPattern] {
        &self.placements
    }
}

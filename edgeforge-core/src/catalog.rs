//! Pattern catalogue.
//!
//! A pattern is a small directed multigraph expressed in pattern-local
//! coordinates: vertices are numbered from zero and labels are the exact
//! values the emitted edges carry. Embedding shifts the vertices by a
//! planned offset; labels are never remapped.

/// One edge of a pattern, in pattern-local coordinates.
///
/// `src` and `tgt` are 0-based vertex indices inside the pattern; `label` is
/// the exact value the embedded edge will carry, 1-based by catalogue
/// convention.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PatternEdge {
    /// Source vertex, relative to the pattern.
    pub src: u64,
    /// Target vertex, relative to the pattern.
    pub tgt: u64,
    /// Label carried verbatim into the generated graph.
    pub label: u64,
}

/// A named sub-graph shape that can be embedded into a generated fixture.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pattern {
    name: String,
    min_vertices: u64,
    min_labels: u64,
    edges: Vec<PatternEdge>,
}

impl Pattern {
    /// Create a pattern from its name, minimum dimensions, and edge list.
    pub fn new(
        name: impl Into<String>,
        min_vertices: u64,
        min_labels: u64,
        edges: Vec<PatternEdge>,
    ) -> Self {
        Self {
            name: name.into(),
            min_vertices,
            min_labels,
            edges,
        }
    }

    /// Name used to request this pattern.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Smallest vertex count a graph needs to hold one instance.
    pub const fn min_vertices(&self) -> u64 {
        self.min_vertices
    }

    /// Smallest label count a graph needs to hold one instance.
    pub const fn min_labels(&self) -> u64 {
        self.min_labels
    }

    /// Edges in pattern-local coordinates.
    pub fn edges(&self) -> &[PatternEdge] {
        &self.edges
    }

    /// Number of edges one embedded instance contributes.
    pub fn edge_count(&self) -> u64 {
        self.edges.len() as u64
    }
}

/// Source of embeddable patterns.
///
/// The generator only needs enumeration and lookup; both are kept on one
/// trait so alternative catalogues can be swapped in for testing.
///
/// # Examples
///
/// ```
/// use edgeforge_core::{Catalog, StandardCatalog};
///
/// let catalog = StandardCatalog::new();
/// let pattern = catalog.lookup("chorded-cycle").expect("known pattern");
/// assert_eq!(pattern.edge_count(), 5);
/// ```
pub trait Catalog {
    /// Every pattern this catalogue offers, in a stable order.
    fn patterns(&self) -> &[Pattern];

    /// Find a pattern by name.
    fn lookup(&self, name: &str) -> Option<&Pattern> {
        self.patterns().iter().find(|pattern| pattern.name() == name)
    }
}

/// The built-in pattern catalogue.
#[derive(Clone, Debug)]
pub struct StandardCatalog {
    patterns: Vec<Pattern>,
}

fn pattern(name: &str, min_vertices: u64, min_labels: u64, edges: &[(u64, u64, u64)]) -> Pattern {
    let edges = edges
        .iter()
        .map(|&(src, tgt, label)| PatternEdge { src, tgt, label })
        .collect();
    Pattern::new(name, min_vertices, min_labels, edges)
}

impl StandardCatalog {
    /// Build the catalogue of built-in patterns.
    #[must_use]
    pub fn new() -> Self {
        let patterns = vec![
            // Four-cycle with a chord across it.
            pattern(
                "chorded-cycle",
                4,
                5,
                &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 5)],
            ),
            // Chorded cycle plus a self-loop on the entry vertex.
            pattern(
                "looped-cycle",
                4,
                6,
                &[
                    (0, 1, 1),
                    (1, 2, 2),
                    (2, 3, 3),
                    (3, 0, 4),
                    (0, 2, 5),
                    (0, 0, 6),
                ],
            ),
            // Looped cycle plus the second diagonal.
            pattern(
                "crossed-cycle",
                4,
                7,
                &[
                    (0, 1, 1),
                    (1, 2, 2),
                    (2, 3, 3),
                    (3, 0, 4),
                    (0, 2, 5),
                    (0, 0, 6),
                    (1, 3, 7),
                ],
            ),
            // Tail into a triangle.
            pattern(
                "kite",
                4,
                6,
                &[(0, 1, 3), (1, 2, 4), (1, 3, 5), (2, 3, 6)],
            ),
            // Mutual pair feeding a path that forks at the end.
            pattern(
                "mirror-fork",
                6,
                5,
                &[
                    (0, 1, 1),
                    (1, 0, 1),
                    (1, 2, 2),
                    (2, 3, 3),
                    (3, 4, 4),
                    (3, 5, 5),
                ],
            ),
            // Triangle with doubled sides and a self-loop.
            pattern(
                "parallel-triangle",
                3,
                7,
                &[
                    (0, 1, 1),
                    (0, 1, 2),
                    (1, 2, 3),
                    (1, 2, 4),
                    (2, 0, 5),
                    (2, 0, 6),
                    (2, 2, 7),
                ],
            ),
            // Five-cycle with a doubled opening edge, doubled closing edge,
            // and a shortcut back to the start.
            pattern(
                "parallel-pentagon",
                5,
                8,
                &[
                    (0, 1, 1),
                    (0, 1, 2),
                    (1, 2, 3),
                    (2, 3, 4),
                    (3, 4, 5),
                    (4, 0, 6),
                    (4, 0, 7),
                    (2, 0, 8),
                ],
            ),
        ];
        Self { patterns }
    }
}

impl Default for StandardCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for StandardCatalog {
    fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

//! Shared helpers for unit tests.

use crate::catalog::{Catalog, Pattern, PatternEdge};

/// Catalogue backed by an arbitrary pattern list.
pub(crate) struct StubCatalog {
    patterns: Vec<Pattern>,
}

impl StubCatalog {
    pub(crate) fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }
}

impl Catalog for StubCatalog {
    fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

/// Build a pattern from bare edge triples.
pub(crate) fn pattern(
    name: &str,
    min_vertices: u64,
    min_labels: u64,
    edges: &[(u64, u64, u64)],
) -> Pattern {
    let edges = edges
        .iter()
        .map(|&(src, tgt, label)| PatternEdge { src, tgt, label })
        .collect();
    Pattern::new(name, min_vertices, min_labels, edges)
}

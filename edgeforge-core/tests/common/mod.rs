use edgeforge_core::{Catalog, Pattern, PatternEdge};

pub struct TinyCatalog {
    patterns: Vec<Pattern>,
}

impl TinyCatalog {
    #[must_use]
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }
}

impl Catalog for TinyCatalog {
    fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

#[must_use]
pub fn pattern(
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

//! Embedding planner.
//!
//! Turns a request for named patterns into a placement plan: one offset per
//! instance, spaced by a stride so instances land on disjoint vertex ranges
//! whenever the graph is large enough. The stride is a best-effort
//! heuristic; when it cannot keep instances apart the planner warns and
//! proceeds.

use tracing::warn;

use crate::{
    builder::GraphDims,
    catalog::{Catalog, Pattern},
    error::{GeneratorError, Result},
    fixture::Edge,
};

/// Which patterns to embed, and how many instances of each.
///
/// `repeat` applies per name: the instance total is
/// `names.len() * repeat`, placed name-major (every instance of the first
/// name, then every instance of the second, and so on).
///
/// # Examples
///
/// ```
/// use edgeforge_core::EmbeddingRequest;
///
/// let request = EmbeddingRequest::new(["kite", "mirror-fork"], 3);
/// assert_eq!(request.instance_count(), 6);
/// assert!(EmbeddingRequest::none().instance_count() == 0);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmbeddingRequest {
    names: Vec<String>,
    repeat: u64,
}

impl EmbeddingRequest {
    /// Request `repeat` instances of every named pattern.
    pub fn new<I, S>(names: I, repeat: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            repeat,
        }
    }

    /// Request no embeddings at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            names: Vec::new(),
            repeat: 1,
        }
    }

    /// Requested pattern names, in request order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Instances requested per name.
    pub const fn repeat(&self) -> u64 {
        self.repeat
    }

    /// Total number of instances the request asks for.
    pub fn instance_count(&self) -> u64 {
        (self.names.len() as u64).saturating_mul(self.repeat)
    }
}

/// One planned pattern instance: the pattern and its vertex offset.
#[derive(Clone, Copy, Debug)]
pub struct Placement<'c> {
    pattern: &'c Pattern,
    offset: u64,
}

impl<'c> Placement<'c> {
    /// Pair a pattern with a vertex offset.
    #[must_use]
    pub const fn new(pattern: &'c Pattern, offset: u64) -> Self {
        Self { pattern, offset }
    }

    /// The placed pattern.
    pub const fn pattern(&self) -> &'c Pattern {
        self.pattern
    }

    /// Offset added (mod vertices) to the pattern's relative vertex ids.
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// The instance's edges in absolute coordinates.
    ///
    /// Vertex ids are shifted by the offset and wrapped into
    /// `[0, vertices)`; labels pass through untouched.
    pub fn absolute_edges(self, vertices: u64) -> impl Iterator<Item = Edge> + 'c {
        let offset = self.offset;
        self.pattern.edges().iter().map(move |edge| Edge {
            src: edge.src.wrapping_add(offset) % vertices,
            tgt: edge.tgt.wrapping_add(offset) % vertices,
            label: edge.label,
        })
    }
}

/// Ordered placements for every requested instance.
#[derive(Clone, Debug)]
pub struct PlacementPlan<'c> {
    placements: Vec<Placement<'c>>,
    stride: u64,
    vertices: u64,
}

impl<'c> PlacementPlan<'c> {
    /// The planned placements, in request order.
    pub fn placements(&self) -> &[Placement<'c>] {
        &self.placements
    }

    /// Spacing between successive instance offsets.
    pub const fn stride(&self) -> u64 {
        self.stride
    }

    /// Whether the plan places no instances.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Total number of edges the plan will embed.
    pub fn embedded_edge_count(&self) -> u64 {
        self.placements
            .iter()
            .fold(0u64, |total, placement| {
                total.saturating_add(placement.pattern().edge_count())
            })
    }

    /// Every embedded edge in plan order, instance by instance.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let vertices = self.vertices;
        self.placements
            .iter()
            .flat_map(move |placement| placement.absolute_edges(vertices))
    }
}

/// Plan placements for `request` against `dims`, resolving names in
/// `catalog`.
///
/// Instance `i` (name-major request order) receives the offset
/// `(i * stride) % vertices` with `stride = max(1, vertices / instances)`.
/// The stride spreads instances around the vertex space but does not prove
/// them disjoint; when the stride is smaller than the widest requested
/// pattern span, or the last instance would reach past the vertex count, a
/// warning is emitted and planning continues.
///
/// # Errors
///
/// - [`GeneratorError::InvalidDimensions`] when `dims` has zero vertices or
///   labels.
/// - [`GeneratorError::UnknownPattern`] when a name is not in the catalog.
/// - [`GeneratorError::InfeasiblePattern`] when a pattern needs more
///   vertices or labels than `dims` offers.
/// - [`GeneratorError::InfeasibleBudget`] when the embedded edges alone
///   would exceed the edge budget.
///
/// # Examples
///
/// ```
/// use edgeforge_core::{EmbeddingRequest, GraphDims, StandardCatalog, plan};
///
/// let dims = GraphDims {
///     vertices: 40,
///     edges: 100,
///     labels: 10,
/// };
/// let request = EmbeddingRequest::new(["chorded-cycle"], 2);
/// let catalog = StandardCatalog::new();
/// let placed = plan(dims, &request, &catalog)?;
/// assert_eq!(placed.stride(), 20);
/// assert_eq!(placed.embedded_edge_count(), 10);
/// # Ok::<(), edgeforge_core::GeneratorError>(())
/// ```
pub fn plan<'c, C>(
    dims: GraphDims,
    request: &EmbeddingRequest,
    catalog: &'c C,
) -> Result<PlacementPlan<'c>>
where
    C: Catalog + ?Sized,
{
    if dims.vertices == 0 || dims.labels == 0 {
        return Err(GeneratorError::InvalidDimensions {
            vertices: dims.vertices,
            labels: dims.labels,
        });
    }

    let mut resolved = Vec::with_capacity(request.names().len());
    for name in request.names() {
        let pattern = catalog
            .lookup(name)
            .ok_or_else(|| GeneratorError::UnknownPattern { name: name.clone() })?;
        if pattern.min_vertices() > dims.vertices || pattern.min_labels() > dims.labels {
            return Err(GeneratorError::InfeasiblePattern {
                name: pattern.name().to_owned(),
                required_vertices: pattern.min_vertices(),
                required_labels: pattern.min_labels(),
                vertices: dims.vertices,
                labels: dims.labels,
            });
        }
        resolved.push(pattern);
    }

    let per_round = resolved
        .iter()
        .fold(0u64, |total, pattern| total.saturating_add(pattern.edge_count()));
    let required = per_round.saturating_mul(request.repeat());
    if required > dims.edges {
        return Err(GeneratorError::InfeasibleBudget {
            required,
            requested: dims.edges,
        });
    }

    let instances = request.instance_count();
    let stride = (dims.vertices / instances.max(1)).max(1);

    let mut placements = Vec::with_capacity(usize::try_from(instances).unwrap_or(0));
    let mut index: u64 = 0;
    for pattern in &resolved {
        for _ in 0..request.repeat() {
            let offset = index.wrapping_mul(stride) % dims.vertices;
            placements.push(Placement::new(pattern, offset));
            index = index.wrapping_add(1);
        }
    }

    if instances > 0 {
        let widest = resolved
            .iter()
            .map(|pattern| pattern.min_vertices())
            .max()
            .unwrap_or(0);
        let last_end = instances
            .saturating_sub(1)
            .saturating_mul(stride)
            .saturating_add(widest);
        if stride < widest || last_end > dims.vertices {
            warn!(
                stride,
                widest_span = widest,
                instances,
                vertices = dims.vertices,
                "stride cannot keep pattern instances on disjoint vertex ranges"
            );
        }
    }

    Ok(PlacementPlan {
        placements,
        stride,
        vertices: dims.vertices,
    })
}

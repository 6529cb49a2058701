//! Fixture generation orchestration.

use tracing::{Span, field, info, instrument};

use crate::{
    builder::GraphDims,
    catalog::Catalog,
    error::Result,
    filler::FillerStream,
    fixture::{GraphFixture, PlacedPattern},
    planner::{EmbeddingRequest, plan},
};

/// Synthesizes fixture graphs for one validated set of dimensions.
///
/// Built by [`crate::GeneratorBuilder`]; holds no state beyond the
/// dimensions and the seed, so one generator can produce any number of
/// identical fixtures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Generator {
    dims: GraphDims,
    seed: u64,
}

impl Generator {
    pub(crate) const fn new(dims: GraphDims, seed: u64) -> Self {
        Self { dims, seed }
    }

    /// Dimensions every generated fixture will have.
    pub const fn dims(&self) -> GraphDims {
        self.dims
    }

    /// Seed governing the filler label stream.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Synthesize a fixture: plan the embeddings, emit their absolute
    /// edges, then fill the remaining budget with the deterministic filler
    /// stream.
    ///
    /// # Errors
    ///
    /// Propagates the planner's failures; nothing is produced on any of
    /// them.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeforge_core::{EmbeddingRequest, GeneratorBuilder, StandardCatalog};
    ///
    /// let generator = GeneratorBuilder::new()
    ///     .with_vertices(10)
    ///     .with_edges(20)
    ///     .with_labels(10)
    ///     .build()?;
    /// let request = EmbeddingRequest::new(["chorded-cycle"], 1);
    /// let fixture = generator.generate(&StandardCatalog::new(), &request)?;
    /// assert_eq!(fixture.edges().len(), 20);
    /// assert_eq!(fixture.embedded_count(), 5);
    /// # Ok::<(), edgeforge_core::GeneratorError>(())
    /// ```
    #[instrument(
        name = "core.generate",
        err,
        skip(self, catalog, request),
        fields(
            vertices = self.dims.vertices,
            edges = self.dims.edges,
            labels = self.dims.labels,
            seed = self.seed,
            instances = field::Empty,
        )
    )]
    pub fn generate<C>(&self, catalog: &C, request: &EmbeddingRequest) -> Result<GraphFixture>
    where
        C: Catalog + ?Sized,
    {
        let placed = plan(self.dims, request, catalog)?;
        Span::current().record("instances", placed.placements().len());

        let mut edges = Vec::with_capacity(usize::try_from(self.dims.edges).unwrap_or(0));
        edges.extend(placed.edges());
        let embedded = edges.len() as u64;
        // plan() bounded the embedded count by the budget already.
        let remaining = self.dims.edges - embedded;
        edges.extend(FillerStream::new(
            self.dims.vertices,
            self.dims.labels,
            self.seed,
            remaining,
        ));

        let placements: Vec<PlacedPattern> = placed
            .placements()
            .iter()
            .map(|placement| PlacedPattern {
                name: placement.pattern().name().to_owned(),
                offset: placement.offset(),
                edge_count: placement.pattern().edge_count(),
            })
            .collect();

        info!(embedded, filler = remaining, "fixture synthesized");
        Ok(GraphFixture::from_parts(self.dims, self.seed, placements, edges))
    }
}

//! Builder for configuring a [`Generator`].

use crate::{
    error::{GeneratorError, Result},
    generator::Generator,
};

/// Default vertex count.
pub const DEFAULT_VERTICES: u64 = 200_000;
/// Default edge count.
pub const DEFAULT_EDGES: u64 = 1_000_000;
/// Default label count.
pub const DEFAULT_LABELS: u64 = 10;
/// Default seed.
pub const DEFAULT_SEED: u64 = 1;

/// Dimensions of a generated graph.
///
/// # Examples
///
/// ```
/// use edgeforge_core::GraphDims;
///
/// let dims = GraphDims {
///     vertices: 100,
///     edges: 400,
///     labels: 8,
/// };
/// assert_eq!(dims.edges, 400);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GraphDims {
    /// Number of vertices; ids run over `[0, vertices)`.
    pub vertices: u64,
    /// Exact number of edges the generated graph holds.
    pub edges: u64,
    /// Number of distinct labels available to the filler stream.
    pub labels: u64,
}

/// Builder assembling a validated [`Generator`].
///
/// # Examples
///
/// ```
/// use edgeforge_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new()
///     .with_vertices(50)
///     .with_edges(200)
///     .with_labels(5)
///     .with_seed(7)
///     .build()?;
/// assert_eq!(generator.dims().vertices, 50);
/// # Ok::<(), edgeforge_core::GeneratorError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GeneratorBuilder {
    vertices: u64,
    edges: u64,
    labels: u64,
    seed: u64,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
            edges: DEFAULT_EDGES,
            labels: DEFAULT_LABELS,
            seed: DEFAULT_SEED,
        }
    }
}

impl GeneratorBuilder {
    /// Create a builder with the default dimensions and seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeforge_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.vertices(), 200_000);
    /// assert_eq!(builder.edges(), 1_000_000);
    /// assert_eq!(builder.labels(), 10);
    /// assert_eq!(builder.seed(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vertex count.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeforge_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new().with_vertices(64);
    /// assert_eq!(builder.vertices(), 64);
    /// ```
    #[must_use]
    pub const fn with_vertices(mut self, vertices: u64) -> Self {
        self.vertices = vertices;
        self
    }

    /// Set the edge count.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeforge_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new().with_edges(256);
    /// assert_eq!(builder.edges(), 256);
    /// ```
    #[must_use]
    pub const fn with_edges(mut self, edges: u64) -> Self {
        self.edges = edges;
        self
    }

    /// Set the label count.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeforge_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new().with_labels(16);
    /// assert_eq!(builder.labels(), 16);
    /// ```
    #[must_use]
    pub const fn with_labels(mut self, labels: u64) -> Self {
        self.labels = labels;
        self
    }

    /// Set the seed governing the filler label stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeforge_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new().with_seed(99);
    /// assert_eq!(builder.seed(), 99);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Configured vertex count.
    pub const fn vertices(&self) -> u64 {
        self.vertices
    }

    /// Configured edge count.
    pub const fn edges(&self) -> u64 {
        self.edges
    }

    /// Configured label count.
    pub const fn labels(&self) -> u64 {
        self.labels
    }

    /// Configured seed.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Validate the configuration and build a [`Generator`].
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidDimensions`] when the vertex or
    /// label count is zero. An edge count of zero is valid and yields an
    /// empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeforge_core::{GeneratorBuilder, GeneratorError};
    ///
    /// let error = GeneratorBuilder::new()
    ///     .with_vertices(0)
    ///     .build()
    ///     .expect_err("zero vertices are rejected");
    /// assert!(matches!(error, GeneratorError::InvalidDimensions { .. }));
    /// ```
    pub fn build(self) -> Result<Generator> {
        if self.vertices == 0 || self.labels == 0 {
            return Err(GeneratorError::InvalidDimensions {
                vertices: self.vertices,
                labels: self.labels,
            });
        }
        let dims = GraphDims {
            vertices: self.vertices,
            edges: self.edges,
            labels: self.labels,
        };
        Ok(Generator::new(dims, self.seed))
    }
}

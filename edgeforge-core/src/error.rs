//! Error types for the edgeforge core library.
//!
//! Defines the generation error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

/// Error type produced when configuring or running a [`crate::Generator`].
///
/// Every variant is terminal for the call that raised it: the core validates
/// before emitting anything, never retries, and never produces partial
/// output.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// Vertex and label counts must both be positive.
    #[error("vertex and label counts must be positive (vertices={vertices}, labels={labels})")]
    InvalidDimensions {
        /// Vertex count supplied by the caller.
        vertices: u64,
        /// Label count supplied by the caller.
        labels: u64,
    },
    /// A requested pattern is not in the catalog.
    #[error("pattern `{name}` is not in the catalog")]
    UnknownPattern {
        /// Name that failed to resolve.
        name: String,
    },
    /// Graph dimensions are too small to hold a requested pattern.
    #[error(
        "pattern `{name}` needs at least {required_vertices} vertices and {required_labels} labels, graph has {vertices} and {labels}"
    )]
    InfeasiblePattern {
        /// Pattern that does not fit.
        name: String,
        /// Vertices the pattern requires.
        required_vertices: u64,
        /// Labels the pattern requires.
        required_labels: u64,
        /// Vertices the graph offers.
        vertices: u64,
        /// Labels the graph offers.
        labels: u64,
    },
    /// The embedded edges alone exceed the requested edge budget.
    #[error("embedding requires {required} edges but only {requested} were requested")]
    InfeasibleBudget {
        /// Edges the placement plan would emit.
        required: u64,
        /// Edge budget requested by the caller.
        requested: u64,
    },
}

/// Stable codes describing [`GeneratorError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GeneratorErrorCode {
    /// Vertex and label counts must both be positive.
    InvalidDimensions,
    /// A requested pattern is not in the catalog.
    UnknownPattern,
    /// Graph dimensions are too small to hold a requested pattern.
    InfeasiblePattern,
    /// The embedded edges alone exceed the requested edge budget.
    InfeasibleBudget,
}

impl GeneratorErrorCode {
    /// Return the stable machine-readable representation of this error code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidDimensions => "EDGEFORGE_INVALID_DIMENSIONS",
            Self::UnknownPattern => "EDGEFORGE_UNKNOWN_PATTERN",
            Self::InfeasiblePattern => "EDGEFORGE_INFEASIBLE_PATTERN",
            Self::InfeasibleBudget => "EDGEFORGE_INFEASIBLE_BUDGET",
        }
    }
}

impl fmt::Display for GeneratorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GeneratorError {
    /// Retrieve the stable [`GeneratorErrorCode`] for this error.
    pub const fn code(&self) -> GeneratorErrorCode {
        match self {
            Self::InvalidDimensions { .. } => GeneratorErrorCode::InvalidDimensions,
            Self::UnknownPattern { .. } => GeneratorErrorCode::UnknownPattern,
            Self::InfeasiblePattern { .. } => GeneratorErrorCode::InfeasiblePattern,
            Self::InfeasibleBudget { .. } => GeneratorErrorCode::InfeasibleBudget,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GeneratorError>;

//! Core fixture-graph synthesis for edgeforge.
//!
//! Generates directed, edge-labelled multigraphs with known canonical
//! sub-patterns embedded at planned offsets, so a downstream
//! pattern-matching engine can be checked against ground truth inside a
//! large pseudo-random graph. Everything in this crate is pure
//! computation; argument parsing and edge-file writing belong to the
//! callers.
//!
//! # Examples
//!
//! ```
//! use edgeforge_core::{EmbeddingRequest, GeneratorBuilder, StandardCatalog};
//!
//! let generator = GeneratorBuilder::new()
//!     .with_vertices(40)
//!     .with_edges(120)
//!     .with_labels(10)
//!     .with_seed(5)
//!     .build()?;
//! let fixture = generator.generate(
//!     &StandardCatalog::new(),
//!     &EmbeddingRequest::new(["kite"], 2),
//! )?;
//! assert_eq!(fixture.edges().len(), 120);
//! assert_eq!(fixture.placements().len(), 2);
//! # Ok::<(), edgeforge_core::GeneratorError>(())
//! ```

mod builder;
mod catalog;
mod error;
mod filler;
mod fixture;
mod generator;
mod planner;
#[cfg(test)]
mod test_utils;

pub use builder::{
    DEFAULT_EDGES, DEFAULT_LABELS, DEFAULT_SEED, DEFAULT_VERTICES, GeneratorBuilder, GraphDims,
};
pub use catalog::{Catalog, Pattern, PatternEdge, StandardCatalog};
pub use error::{GeneratorError, GeneratorErrorCode, Result};
pub use filler::FillerStream;
pub use fixture::{Edge, GraphFixture, InconsistentFixture, PlacedPattern};
pub use generator::Generator;
pub use planner::{EmbeddingRequest, Placement, PlacementPlan, plan};

//! Edge-file serialization for generated fixtures.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use edgeforge_core::{GraphDims, GraphFixture};
use tracing::{Span, field, instrument};

use super::commands::CliError;

/// Auto-generated file name encoding the dimensions and seed of a fixture.
pub(super) fn auto_file_name(dims: GraphDims, seed: u64) -> String {
    format!(
        "graph_v{}_e{}_l{}_s{}.edge",
        dims.vertices, dims.edges, dims.labels, seed
    )
}

/// Renders `fixture` to `writer` in the edge-list text format: one header
/// line `vertices edges labels`, then one `src tgt label` line per edge, in
/// fixture order.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use edgeforge_cli::cli::render_edge_file;
/// # use edgeforge_core::{EmbeddingRequest, GeneratorBuilder, StandardCatalog};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let generator = GeneratorBuilder::new()
///     .with_vertices(4)
///     .with_edges(3)
///     .with_labels(2)
///     .with_seed(1)
///     .build()?;
/// let fixture = generator.generate(&StandardCatalog::new(), &EmbeddingRequest::none())?;
/// let mut buffer = Vec::new();
/// render_edge_file(&fixture, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("4 3 2\n"));
/// assert_eq!(text.lines().count(), 4);
/// # Ok(())
/// # }
/// ```
pub fn render_edge_file(fixture: &GraphFixture, mut writer: impl Write) -> io::Result<()> {
    let dims = fixture.dims();
    writeln!(writer, "{} {} {}", dims.vertices, dims.edges, dims.labels)?;
    for edge in fixture.edges() {
        writeln!(writer, "{} {} {}", edge.src, edge.tgt, edge.label)?;
    }
    Ok(())
}

/// Write `fixture` to `path`, creating parent directories as needed.
///
/// The destination is only opened after synthesis has succeeded, so
/// feasibility failures leave no trace on disk. An I/O failure part-way
/// through the write may leave a truncated file behind.
#[instrument(
    name = "cli.write_edge_file",
    err,
    skip(fixture),
    fields(path = field::Empty)
)]
pub(super) fn write_edge_file(fixture: &GraphFixture, path: &Path) -> Result<(), CliError> {
    Span::current().record("path", field::display(path.display()));
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| CliError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    render_edge_file(fixture, &mut writer).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

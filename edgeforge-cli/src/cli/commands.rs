//! Command implementations and argument parsing for the edgeforge CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use edgeforge_core::{
    Catalog, DEFAULT_EDGES, DEFAULT_LABELS, DEFAULT_VERTICES, EmbeddingRequest, GeneratorBuilder,
    GeneratorError, GraphDims, PlacedPattern, StandardCatalog,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::output::{auto_file_name, write_edge_file};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "edgeforge", about = "Generate synthetic edge-list fixture graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a fixture graph and write it as an edge-list file.
    Generate(GenerateCommand),
    /// List the embeddable patterns in the catalogue.
    Patterns,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of vertices to include.
    #[arg(long, default_value_t = DEFAULT_VERTICES)]
    pub vertices: u64,

    /// Number of edges to generate.
    #[arg(long, default_value_t = DEFAULT_EDGES)]
    pub edges: u64,

    /// Number of distinct edge labels.
    #[arg(long, default_value_t = DEFAULT_LABELS)]
    pub labels: u64,

    /// Seed for the filler label stream (default: drawn from entropy).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pattern to embed; repeat the flag to embed several.
    #[arg(long = "embed", value_name = "PATTERN")]
    pub embed: Vec<String>,

    /// Instances to place per embedded pattern.
    #[arg(long, default_value_t = 1)]
    pub repeat: u64,

    /// Output .edge file path (defaults to an auto-named file).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Directory for auto-named output files when --output is not given.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Filesystem I/O failed while writing the edge file.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Fixture synthesis failed.
    #[error(transparent)]
    Core(#[from] GeneratorError),
}

/// Outcome of one generated fixture, rendered for the user.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Path the edge file was written to.
    pub path: PathBuf,
    /// Dimensions of the generated graph.
    pub dims: GraphDims,
    /// Seed the fixture was generated with.
    pub seed: u64,
    /// Ground-truth placements of the embedded patterns.
    pub placements: Vec<PlacedPattern>,
}

/// One catalogue entry, snapshotted for the `patterns` listing.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PatternSummary {
    /// Name used to request the pattern.
    pub name: String,
    /// Smallest vertex count a graph needs to hold one instance.
    pub min_vertices: u64,
    /// Smallest label count a graph needs to hold one instance.
    pub min_labels: u64,
    /// Edges one instance contributes.
    pub edge_count: u64,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// A fixture was generated and written.
    Generated(GenerationSummary),
    /// The pattern catalogue was listed.
    Patterns(Vec<PatternSummary>),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when synthesis or file writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use clap::Parser;
/// # use edgeforge_cli::cli::{Cli, ExecutionSummary, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = tempfile::TempDir::new()?;
/// let output = dir.path().join("tiny.edge");
/// let cli = Cli::try_parse_from([
///     "edgeforge",
///     "generate",
///     "--vertices",
///     "10",
///     "--edges",
///     "20",
///     "--labels",
///     "10",
///     "--seed",
///     "1",
///     "--embed",
///     "chorded-cycle",
///     "--output",
///     output.to_str().expect("temp paths are UTF-8"),
/// ])?;
/// let ExecutionSummary::Generated(summary) = run_cli(cli)? else {
///     unreachable!("generate reports a generation summary");
/// };
/// assert_eq!(summary.seed, 1);
/// assert!(output.exists());
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(generate).map(ExecutionSummary::Generated)
        }
        Command::Patterns => {
            Span::current().record("command", field::display("patterns"));
            Ok(ExecutionSummary::Patterns(pattern_listing()))
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        vertices = command.vertices,
        edges = command.edges,
        labels = command.labels,
        seed = field::Empty,
        path = field::Empty,
    )
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerationSummary, CliError> {
    let seed = command.seed.unwrap_or_else(entropy_seed);
    let span = Span::current();
    span.record("seed", seed);

    let generator = GeneratorBuilder::new()
        .with_vertices(command.vertices)
        .with_edges(command.edges)
        .with_labels(command.labels)
        .with_seed(seed)
        .build()?;
    let request = EmbeddingRequest::new(command.embed, command.repeat);
    let fixture = generator.generate(&StandardCatalog::new(), &request)?;

    let path = command
        .output
        .unwrap_or_else(|| command.output_dir.join(auto_file_name(fixture.dims(), seed)));
    span.record("path", field::display(path.display()));
    write_edge_file(&fixture, &path)?;

    info!(
        path = %path.display(),
        edges = fixture.edges().len() as u64,
        instances = fixture.placements().len() as u64,
        "edge file written"
    );
    Ok(GenerationSummary {
        path,
        dims: fixture.dims(),
        seed,
        placements: fixture.placements().to_vec(),
    })
}

pub(super) fn pattern_listing() -> Vec<PatternSummary> {
    StandardCatalog::new()
        .patterns()
        .iter()
        .map(|pattern| PatternSummary {
            name: pattern.name().to_owned(),
            min_vertices: pattern.min_vertices(),
            min_labels: pattern.min_labels(),
            edge_count: pattern.edge_count(),
        })
        .collect()
}

fn entropy_seed() -> u64 {
    rand::random()
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use edgeforge_cli::cli::{ExecutionSummary, GenerationSummary, render_summary};
/// # use edgeforge_core::GraphDims;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Generated(GenerationSummary {
///     path: "out/graph.edge".into(),
///     dims: GraphDims {
///         vertices: 10,
///         edges: 20,
///         labels: 10,
///     },
///     seed: 7,
///     placements: Vec::new(),
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("seed: 7"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated(generated) => {
            writeln!(writer, "wrote: {}", generated.path.display())?;
            writeln!(writer, "vertices: {}", generated.dims.vertices)?;
            writeln!(writer, "edges: {}", generated.dims.edges)?;
            writeln!(writer, "labels: {}", generated.dims.labels)?;
            writeln!(writer, "seed: {}", generated.seed)?;
            writeln!(writer, "embedded instances: {}", generated.placements.len())?;
            for placement in &generated.placements {
                writeln!(
                    writer,
                    "{}\toffset {}\t{} edges",
                    placement.name, placement.offset, placement.edge_count
                )?;
            }
        }
        ExecutionSummary::Patterns(patterns) => {
            writeln!(writer, "patterns: {}", patterns.len())?;
            for pattern in patterns {
                writeln!(
                    writer,
                    "{}\t{} vertices\t{} labels\t{} edges",
                    pattern.name, pattern.min_vertices, pattern.min_labels, pattern.edge_count
                )?;
            }
        }
    }
    Ok(())
}

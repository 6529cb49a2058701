//! Unit tests for the CLI commands and edge-file output helpers.

use super::commands::run_generate;
use super::output::auto_file_name;
use super::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, GenerationSummary, PatternSummary,
    render_summary, run_cli,
};

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use edgeforge_core::{FillerStream, GeneratorErrorCode, GraphDims, PlacedPattern};
use rstest::rstest;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use edgeforge_test_support::CaptureLayer;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[rstest]
fn generate_writes_the_header_and_planted_pattern() -> TestResult {
    let dir = temp_dir();
    let command = generate_command(&dir, "planted.edge");
    let path = command.output.clone().expect("output path is set");

    let summary = run_generate(command)?;
    assert_eq!(summary.path, path);
    assert_eq!(summary.seed, 1);
    assert_eq!(
        summary.placements,
        vec![PlacedPattern {
            name: "chorded-cycle".into(),
            offset: 0,
            edge_count: 5,
        }]
    );

    let text = fs::read_to_string(&path)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "10 20 10");
    assert_eq!(&lines[1..6], &["0 1 1", "1 2 2", "2 3 3", "3 0 4", "0 2 5"]);

    let filler: Vec<String> = FillerStream::new(10, 10, 1, 15)
        .map(|edge| format!("{} {} {}", edge.src, edge.tgt, edge.label))
        .collect();
    assert_eq!(&lines[6..], filler.as_slice());
    Ok(())
}

#[rstest]
fn equal_seeds_write_byte_identical_files() -> TestResult {
    let dir = temp_dir();
    let first = run_generate(generate_command(&dir, "first.edge"))?;
    let second = run_generate(generate_command(&dir, "second.edge"))?;
    assert_eq!(fs::read(first.path)?, fs::read(second.path)?);
    Ok(())
}

#[rstest]
fn auto_named_outputs_land_in_the_output_dir() -> TestResult {
    let dir = temp_dir();
    let mut command = generate_command(&dir, "unused.edge");
    command.output = None;

    let summary = run_generate(command)?;
    assert_eq!(summary.path, dir.path().join("graph_v10_e20_l10_s1.edge"));
    assert!(summary.path.exists());
    Ok(())
}

#[rstest]
fn parent_directories_are_created() -> TestResult {
    let dir = temp_dir();
    let mut command = generate_command(&dir, "unused.edge");
    command.output = Some(dir.path().join("nested/fixtures/out.edge"));

    let summary = run_generate(command)?;
    assert!(summary.path.exists());
    Ok(())
}

#[rstest]
fn missing_seeds_are_drawn_from_entropy() -> TestResult {
    let dir = temp_dir();
    let mut command = generate_command(&dir, "unused.edge");
    command.seed = None;
    command.output = None;

    let summary = run_generate(command)?;
    let expected = format!("graph_v10_e20_l10_s{}.edge", summary.seed);
    assert_eq!(summary.path, dir.path().join(expected));
    assert!(summary.path.exists());
    Ok(())
}

#[rstest]
#[case::unknown_pattern("moebius-ladder", 10, 20, GeneratorErrorCode::UnknownPattern)]
#[case::infeasible_pattern("chorded-cycle", 3, 20, GeneratorErrorCode::InfeasiblePattern)]
#[case::overdrawn_budget("chorded-cycle", 10, 4, GeneratorErrorCode::InfeasibleBudget)]
#[case::zero_vertices("chorded-cycle", 0, 20, GeneratorErrorCode::InvalidDimensions)]
fn failed_generations_leave_no_file(
    #[case] embed: &str,
    #[case] vertices: u64,
    #[case] edges: u64,
    #[case] code: GeneratorErrorCode,
) {
    let dir = temp_dir();
    let mut command = generate_command(&dir, "rejected.edge");
    command.embed = vec![embed.into()];
    command.vertices = vertices;
    command.edges = edges;
    let path = command.output.clone().expect("output path is set");

    let err = run_generate_expecting_error(command, "generation must fail");
    match err {
        CliError::Core(core) => assert_eq!(core.code(), code),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!path.exists());
}

#[rstest]
fn blocked_destinations_surface_io_errors() -> TestResult {
    let dir = temp_dir();
    fs::write(dir.path().join("blocker"), "")?;
    let mut command = generate_command(&dir, "unused.edge");
    command.output = Some(dir.path().join("blocker").join("out.edge"));

    let err = run_generate_expecting_error(command, "a file in the directory position must fail");
    assert!(matches!(err, CliError::Io { .. }));
    Ok(())
}

#[rstest]
fn run_cli_routes_generate_commands() -> TestResult {
    let dir = temp_dir();
    let cli = Cli {
        command: Command::Generate(generate_command(&dir, "routed.edge")),
    };
    let summary = run_cli(cli)?;
    let ExecutionSummary::Generated(generated) = summary else {
        panic!("generate must produce a generation summary");
    };
    assert!(generated.path.exists());
    Ok(())
}

#[rstest]
fn patterns_lists_the_catalogue() -> TestResult {
    let summary = run_cli(Cli {
        command: Command::Patterns,
    })?;
    let ExecutionSummary::Patterns(patterns) = summary else {
        panic!("patterns must produce a listing");
    };
    assert_eq!(patterns.len(), 7);
    assert!(patterns.contains(&PatternSummary {
        name: "chorded-cycle".into(),
        min_vertices: 4,
        min_labels: 5,
        edge_count: 5,
    }));
    Ok(())
}

#[rstest]
fn render_summary_reports_the_generated_fixture() -> TestResult {
    let summary = ExecutionSummary::Generated(GenerationSummary {
        path: "out/planted.edge".into(),
        dims: GraphDims {
            vertices: 10,
            edges: 20,
            labels: 10,
        },
        seed: 1,
        placements: vec![PlacedPattern {
            name: "chorded-cycle".into(),
            offset: 0,
            edge_count: 5,
        }],
    });
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert!(text.contains("wrote: out/planted.edge"));
    assert!(text.contains("vertices: 10"));
    assert!(text.contains("seed: 1"));
    assert!(text.contains("embedded instances: 1"));
    assert!(text.contains("chorded-cycle\toffset 0\t5 edges"));
    Ok(())
}

#[rstest]
fn render_summary_reports_the_pattern_listing() -> TestResult {
    let summary = ExecutionSummary::Patterns(vec![PatternSummary {
        name: "kite".into(),
        min_vertices: 4,
        min_labels: 6,
        edge_count: 4,
    }]);
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert!(text.contains("patterns: 1"));
    assert!(text.contains("kite\t4 vertices\t6 labels\t4 edges"));
    Ok(())
}

#[rstest]
fn clap_parses_repeated_embed_flags() -> TestResult {
    let cli = Cli::try_parse_from([
        "edgeforge",
        "generate",
        "--embed",
        "kite",
        "--embed",
        "chorded-cycle",
        "--repeat",
        "2",
    ])?;
    let Command::Generate(command) = cli.command else {
        panic!("generate must parse to the generate command");
    };
    assert_eq!(
        command.embed,
        vec!["kite".to_owned(), "chorded-cycle".to_owned()]
    );
    assert_eq!(command.repeat, 2);
    assert_eq!(command.vertices, 200_000);
    assert_eq!(command.edges, 1_000_000);
    assert_eq!(command.labels, 10);
    assert_eq!(command.seed, None);
    assert_eq!(command.output, None);
    assert_eq!(command.output_dir, PathBuf::from("."));
    Ok(())
}

#[rstest]
fn clap_rejects_non_numeric_dimensions() {
    let args = ["edgeforge", "generate", "--vertices", "many"];
    let result = Cli::try_parse_from(args);
    assert!(result.is_err());
}

#[rstest]
fn generate_emits_tracing_fields() -> TestResult {
    let dir = temp_dir();
    let command = generate_command(&dir, "traced.edge");
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let summary = tracing::subscriber::with_default(subscriber, || run_generate(command))?;
    assert_eq!(summary.seed, 1);

    let spans = layer.spans();
    let generate = spans
        .iter()
        .find(|span| span.name == "cli.generate")
        .expect("cli.generate span must exist");
    assert_eq!(generate.fields.get("vertices"), Some(&"10".to_owned()));
    assert_eq!(generate.fields.get("seed"), Some(&"1".to_owned()));
    assert!(
        generate
            .fields
            .get("path")
            .is_some_and(|value| value.ends_with("traced.edge"))
    );

    let write = spans
        .iter()
        .find(|span| span.name == "cli.write_edge_file")
        .expect("write span must exist");
    assert!(
        write
            .fields
            .get("path")
            .is_some_and(|value| value.ends_with("traced.edge"))
    );

    let events = layer.events();
    assert!(events.iter().any(|event| {
        event.level == Level::INFO
            && event
                .fields
                .get("message")
                .is_some_and(|value| value == "edge file written")
            && event
                .fields
                .get("edges")
                .is_some_and(|value| value == "20")
    }));
    Ok(())
}

#[rstest]
#[case(10, 20, 10, 1, "graph_v10_e20_l10_s1.edge")]
#[case(200_000, 1_000_000, 10, 42, "graph_v200000_e1000000_l10_s42.edge")]
fn auto_file_name_encodes_dimensions_and_seed(
    #[case] vertices: u64,
    #[case] edges: u64,
    #[case] labels: u64,
    #[case] seed: u64,
    #[case] expected: &str,
) {
    let dims = GraphDims {
        vertices,
        edges,
        labels,
    };
    assert_eq!(auto_file_name(dims, seed), expected);
}

fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

fn generate_command(dir: &TempDir, file_name: &str) -> GenerateCommand {
    GenerateCommand {
        vertices: 10,
        edges: 20,
        labels: 10,
        seed: Some(1),
        embed: vec!["chorded-cycle".into()],
        repeat: 1,
        output: Some(dir.path().join(file_name)),
        output_dir: dir.path().to_path_buf(),
    }
}

/// Run generation and expect an error, panicking with the given message on
/// success.
fn run_generate_expecting_error(command: GenerateCommand, panic_msg: &str) -> CliError {
    match run_generate(command) {
        Ok(_) => panic!("{}", panic_msg),
        Err(err) => err,
    }
}

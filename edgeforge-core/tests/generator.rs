//! End-to-end tests for the fixture generation API.

mod common;

use common::{TinyCatalog, pattern};
use edgeforge_core::{
    EmbeddingRequest, GeneratorBuilder, GeneratorErrorCode, StandardCatalog,
};
use rstest::{fixture, rstest};

#[fixture]
fn catalog() -> StandardCatalog {
    StandardCatalog::new()
}

#[rstest]
fn single_chorded_cycle_lands_at_offset_zero(catalog: StandardCatalog) {
    let generator = GeneratorBuilder::new()
        .with_vertices(10)
        .with_edges(20)
        .with_labels(10)
        .with_seed(1)
        .build()
        .expect("dimensions must be valid");
    let fixture = generator
        .generate(&catalog, &EmbeddingRequest::new(["chorded-cycle"], 1))
        .expect("one instance fits twenty edges");

    let embedded: Vec<(u64, u64, u64)> = fixture
        .embedded()
        .iter()
        .map(|edge| (edge.src, edge.tgt, edge.label))
        .collect();
    assert_eq!(
        embedded,
        vec![(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 5)]
    );

    // At ten vertices no filler ordinal below fifteen hits the self-loop
    // fallback, so the raw formula holds.
    assert_eq!(fixture.filler().len(), 15);
    for (ordinal, edge) in fixture.filler().iter().enumerate() {
        let ordinal = ordinal as u64;
        assert_eq!(edge.src, ordinal % 10);
        assert_eq!(edge.tgt, (ordinal * 17 + 23) % 10);
        assert!(edge.label < 10);
    }
}

#[rstest]
fn instances_wrap_around_the_vertex_space(catalog: StandardCatalog) {
    let generator = GeneratorBuilder::new()
        .with_vertices(6)
        .with_edges(12)
        .with_labels(5)
        .with_seed(2)
        .build()
        .expect("dimensions must be valid");
    let fixture = generator
        .generate(&catalog, &EmbeddingRequest::new(["mirror-fork"], 2))
        .expect("two instances consume the budget exactly");

    let offsets: Vec<u64> = fixture
        .placements()
        .iter()
        .map(|placement| placement.offset)
        .collect();
    assert_eq!(offsets, vec![0, 3]);

    // The second instance shifts by three, wrapping ids 3..6 back onto 0..3.
    let second: Vec<(u64, u64, u64)> = fixture.embedded()[6..]
        .iter()
        .map(|edge| (edge.src, edge.tgt, edge.label))
        .collect();
    assert_eq!(
        second,
        vec![(3, 4, 1), (4, 3, 1), (4, 5, 2), (5, 0, 3), (0, 1, 4), (0, 2, 5)]
    );

    assert!(fixture.filler().is_empty());
    assert_eq!(fixture.edges().len(), 12);
}

#[rstest]
fn placements_record_the_ground_truth(catalog: StandardCatalog) {
    let generator = GeneratorBuilder::new()
        .with_vertices(40)
        .with_edges(100)
        .with_labels(10)
        .with_seed(9)
        .build()
        .expect("dimensions must be valid");
    let fixture = generator
        .generate(
            &catalog,
            &EmbeddingRequest::new(["kite", "parallel-pentagon"], 2),
        )
        .expect("four instances fit a hundred edges");

    let described: Vec<(&str, u64, u64)> = fixture
        .placements()
        .iter()
        .map(|placement| (placement.name.as_str(), placement.offset, placement.edge_count))
        .collect();
    assert_eq!(
        described,
        vec![
            ("kite", 0, 4),
            ("kite", 10, 4),
            ("parallel-pentagon", 20, 8),
            ("parallel-pentagon", 30, 8),
        ]
    );
    assert_eq!(fixture.embedded_count(), 24);
    assert_eq!(fixture.edges().len(), 100);
}

#[rstest]
fn custom_catalogues_plug_in_through_the_trait() {
    let catalog = TinyCatalog::new(vec![pattern("spur", 2, 1, &[(0, 1, 1)])]);
    let generator = GeneratorBuilder::new()
        .with_vertices(8)
        .with_edges(5)
        .with_labels(2)
        .with_seed(3)
        .build()
        .expect("dimensions must be valid");
    let fixture = generator
        .generate(&catalog, &EmbeddingRequest::new(["spur"], 2))
        .expect("two spurs fit five edges");

    let embedded: Vec<(u64, u64, u64)> = fixture
        .embedded()
        .iter()
        .map(|edge| (edge.src, edge.tgt, edge.label))
        .collect();
    assert_eq!(embedded, vec![(0, 1, 1), (4, 5, 1)]);
    assert_eq!(fixture.filler().len(), 3);
}

#[rstest]
#[case::unknown_pattern(EmbeddingRequest::new(["spindle"], 1), GeneratorErrorCode::UnknownPattern)]
#[case::infeasible_pattern(
    EmbeddingRequest::new(["mirror-fork"], 1),
    GeneratorErrorCode::InfeasiblePattern,
)]
#[case::overdrawn_budget(
    EmbeddingRequest::new(["chorded-cycle", "kite"], 2),
    GeneratorErrorCode::InfeasibleBudget,
)]
fn infeasible_requests_fail_before_any_edge_is_made(
    catalog: StandardCatalog,
    #[case] request: EmbeddingRequest,
    #[case] expected: GeneratorErrorCode,
) {
    let generator = GeneratorBuilder::new()
        .with_vertices(5)
        .with_edges(10)
        .with_labels(10)
        .build()
        .expect("dimensions must be valid");
    let error = generator
        .generate(&catalog, &request)
        .expect_err("request must be rejected");
    assert_eq!(error.code(), expected);
}

#[rstest]
fn identical_builders_generate_identical_fixtures(catalog: StandardCatalog) {
    let request = EmbeddingRequest::new(["looped-cycle"], 1);
    let build = || {
        GeneratorBuilder::new()
            .with_vertices(25)
            .with_edges(150)
            .with_labels(7)
            .with_seed(1234)
            .build()
            .expect("dimensions must be valid")
    };

    let first = build().generate(&catalog, &request).expect("feasible");
    let second = build().generate(&catalog, &request).expect("feasible");
    assert_eq!(first, second);
}

#[rstest]
fn zero_edge_budgets_yield_empty_fixtures(catalog: StandardCatalog) {
    let generator = GeneratorBuilder::new()
        .with_vertices(5)
        .with_edges(0)
        .with_labels(3)
        .with_seed(8)
        .build()
        .expect("an empty edge budget is allowed");
    let fixture = generator
        .generate(&catalog, &EmbeddingRequest::none())
        .expect("nothing to synthesize");
    assert!(fixture.edges().is_empty());
    assert!(fixture.placements().is_empty());
}

// tests/unit_pagerank.rs
//! Solver behavior: normalization, dangling mass, determinism, ranking order.

use patchrank_core::graph::{builder, pagerank, HabitatGraph};
use patchrank_core::{PageRankConfig, Patch, PatchId, RankError};
use proptest::prelude::*;

fn build(rows: &[(&str, f64, f64, f64)], threshold: f64) -> HabitatGraph {
    let patches = rows
        .iter()
        .map(|&(id, x, y, q)| Patch::new(id, x, y, q).unwrap())
        .collect();
    builder::build(patches, 15.0, threshold).unwrap()
}

fn score(scores: &patchrank_core::ImportanceDistribution, id: &str) -> f64 {
    scores.get(&PatchId::from(id)).unwrap()
}

#[test]
fn test_line_midpoint_dominates() {
    // A - B - C, 10 units apart; A-C weight ~0.264 survives the 0.01 cut.
    let g = build(
        &[("A", 0.0, 0.0, 1.0), ("B", 10.0, 0.0, 1.0), ("C", 20.0, 0.0, 1.0)],
        0.01,
    );
    assert_eq!(g.edge_count(), 6);
    let scores = pagerank::solve(&g, &PageRankConfig::default()).unwrap();
    assert!(score(&scores, "B") > score(&scores, "A"));
    assert!(score(&scores, "B") > score(&scores, "C"));

    let ranked = scores.ranked();
    assert_eq!(ranked[0].id.as_str(), "B");
    // A and C tie; the id breaks it.
    assert_eq!(ranked[1].id.as_str(), "A");
    assert_eq!(ranked[2].id.as_str(), "C");
}

#[test]
fn test_line_midpoint_dominates_with_pruned_ends() {
    let g = build(
        &[("A", 0.0, 0.0, 1.0), ("B", 10.0, 0.0, 1.0), ("C", 20.0, 0.0, 1.0)],
        0.3,
    );
    assert_eq!(g.edge_count(), 4);
    let scores = pagerank::solve(&g, &PageRankConfig::default()).unwrap();
    assert!(score(&scores, "B") > score(&scores, "A"));
    assert!(score(&scores, "B") > score(&scores, "C"));
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn test_isolated_patch_gets_teleport_share() {
    let g = build(
        &[
            ("A", 0.0, 0.0, 1.0),
            ("B", 5.0, 0.0, 1.0),
            ("C", 0.0, 5.0, 1.0),
            ("D", 5.0, 5.0, 1.0),
            ("far", 5000.0, 5000.0, 1.0),
        ],
        0.01,
    );
    assert_eq!(g.isolated_count(), 1);

    let config = PageRankConfig {
        tolerance: 1e-12,
        max_iterations: 1000,
        ..PageRankConfig::default()
    };
    let scores = pagerank::solve(&g, &config).unwrap();
    let n = g.node_count() as f64;
    let d = config.damping_factor;
    let teleport = (1.0 - d) / n;

    // The isolated node only receives teleport mass plus its own dangling
    // share: s = teleport + d * s / n.
    let far = score(&scores, "far");
    let expected = teleport / (1.0 - d / n);
    assert!((far - expected).abs() < 1e-9, "far={far} expected={expected}");
    assert!(far >= teleport);

    let ranked = scores.ranked();
    assert_eq!(ranked.last().unwrap().id.as_str(), "far");
}

#[test]
fn test_all_dangling_is_uniform() {
    let g = build(&[("A", 0.0, 0.0, 1.0), ("B", 900.0, 0.0, 1.0)], 0.01);
    assert_eq!(g.edge_count(), 0);
    let scores = pagerank::solve(&g, &PageRankConfig::default()).unwrap();
    assert!((score(&scores, "A") - 0.5).abs() < 1e-12);
    assert!((score(&scores, "B") - 0.5).abs() < 1e-12);
}

#[test]
fn test_single_node() {
    let g = build(&[("only", 1.0, 1.0, 0.5)], 0.01);
    let scores = pagerank::solve(&g, &PageRankConfig::default()).unwrap();
    assert!((score(&scores, "only") - 1.0).abs() < 1e-12);
}

#[test]
fn test_convergence_failure_carries_residual() {
    let g = build(
        &[("A", 0.0, 0.0, 1.0), ("B", 3.0, 0.0, 0.1), ("C", 30.0, 0.0, 0.6)],
        0.01,
    );
    let config = PageRankConfig {
        tolerance: 1e-14,
        max_iterations: 2,
        ..PageRankConfig::default()
    };
    match pagerank::solve(&g, &config) {
        Err(RankError::ConvergenceFailure { iterations, residual }) => {
            assert_eq!(iterations, 2);
            assert!(residual.is_finite() && residual > 0.0);
        }
        other => panic!("expected convergence failure, got {other:?}"),
    }
}

fn arb_graph() -> impl Strategy<Value = HabitatGraph> {
    prop::collection::vec((-40.0f64..40.0, -40.0f64..40.0, 0.0f64..=1.0), 1..20).prop_map(
        |rows| {
            let patches = rows
                .into_iter()
                .enumerate()
                .map(|(i, (x, y, q))| Patch::new(format!("{i}"), x, y, q).unwrap())
                .collect();
            builder::build(patches, 15.0, 0.05).unwrap()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn scores_sum_to_one(g in arb_graph()) {
        let config = PageRankConfig::default();
        let scores = pagerank::solve(&g, &config).unwrap();
        prop_assert_eq!(scores.len(), g.node_count());
        let n = g.node_count() as f64;
        prop_assert!((scores.total() - 1.0).abs() <= n * config.tolerance);
        for (_, s) in scores.iter() {
            prop_assert!(s >= 0.0);
        }
    }

    #[test]
    fn repeated_runs_are_identical(g in arb_graph()) {
        let config = PageRankConfig::default();
        let first = pagerank::solve(&g, &config).unwrap();
        let second = pagerank::solve(&g, &config).unwrap();
        prop_assert_eq!(first.ranked(), second.ranked());
    }
}

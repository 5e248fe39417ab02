// tests/unit_weight.rs
//! Properties of the edge-weight model.

use patchrank_core::graph::weight;
use patchrank_core::Patch;
use proptest::prelude::*;

fn patch(id: &str, x: f64, y: f64, q: f64) -> Patch {
    Patch::new(id, x, y, q).unwrap()
}

#[test]
fn test_reference_examples() {
    let a = patch("A", 0.0, 0.0, 1.0);
    let b = patch("B", 0.0, 0.0, 1.0);
    assert_eq!(weight::weight(&a, &b, 15.0).unwrap(), 1.0);

    let c = patch("C", 10.0, 0.0, 1.0);
    let w = weight::weight(&a, &c, 15.0).unwrap();
    assert!((w - 0.5134).abs() < 5e-5, "got {w}");
}

#[test]
fn test_weight_bounded_by_one_for_unit_qualities() {
    let a = patch("A", 0.0, 0.0, 1.0);
    let b = patch("B", 3.0, 4.0, 0.7);
    let w = weight::weight(&a, &b, 15.0).unwrap();
    assert!(w > 0.0 && w <= 1.0);
}

#[test]
fn test_large_qualities_do_not_overflow() {
    let a = patch("A", 0.0, 0.0, 1e200);
    let b = patch("B", 0.0, 0.0, 1e200);
    let w = weight::weight(&a, &b, 15.0).unwrap();
    assert!(w.is_finite());
    assert!((w / 1e200 - 1.0).abs() < 1e-12, "got {w}");
}

fn coord() -> impl Strategy<Value = f64> {
    -500.0f64..500.0
}

fn quality() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn weight_is_symmetric(
        ax in coord(), ay in coord(), aq in quality(),
        bx in coord(), by in coord(), bq in quality(),
        dispersal in 0.1f64..100.0,
    ) {
        let a = patch("a", ax, ay, aq);
        let b = patch("b", bx, by, bq);
        prop_assert_eq!(
            weight::weight(&a, &b, dispersal).unwrap(),
            weight::weight(&b, &a, dispersal).unwrap()
        );
    }

    #[test]
    fn weight_decreases_with_distance(
        d in 0.0f64..50.0,
        extra in 0.5f64..50.0,
        aq in 0.05f64..=1.0,
        bq in 0.05f64..=1.0,
    ) {
        let a = patch("a", 0.0, 0.0, aq);
        let near = patch("near", d, 0.0, bq);
        let far = patch("far", d + extra, 0.0, bq);
        let w_near = weight::weight(&a, &near, 15.0).unwrap();
        let w_far = weight::weight(&a, &far, 15.0).unwrap();
        prop_assert!(w_far < w_near, "near={} far={}", w_near, w_far);
    }

    #[test]
    fn weight_increases_with_quality(
        d in 0.0f64..50.0,
        q in 0.0f64..0.9,
        bump in 0.01f64..0.1,
    ) {
        let a = patch("a", 0.0, 0.0, 0.8);
        let low = patch("low", d, 0.0, q);
        let high = patch("high", d, 0.0, q + bump);
        let w_low = weight::weight(&a, &low, 15.0).unwrap();
        let w_high = weight::weight(&a, &high, 15.0).unwrap();
        prop_assert!(w_high > w_low, "low={} high={}", w_low, w_high);
    }

    #[test]
    fn weight_is_never_negative_or_nan(
        ax in coord(), ay in coord(), aq in 0.0f64..1e300,
        bx in coord(), by in coord(), bq in 0.0f64..1e300,
    ) {
        let w = weight::weight(&patch("a", ax, ay, aq), &patch("b", bx, by, bq), 15.0).unwrap();
        prop_assert!(w.is_finite());
        prop_assert!(w >= 0.0);
    }
}

use kira_transient::math::adjust::adjust_pvalues;
use kira_transient::schema::v1::AdjustMethod;

const METHODS: [AdjustMethod; 5] = [
    AdjustMethod::Bonferroni,
    AdjustMethod::Holm,
    AdjustMethod::Hochberg,
    AdjustMethod::FdrBh,
    AdjustMethod::FdrBy,
];

fn assert_close(got: &[f64], expected: &[f64]) {
    assert_eq!(got.len(), expected.len());
    for (g, e) in got.iter().zip(expected) {
        assert!((g - e).abs() < 1e-9, "got {:?}, expected {:?}", got, expected);
    }
}

#[test]
fn bonferroni_scales_and_clamps() {
    assert_close(
        &adjust_pvalues(&[0.01, 0.04], AdjustMethod::Bonferroni),
        &[0.02, 0.08],
    );
    assert_close(
        &adjust_pvalues(&[0.6, 0.7], AdjustMethod::Bonferroni),
        &[1.0, 1.0],
    );
}

#[test]
fn holm_known_values() {
    assert_close(
        &adjust_pvalues(&[0.01, 0.02, 0.03], AdjustMethod::Holm),
        &[0.03, 0.04, 0.04],
    );
}

#[test]
fn hochberg_known_values() {
    assert_close(
        &adjust_pvalues(&[0.01, 0.02, 0.03], AdjustMethod::Hochberg),
        &[0.03, 0.03, 0.03],
    );
}

#[test]
fn fdr_bh_known_values() {
    assert_close(
        &adjust_pvalues(&[0.01, 0.02, 0.9], AdjustMethod::FdrBh),
        &[0.03, 0.03, 0.9],
    );
}

#[test]
fn fdr_by_adds_the_harmonic_scale() {
    // c(3) = 1 + 1/2 + 1/3
    let scale = 1.0 + 0.5 + 1.0 / 3.0;
    assert_close(
        &adjust_pvalues(&[0.01, 0.02, 0.03], AdjustMethod::FdrBy),
        &[0.03 * scale, 0.03 * scale, 0.03 * scale],
    );
}

#[test]
fn adjusted_is_at_least_raw_for_every_method() {
    let raw = [0.001, 0.2, 0.04, 0.9, 0.01, 0.5, 0.07];
    for method in METHODS {
        let adjusted = adjust_pvalues(&raw, method);
        for (a, r) in adjusted.iter().zip(&raw) {
            assert!(a >= r, "{:?}: {} < {}", method, a, r);
            assert!(*a <= 1.0);
        }
    }
}

#[test]
fn output_is_aligned_with_input_order() {
    let raw = [0.03, 0.01, 0.02];
    let adjusted = adjust_pvalues(&raw, AdjustMethod::Bonferroni);
    assert_close(&adjusted, &[0.09, 0.03, 0.06]);
}

#[test]
fn empty_input_yields_empty_output() {
    for method in METHODS {
        assert!(adjust_pvalues(&[], method).is_empty());
    }
}

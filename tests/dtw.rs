use kira_transient::math::dtw::dtw_distance;

#[test]
fn identical_sequences_have_zero_distance() {
    let a = vec![1.0, 2.0, 3.0, 2.0, 1.0];
    assert_eq!(dtw_distance(&a, &a), 0.0);
}

#[test]
fn warping_absorbs_local_stretching() {
    // The shared shape can be aligned step for step.
    let a = vec![0.0, 0.0, 1.0];
    let b = vec![0.0, 1.0, 1.0];
    assert!(dtw_distance(&a, &b).abs() < 1e-12);
}

#[test]
fn known_single_mismatch() {
    let a = vec![0.0, 0.0, 0.0];
    let b = vec![0.0, 0.0, 1.0];
    assert!((dtw_distance(&a, &b) - 1.0).abs() < 1e-12);
}

#[test]
fn known_constant_offset() {
    let a = vec![0.0, 0.0];
    let b = vec![1.0, 1.0];
    assert!((dtw_distance(&a, &b) - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn distance_is_symmetric() {
    let a = vec![3.0, 1.0, 4.0, 1.0, 5.0];
    let b = vec![2.0, 7.0, 1.0, 8.0, 2.0];
    assert!((dtw_distance(&a, &b) - dtw_distance(&b, &a)).abs() < 1e-12);
}

#[test]
fn distance_is_non_negative() {
    let a = vec![-2.0, 0.5, 3.0, -1.0, 0.0, 4.0];
    let b = vec![1.0, -3.0, 2.0, 0.0, -0.5, 1.5];
    assert!(dtw_distance(&a, &b) >= 0.0);
}

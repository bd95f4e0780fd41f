//! Integration tests for the k_heuristic default.

use kvote_knn::k_heuristic;

#[test]
fn known_values() {
    assert_eq!(k_heuristic(1), 1);
    assert_eq!(k_heuristic(4), 2);
    assert_eq!(k_heuristic(9), 3);
    assert_eq!(k_heuristic(16), 4);
    assert_eq!(k_heuristic(25), 5);
    assert_eq!(k_heuristic(100), 10);
}

#[test]
fn zero_reference_points() {
    // Edge case: 0 points -> max(floor(0), 1) = 1
    assert_eq!(k_heuristic(0), 1);
}

#[test]
fn iris_training_split() {
    // 120 training rows out of 150 -> floor(10.95) = 10
    assert_eq!(k_heuristic(120), 10);
}

#[test]
fn never_exceeds_reference_size() {
    for n in 1..500 {
        let k = k_heuristic(n);
        assert!(k >= 1 && k <= n, "n = {n}, k = {k}");
    }
}

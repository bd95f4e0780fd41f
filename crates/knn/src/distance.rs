//! Euclidean distance computation.

/// Euclidean distance between two feature vectors of equal dimension.
///
/// ```text
/// dist(a, b) = sqrt(Σⱼ (a[j] − b[j])²)
/// ```
///
/// # Panics
///
/// Debug-asserts that `a.len() == b.len()`.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Computes Euclidean distances from `query` to every row of a flat
/// row-major matrix `[n_rows × n_features]`.
///
/// # Panics
///
/// Debug-asserts that `rows.len() % n_features == 0`, `query.len() == n_features`
/// and `out.len() == rows.len() / n_features`.
pub(crate) fn euclidean_to_rows(rows: &[f64], n_features: usize, query: &[f64], out: &mut [f64]) {
    debug_assert!(n_features >= 1);
    debug_assert_eq!(rows.len() % n_features, 0);
    debug_assert_eq!(query.len(), n_features);
    debug_assert_eq!(out.len(), rows.len() / n_features);

    for (o, row) in out.iter_mut().zip(rows.chunks_exact(n_features)) {
        *o = euclidean(row, query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hand_computed() {
        // (3-0)^2 + (4-0)^2 = 25
        assert_abs_diff_eq!(euclidean(&[3.0, 4.0], &[0.0, 0.0]), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_distance() {
        let a = [5.1, 3.5, 1.4, 0.2];
        assert_abs_diff_eq!(euclidean(&a, &a), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let a = [1.5, -2.0, 7.25];
        let b = [-3.0, 0.5, 2.0];
        assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
    }

    #[test]
    fn test_single_dimension() {
        assert_abs_diff_eq!(euclidean(&[10.0], &[7.0]), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rows_matches_pairwise() {
        // 3 rows in 2D
        let rows = [0.0, 0.0, 1.0, 1.0, 10.0, 10.0];
        let query = [0.1, 0.1];
        let mut out = [0.0; 3];
        euclidean_to_rows(&rows, 2, &query, &mut out);

        for (i, row) in rows.chunks_exact(2).enumerate() {
            assert_abs_diff_eq!(out[i], euclidean(row, &query), epsilon = 1e-12);
        }
        assert!(out[0] < out[1]);
        assert!(out[1] < out[2]);
    }

    #[test]
    fn test_rows_four_features() {
        // Iris-shaped rows
        let rows = [5.1, 3.5, 1.4, 0.2, 6.2, 2.9, 4.3, 1.3];
        let query = [5.1, 3.5, 1.4, 0.2];
        let mut out = [0.0; 2];
        euclidean_to_rows(&rows, 4, &query, &mut out);
        assert_abs_diff_eq!(out[0], 0.0, epsilon = 1e-12);
        // 1.1^2 + 0.6^2 + 2.9^2 + 1.1^2 = 1.21 + 0.36 + 8.41 + 1.21 = 11.19
        assert_abs_diff_eq!(out[1], 11.19_f64.sqrt(), epsilon = 1e-12);
    }
}

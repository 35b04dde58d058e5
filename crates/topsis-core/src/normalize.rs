// crates/topsis-core/src/normalize.rs
//
// Vector normalization: rescale each criterion column to unit Euclidean norm
// so criteria measured on different scales become comparable.

use crate::error::TopsisError;
use crate::matrix::DecisionMatrix;

/// Normalize each column to unit Euclidean norm.
///
/// For column j, every value is divided by `sqrt(sum_i m[i,j]^2)`. The
/// output has the same shape; column values are not guaranteed to sum to 1
/// (this is vector-norm normalization, not probability normalization).
///
/// A zero-norm column (all zeros) has no direction to preserve and would
/// divide by zero, so it is rejected as a degenerate column.
pub fn normalize(matrix: &DecisionMatrix) -> Result<DecisionMatrix, TopsisError> {
    let mut norms = Vec::with_capacity(matrix.criteria());
    for j in 0..matrix.criteria() {
        let norm: f64 = matrix.column(j).map(|v| v * v).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Err(TopsisError::Computation(format!(
                "criterion column {} is all zeros and cannot be normalized",
                j + 1
            )));
        }
        norms.push(norm);
    }

    Ok(matrix.map_cells(|_, j, v| v / norms[j]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_have_unit_norm() {
        let m = DecisionMatrix::new(vec![vec![1.0, 7.0], vec![2.0, 4.0], vec![3.0, 1.0]]).unwrap();
        let norm = normalize(&m).unwrap();

        for j in 0..norm.criteria() {
            let sum_sq: f64 = norm.column(j).map(|v| v * v).sum();
            assert!(
                (sum_sq - 1.0).abs() < 1e-10,
                "column {} squared sum is {}, expected 1.0",
                j,
                sum_sq
            );
        }
    }

    #[test]
    fn test_relative_order_preserved_within_column() {
        let m = DecisionMatrix::new(vec![vec![1.0, 10.0], vec![3.0, 5.0]]).unwrap();
        let norm = normalize(&m).unwrap();
        assert!(norm.get(0, 0) < norm.get(1, 0));
        assert!(norm.get(0, 1) > norm.get(1, 1));
    }

    #[test]
    fn test_zero_column_is_computation_error() {
        let m = DecisionMatrix::new(vec![vec![0.0, 1.0], vec![0.0, 2.0]]).unwrap();
        let err = normalize(&m).unwrap_err();
        assert!(matches!(err, TopsisError::Computation(_)));
        assert!(err.to_string().contains("column 1"));
    }

    #[test]
    fn test_input_matrix_unchanged() {
        let m = DecisionMatrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let before = m.clone();
        let _ = normalize(&m).unwrap();
        assert_eq!(m, before);
    }
}

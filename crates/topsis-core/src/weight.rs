// crates/topsis-core/src/weight.rs
//
// Criterion weighting: scale each normalized column by its weight.

use crate::matrix::DecisionMatrix;

/// Multiply each column of the normalized matrix by its criterion weight.
///
/// Pure elementwise scaling, `out[:,j] = norm[:,j] * weights[j]`. Weights
/// are applied as-is; they need not sum to 1. Count and positivity were
/// already checked upstream in validation.
pub fn apply_weights(matrix: &DecisionMatrix, weights: &[f64]) -> DecisionMatrix {
    matrix.map_cells(|_, j, v| v * weights[j])
}

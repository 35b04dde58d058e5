// crates/topsis-core/src/validate.rs
//
// Input validation for the TOPSIS pipeline.
//
// Each check returns a tagged Result instead of terminating the process;
// only the top-level caller decides exit behavior.

use crate::error::TopsisError;
use crate::matrix::DecisionMatrix;
use crate::params::Impact;

/// Validate the matrix shape and the weight/impact parameters against it.
///
/// Checks, in order:
/// - at least 2 alternatives and at least 2 criteria;
/// - weight count equals criterion count;
/// - every weight is strictly positive and finite;
/// - impact count equals criterion count.
///
/// Numeric-cell and rectangularity checks already happened in
/// [`DecisionMatrix::new`]; impact token validity happened at parse time.
pub fn validate(
    matrix: &DecisionMatrix,
    weights: &[f64],
    impacts: &[Impact],
) -> Result<(), TopsisError> {
    let m = matrix.alternatives();
    let n = matrix.criteria();

    if m < 2 {
        return Err(TopsisError::Schema(format!(
            "need at least 2 alternatives to rank, got {}",
            m
        )));
    }
    if n < 2 {
        return Err(TopsisError::Schema(format!(
            "need at least 2 criterion columns, got {}",
            n
        )));
    }

    if weights.len() != n {
        return Err(TopsisError::Parameter(format!(
            "expected {} weights (one per criterion), got {}",
            n,
            weights.len()
        )));
    }
    for (j, &w) in weights.iter().enumerate() {
        if !w.is_finite() || w <= 0.0 {
            return Err(TopsisError::Parameter(format!(
                "weight for criterion {} must be a positive number, got {}",
                j + 1,
                w
            )));
        }
    }

    if impacts.len() != n {
        return Err(TopsisError::Parameter(format!(
            "expected {} impacts (one per criterion), got {}",
            n,
            impacts.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_3x3() -> DecisionMatrix {
        DecisionMatrix::new(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_valid_inputs_pass() {
        let m = matrix_3x3();
        let impacts = vec![Impact::Maximize, Impact::Minimize, Impact::Maximize];
        assert!(validate(&m, &[1.0, 2.0, 3.0], &impacts).is_ok());
    }

    #[test]
    fn test_weight_count_mismatch_is_parameter_error() {
        let m = matrix_3x3();
        let impacts = vec![Impact::Maximize, Impact::Minimize, Impact::Maximize];
        let err = validate(&m, &[1.0, 2.0], &impacts).unwrap_err();
        assert!(matches!(err, TopsisError::Parameter(_)));
        assert!(err.to_string().contains("expected 3 weights"));
    }

    #[test]
    fn test_impact_count_mismatch_is_parameter_error() {
        let m = matrix_3x3();
        let err = validate(&m, &[1.0, 2.0, 3.0], &[Impact::Maximize]).unwrap_err();
        assert!(matches!(err, TopsisError::Parameter(_)));
        assert!(err.to_string().contains("expected 3 impacts"));
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let m = matrix_3x3();
        let impacts = vec![Impact::Maximize, Impact::Minimize, Impact::Maximize];
        let err = validate(&m, &[1.0, 0.0, 3.0], &impacts).unwrap_err();
        assert!(err.to_string().contains("criterion 2"));
    }

    #[test]
    fn test_single_criterion_rejected() {
        let m = DecisionMatrix::new(vec![vec![1.0], vec![2.0]]).unwrap();
        let err = validate(&m, &[1.0], &[Impact::Maximize]).unwrap_err();
        assert!(matches!(err, TopsisError::Schema(_)));
    }

    #[test]
    fn test_single_alternative_rejected() {
        let m = DecisionMatrix::new(vec![vec![1.0, 2.0]]).unwrap();
        let err = validate(&m, &[1.0, 1.0], &[Impact::Maximize, Impact::Minimize]).unwrap_err();
        assert!(matches!(err, TopsisError::Schema(_)));
    }
}

// crates/topsis-core/src/ideal.rs
//
// Ideal-point computation: the per-criterion best and worst attainable
// values in the weighted matrix, given each criterion's impact direction.

use serde::{Deserialize, Serialize};

use crate::matrix::DecisionMatrix;
use crate::params::Impact;

/// The ideal-best and ideal-worst reference vectors, one value per
/// criterion. Computed once per run from the full weighted matrix and
/// read-only afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealPoints {
    /// Most favorable attainable value per criterion.
    pub best: Vec<f64>,
    /// Least favorable attainable value per criterion.
    pub worst: Vec<f64>,
}

/// Compute the ideal points of a weighted matrix.
///
/// For a maximize criterion the best is the column maximum and the worst
/// the column minimum; for a minimize criterion the two are swapped.
pub fn ideal_points(matrix: &DecisionMatrix, impacts: &[Impact]) -> IdealPoints {
    let n = matrix.criteria();
    let mut best = Vec::with_capacity(n);
    let mut worst = Vec::with_capacity(n);

    for (j, impact) in impacts.iter().enumerate().take(n) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in matrix.column(j) {
            min = min.min(v);
            max = max.max(v);
        }
        match impact {
            Impact::Maximize => {
                best.push(max);
                worst.push(min);
            }
            Impact::Minimize => {
                best.push(min);
                worst.push(max);
            }
        }
    }

    IdealPoints { best, worst }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximize_takes_column_max_as_best() {
        let m = DecisionMatrix::new(vec![vec![1.0, 7.0], vec![2.0, 4.0], vec![3.0, 1.0]]).unwrap();
        let ideal = ideal_points(&m, &[Impact::Maximize, Impact::Maximize]);
        assert_eq!(ideal.best, vec![3.0, 7.0]);
        assert_eq!(ideal.worst, vec![1.0, 1.0]);
    }

    #[test]
    fn test_minimize_swaps_best_and_worst() {
        let m = DecisionMatrix::new(vec![vec![1.0, 7.0], vec![2.0, 4.0], vec![3.0, 1.0]]).unwrap();
        let ideal = ideal_points(&m, &[Impact::Maximize, Impact::Minimize]);
        assert_eq!(ideal.best, vec![3.0, 1.0]);
        assert_eq!(ideal.worst, vec![1.0, 7.0]);
    }

    #[test]
    fn test_extremity_holds_for_every_cell() {
        let m = DecisionMatrix::new(vec![
            vec![0.2, 5.0, -1.0],
            vec![0.9, 2.0, -3.0],
            vec![0.4, 8.0, -2.0],
        ])
        .unwrap();
        let impacts = [Impact::Maximize, Impact::Minimize, Impact::Maximize];
        let ideal = ideal_points(&m, &impacts);

        for j in 0..m.criteria() {
            for v in m.column(j) {
                match impacts[j] {
                    Impact::Maximize => {
                        assert!(ideal.best[j] >= v);
                        assert!(ideal.worst[j] <= v);
                    }
                    Impact::Minimize => {
                        assert!(ideal.best[j] <= v);
                        assert!(ideal.worst[j] >= v);
                    }
                }
            }
        }
    }
}

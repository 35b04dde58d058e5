// crates/topsis-core/src/pipeline.rs
//
// The full TOPSIS pipeline: validate, normalize, weight, ideal points,
// score, rank. Each stage consumes the previous stage's output; the whole
// computation is a single in-memory pass with no hidden state.

use serde::{Deserialize, Serialize};

use crate::error::TopsisError;
use crate::ideal::ideal_points;
use crate::matrix::DecisionMatrix;
use crate::normalize::normalize;
use crate::params::Impact;
use crate::score::{closeness_scores, rank_descending};
use crate::validate::validate;
use crate::weight::apply_weights;

/// The result of ranking a decision matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ranking {
    /// Closeness coefficient per alternative, in \[0, 1\].
    pub scores: Vec<f64>,
    /// Dense rank per alternative: 1 = highest score, ties share a rank.
    pub ranks: Vec<u32>,
}

/// Run the five-stage TOPSIS pipeline over a decision matrix.
///
/// # Arguments
/// * `matrix` - Raw `m x n` decision matrix (alternatives x criteria).
/// * `weights` - One positive weight per criterion, applied as-is.
/// * `impacts` - One optimization direction per criterion.
///
/// Deterministic: identical inputs always produce bit-identical output.
pub fn rank_alternatives(
    matrix: &DecisionMatrix,
    weights: &[f64],
    impacts: &[Impact],
) -> Result<Ranking, TopsisError> {
    // Stage 1: shape and parameter validation.
    validate(matrix, weights, impacts)?;

    // Stage 2: unit Euclidean norm per column.
    let normalized = normalize(matrix)?;

    // Stage 3: criterion weighting.
    let weighted = apply_weights(&normalized, weights);

    // Stage 4: ideal best/worst per criterion.
    let ideal = ideal_points(&weighted, impacts);

    // Stage 5: closeness coefficients and dense descending ranks.
    let scores = closeness_scores(&weighted, &ideal)?;
    let ranks = rank_descending(&scores);

    Ok(Ranking { scores, ranks })
}

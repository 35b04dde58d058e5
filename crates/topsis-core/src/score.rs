// crates/topsis-core/src/score.rs
//
// Closeness scoring and ranking: Euclidean distances to the ideal points,
// the TOPSIS closeness coefficient, and dense descending ranks.

use crate::error::TopsisError;
use crate::ideal::IdealPoints;
use crate::matrix::DecisionMatrix;

/// Scores closer than this are treated as tied when ranking.
const TIE_TOLERANCE: f64 = 1e-12;

/// Compute the closeness coefficient for every alternative.
///
/// For row i, `d_pos` is the Euclidean distance to the ideal-best vector
/// and `d_neg` the distance to the ideal-worst vector; the score is
/// `d_neg / (d_pos + d_neg)`, which lies in \[0, 1\]. A score of 1 means
/// the alternative coincides with the ideal best.
///
/// A row at zero distance from both ideals has an undefined score; that
/// only happens on singular data, and is rejected rather than silently
/// mapped to an arbitrary value.
pub fn closeness_scores(
    matrix: &DecisionMatrix,
    ideal: &IdealPoints,
) -> Result<Vec<f64>, TopsisError> {
    let mut scores = Vec::with_capacity(matrix.alternatives());

    for i in 0..matrix.alternatives() {
        let row = matrix.row(i);
        let d_pos = euclidean_distance(row, &ideal.best);
        let d_neg = euclidean_distance(row, &ideal.worst);

        if d_pos + d_neg == 0.0 {
            return Err(TopsisError::Computation(format!(
                "alternative {} is at zero distance from both ideal points",
                i + 1
            )));
        }
        scores.push(d_neg / (d_pos + d_neg));
    }

    Ok(scores)
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Assign dense descending ranks: the highest score gets rank 1, tied
/// scores share a rank, and the next distinct score takes the next
/// consecutive integer (1, 2, 2, 3 — no gaps).
pub fn rank_descending(scores: &[f64]) -> Vec<u32> {
    let n = scores.len();
    if n == 0 {
        return vec![];
    }

    // Sort indices by score, highest first.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0u32; n];
    let mut rank = 0u32;
    let mut prev: Option<f64> = None;
    for &idx in &order {
        match prev {
            Some(p) if (p - scores[idx]).abs() < TIE_TOLERANCE => {}
            _ => rank += 1,
        }
        ranks[idx] = rank;
        prev = Some(scores[idx]);
    }

    ranks
}

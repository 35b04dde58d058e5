// crates/topsis-core/src/matrix.rs
//
// The decision matrix: alternatives (rows) scored against criteria (columns).

use serde::{Deserialize, Serialize};

use crate::error::TopsisError;

/// A dense row-major decision matrix where rows\[i\]\[j\] is alternative i's
/// raw score on criterion j.
///
/// Immutable after construction; each pipeline stage produces a new matrix
/// of the same shape rather than mutating its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Build a matrix from row-major data.
    ///
    /// Rejects ragged rows and non-finite cells up front so every later
    /// stage can assume a rectangular matrix of real numbers.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, TopsisError> {
        let n = rows.first().map(|r| r.len()).unwrap_or(0);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(TopsisError::Schema(format!(
                    "row {} has {} values, expected {}",
                    i + 1,
                    row.len(),
                    n
                )));
            }
            for (j, v) in row.iter().enumerate() {
                if !v.is_finite() {
                    return Err(TopsisError::Schema(format!(
                        "value at row {}, column {} is not a finite number",
                        i + 1,
                        j + 1
                    )));
                }
            }
        }
        Ok(Self { rows })
    }

    /// Number of alternatives (rows).
    pub fn alternatives(&self) -> usize {
        self.rows.len()
    }

    /// Number of criteria (columns).
    pub fn criteria(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// The value for alternative `i` on criterion `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Borrow row `i` (one alternative's scores across all criteria).
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// Iterate over column `j` (one criterion's scores across alternatives).
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[j])
    }

    /// Build a same-shape matrix by mapping each cell through `f(i, j, value)`.
    ///
    /// Shape is preserved, so the result cannot be ragged; non-finite
    /// outputs are the mapper's responsibility to avoid.
    pub(crate) fn map_cells<F>(&self, f: F) -> Self
    where
        F: Fn(usize, usize, f64) -> f64,
    {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &v)| f(i, j, v))
                    .collect()
            })
            .collect();
        Self { rows }
    }
}

// crates/topsis-core/src/params.rs
//
// Weight and impact parameters: one weight and one optimization direction
// per criterion column, parsed from the comma-separated CLI lists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TopsisError;

/// Optimization direction for one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    /// Higher raw values are preferable (benefit criterion).
    Maximize,
    /// Lower raw values are preferable (cost criterion).
    Minimize,
}

impl FromStr for Impact {
    type Err = TopsisError;

    /// Canonical tokens are `maximize` and `minimize`; the short
    /// encodings `+` and `-` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "maximize" | "+" => Ok(Impact::Maximize),
            "minimize" | "-" => Ok(Impact::Minimize),
            other => Err(TopsisError::Parameter(format!(
                "invalid impact '{}': expected 'maximize' or 'minimize'",
                other
            ))),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Maximize => write!(f, "maximize"),
            Impact::Minimize => write!(f, "minimize"),
        }
    }
}

/// Parse a comma-separated weight list, e.g. `"1,2,0.5"`.
///
/// Count and positivity checks happen later in validation, where the
/// criterion count is known; here we only require real numbers.
pub fn parse_weights(s: &str) -> Result<Vec<f64>, TopsisError> {
    s.split(',')
        .map(|tok| {
            let tok = tok.trim();
            tok.parse::<f64>().map_err(|_| {
                TopsisError::Parameter(format!("invalid weight '{}': expected a number", tok))
            })
        })
        .collect()
}

/// Parse a comma-separated impact list, e.g. `"maximize,minimize"` or `"+,-"`.
pub fn parse_impacts(s: &str) -> Result<Vec<Impact>, TopsisError> {
    s.split(',').map(Impact::from_str).collect()
}

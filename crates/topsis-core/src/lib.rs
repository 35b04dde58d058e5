// crates/topsis-core/src/lib.rs
//
// topsis-core: decision matrix types and the TOPSIS ranking pipeline.
//
// This is the library crate the CLI depends on. It defines the decision
// matrix, weight/impact parameters, the five pipeline stages (validate,
// normalize, weight, ideal points, score/rank), and the error taxonomy.
// No file I/O and no process-lifecycle decisions happen here; every stage
// returns a Result and the caller decides what to do with a failure.

pub mod error;
pub mod ideal;
pub mod matrix;
pub mod normalize;
pub mod params;
pub mod pipeline;
pub mod score;
pub mod validate;
pub mod weight;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use topsis_core::DecisionMatrix;`

pub use error::TopsisError;
pub use ideal::IdealPoints;
pub use matrix::DecisionMatrix;
pub use params::{parse_impacts, parse_weights, Impact};
pub use pipeline::{rank_alternatives, Ranking};

// crates/topsis-cli/src/output.rs
//
// Result display for the TOPSIS CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

use topsis_core::Ranking;

/// One ranked alternative, display-ready.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct RankedRow {
    /// Alternative identifier from the input table.
    #[tabled(rename = "Alternative")]
    pub alternative: String,
    /// TOPSIS closeness coefficient.
    #[tabled(rename = "Topsis Score")]
    pub score: f64,
    /// Dense rank, 1 = best.
    #[tabled(rename = "Rank")]
    pub rank: u32,
}

/// Pair identifiers with their scores and ranks, ordered best-first.
pub fn ranked_rows(identifiers: &[String], ranking: &Ranking) -> Vec<RankedRow> {
    let mut rows: Vec<RankedRow> = identifiers
        .iter()
        .zip(ranking.scores.iter().zip(&ranking.ranks))
        .map(|(id, (&score, &rank))| RankedRow {
            alternative: id.clone(),
            score,
            rank,
        })
        .collect();
    rows.sort_by_key(|r| r.rank);
    rows
}

/// Format ranked rows as a table string.
pub fn format_table(rows: &[RankedRow]) -> String {
    Table::new(rows).to_string()
}

/// Format ranked rows as a pretty-printed JSON string.
pub fn format_json(rows: &[RankedRow]) -> String {
    serde_json::to_string_pretty(rows).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_ordered_best_first() {
        let ids = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let ranking = Ranking {
            scores: vec![0.2, 0.9, 0.5],
            ranks: vec![3, 1, 2],
        };

        let rows = ranked_rows(&ids, &ranking);
        assert_eq!(rows[0].alternative, "B");
        assert_eq!(rows[1].alternative, "C");
        assert_eq!(rows[2].alternative, "A");
    }

    #[test]
    fn test_json_output_is_valid() {
        let ids = vec!["A".to_string()];
        let ranking = Ranking {
            scores: vec![0.5],
            ranks: vec![1],
        };

        let json = format_json(&ranked_rows(&ids, &ranking));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["alternative"], "A");
        assert_eq!(parsed[0]["rank"], 1);
    }
}

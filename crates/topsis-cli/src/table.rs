// crates/topsis-cli/src/table.rs
//
// CSV decision-table reading and writing.
//
// The input table has a header row; the first column holds alternative
// identifiers and every further column holds numeric criterion scores.
// The output table is the input plus two appended columns, "Topsis Score"
// and "Rank".

use std::error::Error;
use std::path::Path;

use topsis_core::{DecisionMatrix, Ranking, TopsisError};

/// A parsed input table: header row, identifier column, and the numeric
/// criterion matrix.
#[derive(Debug, Clone)]
pub struct InputTable {
    /// All column headers, identifier column included.
    pub headers: Vec<String>,
    /// Alternative identifiers (first column).
    pub identifiers: Vec<String>,
    /// The raw decision matrix (all columns after the first).
    pub matrix: DecisionMatrix,
}

impl InputTable {
    /// Number of criterion columns.
    pub fn criteria(&self) -> usize {
        self.matrix.criteria()
    }
}

/// Read and validate a CSV decision table.
///
/// Schema checks: at least 3 columns (identifier + 2 criteria), every
/// criterion cell parseable as a finite number. The diagnostic names the
/// offending column by header so the user can find it in the file.
pub fn read_table(path: &Path) -> Result<InputTable, Box<dyn Error>> {
    // Flexible record lengths so ragged rows surface as our own schema
    // diagnostic (naming the row) instead of a generic csv error.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.len() < 3 {
        return Err(Box::new(TopsisError::Schema(format!(
            "table must have at least 3 columns (identifier + 2 criteria), got {}",
            headers.len()
        ))));
    }

    let mut identifiers = Vec::new();
    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != headers.len() {
            return Err(Box::new(TopsisError::Schema(format!(
                "row {} has {} fields, expected {}",
                i + 1,
                record.len(),
                headers.len()
            ))));
        }

        identifiers.push(record[0].to_string());

        let mut row = Vec::with_capacity(headers.len() - 1);
        for (j, cell) in record.iter().enumerate().skip(1) {
            let value: f64 = cell.trim().parse().map_err(|_| {
                TopsisError::Schema(format!(
                    "column '{}' must be numeric, found '{}' at row {}",
                    headers[j],
                    cell,
                    i + 1
                ))
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    let matrix = DecisionMatrix::new(rows)?;
    Ok(InputTable {
        headers,
        identifiers,
        matrix,
    })
}

/// Write the result table: every input column, then "Topsis Score" and
/// "Rank". Callers only invoke this after the pipeline succeeded, so a
/// failed run never leaves a partial output file behind.
pub fn write_table(path: &Path, table: &InputTable, ranking: &Ranking) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = table.headers.clone();
    header.push("Topsis Score".to_string());
    header.push("Rank".to_string());
    writer.write_record(&header)?;

    for i in 0..table.matrix.alternatives() {
        let mut record = Vec::with_capacity(header.len());
        record.push(table.identifiers[i].clone());
        for j in 0..table.matrix.criteria() {
            record.push(table.matrix.get(i, j).to_string());
        }
        record.push(ranking.scores[i].to_string());
        record.push(ranking.ranks[i].to_string());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

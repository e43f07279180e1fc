use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::consts::CODON_INDEX_COLUMN;
use crate::errors::{HotspotsError, Result};
use crate::models::position::{Flag, PositionRecord};
use crate::models::span::CodonSpan;
use crate::utils::{column_index, get_dynamic_reader, parse_score};

///
/// The rows of one gene's score table, in file order.
///
/// Only the coordinate column, the flag column and the requested score
/// columns are kept; `PositionRecord::scores` follows the order of
/// `score_columns`.
///
#[derive(Debug, Clone)]
pub struct ScoreTable {
    pub records: Vec<PositionRecord>,
    pub score_columns: Vec<String>,
}

impl ScoreTable {
    ///
    /// Load a score table from a (optionally gzipped) tsv file.
    ///
    /// # Arguments:
    /// - path: path to the table
    /// - flag_column: name of the YES/NO column
    /// - score_columns: names of the numeric columns to keep
    pub fn from_path(path: &Path, flag_column: &str, score_columns: &[&str]) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;
        ScoreTable::from_reader(reader, flag_column, score_columns)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        flag_column: &str,
        score_columns: &[&str],
    ) -> Result<Self> {
        let mut tsv = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(reader);

        let headers = tsv.headers()?.clone();

        // all columns are resolved before any row is parsed
        let codon_idx = column_index(&headers, CODON_INDEX_COLUMN)?;
        let flag_idx = column_index(&headers, flag_column)?;
        let score_idxs = score_columns
            .iter()
            .map(|c| column_index(&headers, c))
            .collect::<Result<Vec<usize>>>()?;

        let mut records: Vec<PositionRecord> = Vec::new();

        for (index, row) in tsv.records().enumerate() {
            let row = row?;
            // header is line 1
            let line = index + 2;

            let raw_codon = row.get(codon_idx).unwrap_or("");
            let codon_index: u32 =
                raw_codon
                    .trim()
                    .parse()
                    .map_err(|_| HotspotsError::InvalidValue {
                        column: CODON_INDEX_COLUMN.to_string(),
                        line,
                        value: raw_codon.to_string(),
                    })?;

            if let Some(prev) = records.last() {
                if codon_index <= prev.codon_index {
                    return Err(HotspotsError::UnorderedCoordinates {
                        prev: prev.codon_index,
                        next: codon_index,
                        line,
                    });
                }
            }

            let raw_flag = row.get(flag_idx).unwrap_or("");
            let flag: Flag = raw_flag.parse().map_err(|_| HotspotsError::InvalidFlag {
                line,
                value: raw_flag.to_string(),
            })?;

            let mut scores = Vec::with_capacity(score_idxs.len());
            for (&col, name) in score_idxs.iter().zip(score_columns) {
                let raw = row.get(col).unwrap_or("");
                let value = parse_score(raw).ok_or_else(|| HotspotsError::InvalidValue {
                    column: name.to_string(),
                    line,
                    value: raw.to_string(),
                })?;
                scores.push(value);
            }

            records.push(PositionRecord::new(codon_index, flag, scores));
        }

        Ok(ScoreTable {
            records,
            score_columns: score_columns.iter().map(|c| c.to_string()).collect(),
        })
    }

    ///
    /// Number of rows, i.e. the gene length in codons.
    ///
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

}

///
/// Range-select records by coordinate with two binary searches. Relies on
/// the strictly increasing coordinates checked at load time.
///
pub fn records_in_span<'a>(
    records: &'a [PositionRecord],
    span: &CodonSpan,
) -> &'a [PositionRecord] {
    let lo = records.partition_point(|r| r.codon_index < span.start);
    let hi = records.partition_point(|r| r.codon_index <= span.end);
    &records[lo..hi.max(lo)]
}

//! Loaders for the tab-separated inputs of the sequence statistics.

use std::collections::HashMap;
use std::path::Path;

use hotspots_core::models::CodonSpan;
use hotspots_core::models::span::parse_span_list;
use hotspots_core::utils::{column_index, open_tsv_reader};

use crate::consts::{
    AMINO_ACIDS_COLUMN, CDS_LENGTH_COLUMN, DISORDER_COLUMN, GENE_COLUMN, HOTSPOT_COORD_COLUMN,
    SEQUENCE_COLUMN, TRANSCRIPT_COLUMN,
};
use crate::errors::{Result, SeqStatsError};

///
/// Read the named columns of a table, one `Vec` per row in column order.
///
pub fn read_columns(path: &Path, columns: &[&str]) -> Result<Vec<Vec<String>>> {
    let mut reader = open_tsv_reader(path)?;
    let headers = reader.headers()?.clone();
    let idxs = columns
        .iter()
        .map(|c| column_index(&headers, c))
        .collect::<hotspots_core::Result<Vec<usize>>>()?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            idxs.iter()
                .map(|&i| record.get(i).unwrap_or("").to_string())
                .collect(),
        );
    }

    Ok(rows)
}

///
/// Hotspot coordinates keyed by `key_column` (`Gene` or `Transcript`).
///
/// Coordinates are parsed strictly: one malformed `start-end` fails the
/// whole table.
///
pub fn read_hotspot_spans(path: &Path, key_column: &str) -> Result<Vec<(String, Vec<CodonSpan>)>> {
    read_columns(path, &[key_column, HOTSPOT_COORD_COLUMN])?
        .into_iter()
        .map(|row| {
            let spans = parse_span_list(&row[1])?;
            Ok((row[0].clone(), spans))
        })
        .collect()
}

pub fn read_hotspot_spans_by_gene(path: &Path) -> Result<Vec<(String, Vec<CodonSpan>)>> {
    read_hotspot_spans(path, GENE_COLUMN)
}

pub fn read_hotspot_spans_by_transcript(path: &Path) -> Result<Vec<(String, Vec<CodonSpan>)>> {
    read_hotspot_spans(path, TRANSCRIPT_COLUMN)
}

///
/// Protein sequence of each transcript (`Transcript`, `AminoAcids`).
///
pub fn read_transcript_sequences(path: &Path) -> Result<HashMap<String, String>> {
    Ok(read_columns(path, &[TRANSCRIPT_COLUMN, AMINO_ACIDS_COLUMN])?
        .into_iter()
        .map(|mut row| {
            let seq = row.pop().unwrap_or_default();
            let transcript = row.pop().unwrap_or_default();
            (transcript, seq)
        })
        .collect())
}

///
/// All proteome sequences (`Sequence` column).
///
pub fn read_proteome_sequences(path: &Path) -> Result<Vec<String>> {
    Ok(read_columns(path, &[SEQUENCE_COLUMN])?
        .into_iter()
        .filter_map(|mut row| row.pop())
        .collect())
}

///
/// Disorder annotations as (`Gene`, `Annot_description`) pairs.
///
pub fn read_disorder_annotations(path: &Path) -> Result<Vec<(String, String)>> {
    Ok(read_columns(path, &[GENE_COLUMN, DISORDER_COLUMN])?
        .into_iter()
        .map(|mut row| {
            let description = row.pop().unwrap_or_default();
            let gene = row.pop().unwrap_or_default();
            (gene, description)
        })
        .collect())
}

///
/// Total coding length of the proteome: the sum of the `CDS_aa` column.
/// Empty cells are skipped.
///
pub fn sum_cds_lengths(path: &Path) -> Result<u64> {
    let mut total: u64 = 0;
    for row in read_columns(path, &[CDS_LENGTH_COLUMN])? {
        let value = row[0].trim();
        if value.is_empty() || value == "NA" {
            continue;
        }
        let length: u64 = value.parse().map_err(|_| SeqStatsError::InvalidValue {
            column: CDS_LENGTH_COLUMN.to_string(),
            value: value.to_string(),
        })?;
        total += length;
    }
    Ok(total)
}

use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use serde::Serialize;

use crate::errors::{HotspotsError, Result};

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path)
        .map_err(|e| HotspotsError::FileReadError(format!("{}: {}", path.display(), e)))?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Get a writer that gzips its output when the path ends in `.gz`.
///
pub fn get_dynamic_writer(path: &Path) -> Result<Box<dyn Write>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let writer: Box<dyn Write> = match is_gzipped(path) {
        true => Box::new(BufWriter::new(GzEncoder::new(file, Compression::default()))),
        false => Box::new(BufWriter::new(file)),
    };

    Ok(writer)
}

///
/// Open a tab-separated table with a header line.
///
pub fn open_tsv_reader(path: &Path) -> Result<csv::Reader<BufReader<Box<dyn Read>>>> {
    let reader = get_dynamic_reader(path)?;
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(false)
        .from_reader(reader))
}

///
/// Look a column up by name in a header record.
///
pub fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| HotspotsError::MissingColumn(name.to_string()))
}

///
/// Parse a numeric cell. Empty cells and the usual NA spellings are NaN.
///
pub fn parse_score(value: &str) -> Option<f64> {
    match value.trim() {
        "" | "NA" | "NaN" | "nan" => Some(f64::NAN),
        v => v.parse::<f64>().ok(),
    }
}

///
/// Render a float as the upstream tables do: shortest round-trip digits,
/// `.0` on integral values, exponent form (`1e-05`, `1.5e+16`) outside
/// `[1e-4, 1e16)` and `nan` for missing values.
///
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", value);
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return format!("{}e{}{:0>2}", mantissa, sign, digits);
    }

    let plain = format!("{}", value);
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

///
/// A row type written with [write_tsv_rows].
///
/// `HEADER` lists the column names in field order, so tables without rows
/// still carry their header.
///
pub trait TsvRow: Serialize {
    const HEADER: &'static [&'static str];
}

///
/// Write rows as a tab-separated table with a header line.
///
pub fn write_tsv_rows<T: TsvRow>(rows: &[T], path: &Path) -> Result<()> {
    let writer = get_dynamic_writer(path)?;
    let mut tsv = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);

    tsv.write_record(T::HEADER)?;
    for row in rows {
        tsv.serialize(row)?;
    }

    // gzip trailer is written when the encoder drops
    tsv.flush()?;

    Ok(())
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotspotsError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Required column not found: {0}")]
    MissingColumn(String),

    #[error("Error parsing codon span: {0:?}")]
    SpanParseError(String),

    #[error("Invalid flag {value:?} at line {line} (expected YES or NO)")]
    InvalidFlag { line: usize, value: String },

    #[error("Invalid value {value:?} in column {column} at line {line}")]
    InvalidValue {
        column: String,
        line: usize,
        value: String,
    },

    #[error("Codon indices must be strictly increasing: {next} follows {prev} at line {line}")]
    UnorderedCoordinates { prev: u32, next: u32, line: usize },

    #[error("File name doesn't follow <GENE>_<TRANSCRIPT>.<ext>: {0}")]
    InvalidFileName(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HotspotsError {
    /// Whether the error means the table lacks a column the scan needs,
    /// which skips the gene rather than rejecting the file.
    pub fn is_missing_column(&self) -> bool {
        matches!(self, HotspotsError::MissingColumn(_))
    }
}

pub type Result<T> = std::result::Result<T, HotspotsError>;

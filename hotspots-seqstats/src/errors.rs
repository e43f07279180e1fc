use thiserror::Error;

use hotspots_core::HotspotsError;

#[derive(Error, Debug)]
pub enum SeqStatsError {
    #[error("Invalid value {value:?} in column {column}")]
    InvalidValue { column: String, value: String },

    #[error("Invalid statistics input: {0}")]
    StatisticsError(String),

    #[error(transparent)]
    Core(#[from] HotspotsError),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SeqStatsError>;

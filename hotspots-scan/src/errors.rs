use thiserror::Error;

use hotspots_core::HotspotsError;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Input directory not found: {0}")]
    MissingInputDir(String),

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Progress bar template error: {0}")]
    Progress(#[from] indicatif::style::TemplateError),

    #[error(transparent)]
    Core(#[from] HotspotsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

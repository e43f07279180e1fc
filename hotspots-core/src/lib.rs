//! # Core models for codon-level hotspot analysis.
//!
//! Per-gene score tables are tab-separated (optionally gzipped) files with one
//! row per codon. This crate loads them into ordered [models::PositionRecord]s,
//! describes the [models::Region]s detected on top of them and provides the
//! small io helpers shared by the rest of the workspace.
//!
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::{HotspotsError, Result};

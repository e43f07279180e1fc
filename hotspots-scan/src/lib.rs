//! Cluster and hotspot detection over codon-level score tables.
//!
//! Each gene's table is scanned on its own:
//!
//! - cluster mode reports every run of YES codons, grouped by run length
//! - hotspot mode bridges short NO gaps between YES runs and keeps spans
//!   containing a long enough run
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use hotspots_scan::{ScanConfig, run_scan};
//!
//! let config = ScanConfig::cluster("001");
//! let report = run_scan(Path::new("scores/"), &config, None).unwrap();
//! report.rows.write_to_file(Path::new("clusters.tsv.gz")).unwrap();
//! ```

pub mod batch;
pub mod consts;
pub mod errors;
pub mod models;
pub mod scanner;
pub mod statistics;
pub mod summary;

// re-exports
pub use batch::{ScanReport, collect_gene_files, run_scan, scan_gene_file};
pub use errors::ScanError;
pub use models::{ClusterRow, HotspotRow, ScanConfig, SummaryRows};
pub use scanner::{ClusterScanner, HotspotScanner, RegionScanner, ScanMode};
pub use statistics::{ScoreSummary, region_statistics};

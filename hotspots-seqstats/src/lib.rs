//! Sequence-level statistics over detected hotspot regions.
//!
//! - amino-acid odds ratios of hotspot regions against the whole proteome
//! - overlap of hotspot regions with annotated disordered regions, with a
//!   two-proportion z-test of disorder inside vs. outside hotspots
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use hotspots_seqstats::{AminoAcidCounts, hotspot_region_counts, odds_ratios};
//! use hotspots_seqstats::tables::{
//!     read_hotspot_spans_by_transcript, read_proteome_sequences, read_transcript_sequences,
//! };
//!
//! let hotspots = read_hotspot_spans_by_transcript(Path::new("hotspots.tsv")).unwrap();
//! let sequences = read_transcript_sequences(Path::new("sequences.tsv")).unwrap();
//! let proteome = read_proteome_sequences(Path::new("uniprot.tsv")).unwrap();
//!
//! let hr = hotspot_region_counts(&hotspots, &sequences);
//! let background: AminoAcidCounts = proteome.iter().map(String::as_str).collect();
//! let ratios = odds_ratios(&hr, &background, 0.95).unwrap();
//! ```

pub mod amino_acids;
pub mod consts;
pub mod disorder;
pub mod errors;
pub mod odds_ratio;
pub mod tables;

// re-exports
pub use amino_acids::{AminoAcidCounts, extract_region_sequence};
pub use disorder::{
    CodonSets, DisorderEnrichment, GeneOverlap, Interval, codon_sets, compare_codons,
    disorder_enrichment, disorder_spans, parse_disorder_span,
};
pub use errors::SeqStatsError;
pub use odds_ratio::{OddsRatio, hotspot_region_counts, odds_ratios, z_value};

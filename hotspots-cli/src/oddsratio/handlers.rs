use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use hotspots_core::utils::write_tsv_rows;
use hotspots_seqstats::consts::DEFAULT_CONFIDENCE;
use hotspots_seqstats::tables::{
    read_hotspot_spans_by_transcript, read_proteome_sequences, read_transcript_sequences,
};
use hotspots_seqstats::{AminoAcidCounts, hotspot_region_counts, odds_ratios};

use super::cli::DEFAULT_OUT;

pub fn run_oddsratio(matches: &ArgMatches) -> Result<()> {
    let hotspots = matches
        .get_one::<String>("hotspots")
        .expect("A hotspot table is required.");
    let sequences = matches
        .get_one::<String>("sequences")
        .expect("A sequence table is required.");
    let proteome = matches
        .get_one::<String>("proteome")
        .expect("A proteome table is required.");

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);
    let confidence = matches
        .get_one::<f64>("confidence")
        .copied()
        .unwrap_or(DEFAULT_CONFIDENCE);

    let hotspots = read_hotspot_spans_by_transcript(Path::new(hotspots))
        .with_context(|| format!("Failed to read hotspot table {}", hotspots))?;
    let sequences = read_transcript_sequences(Path::new(sequences))
        .with_context(|| format!("Failed to read sequence table {}", sequences))?;
    let proteome = read_proteome_sequences(Path::new(proteome))
        .with_context(|| format!("Failed to read proteome table {}", proteome))?;

    let hr_counts = hotspot_region_counts(&hotspots, &sequences);
    let proteome_counts: AminoAcidCounts = proteome.iter().map(String::as_str).collect();
    info!(
        "{} residues in hotspot regions, {} in the proteome",
        hr_counts.total(),
        proteome_counts.total()
    );

    let ratios = odds_ratios(&hr_counts, &proteome_counts, confidence)?;

    write_tsv_rows(&ratios, Path::new(output))
        .with_context(|| format!("Failed to write {}", output))?;

    Ok(())
}

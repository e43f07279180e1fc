use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use hotspots_scan::consts::{DEFAULT_MAX_GAP, DEFAULT_MIN_RUN};
use hotspots_scan::{HotspotScanner, ScanConfig, run_scan};

pub fn run_cluster(matches: &ArgMatches) -> Result<()> {
    let lhr = matches
        .get_one::<String>("lhr")
        .expect("LHR has a default value");

    let mut config = ScanConfig::cluster(lhr);
    if let Some(column) = matches.get_one::<String>("sum-column") {
        config.sum_column = Some(column.clone());
    }

    run_scan_command(matches, config)
}

pub fn run_hotspot(matches: &ArgMatches) -> Result<()> {
    let lhr = matches
        .get_one::<String>("lhr")
        .expect("LHR has a default value");

    let min_run = matches
        .get_one::<u32>("min-run")
        .copied()
        .unwrap_or(DEFAULT_MIN_RUN);
    let max_gap = matches
        .get_one::<u32>("max-gap")
        .copied()
        .unwrap_or(DEFAULT_MAX_GAP);

    if min_run == 0 {
        anyhow::bail!("--min-run must be at least 1");
    }

    let config = ScanConfig::hotspot(lhr, HotspotScanner::new(min_run, max_gap));
    run_scan_command(matches, config)
}

fn run_scan_command(matches: &ArgMatches, mut config: ScanConfig) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("An input folder is required.");
    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");

    if let Some(column) = matches.get_one::<String>("flag-column") {
        config.flag_column = column.clone();
    }
    if let Some(column) = matches.get_one::<String>("score-column") {
        config.score_column = column.clone();
    }
    if let Some(chromosomes) = matches.get_many::<String>("chromosomes") {
        config.chromosomes = chromosomes.cloned().collect();
    }
    let threads = matches.get_one::<usize>("threads").copied();

    let report = run_scan(Path::new(input), &config, threads)
        .with_context(|| format!("Failed to scan score tables in {}", input))?;

    report
        .rows
        .write_to_file(Path::new(output))
        .with_context(|| format!("Failed to write {}", output))?;

    info!(
        "Wrote {} rows to {} ({} tables, {} skipped, {} rejected)",
        report.rows.len(),
        output,
        report.files,
        report.skipped.len(),
        report.rejected.len()
    );

    Ok(())
}

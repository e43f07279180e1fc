use std::path::{Path, PathBuf};

use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rayon::prelude::*;

use hotspots_core::HotspotsError;
use hotspots_core::models::{GeneFile, ScoreTable};

use crate::consts::{SCORE_FILE_PATTERN, SCORES_DIR};
use crate::errors::ScanError;
use crate::models::{ScanConfig, SummaryRows};
use crate::scanner::{RegionScanner, ScanMode};
use crate::summary::{cluster_rows, hotspot_rows};

/// Outcome of scanning a whole input directory.
#[derive(Debug)]
pub struct ScanReport {
    /// Sorted rows from every gene that was scanned.
    pub rows: SummaryRows,
    /// Number of score tables found.
    pub files: usize,
    /// Tables lacking a required column.
    pub skipped: Vec<(PathBuf, String)>,
    /// Tables that could not be read or parsed.
    pub rejected: Vec<(PathBuf, String)>,
}

///
/// List the per-gene score tables under `<input_dir>/<chromosome>/scores/`.
///
/// Chromosomes are visited in the given order and files within a chromosome
/// in path order. Missing chromosome directories are skipped, as are files
/// whose names don't encode a gene and a transcript.
///
pub fn collect_gene_files(
    input_dir: &Path,
    chromosomes: &[String],
) -> Result<Vec<GeneFile>, ScanError> {
    if !input_dir.is_dir() {
        return Err(ScanError::MissingInputDir(input_dir.display().to_string()));
    }

    let mut gene_files: Vec<GeneFile> = Vec::new();

    for chromosome in chromosomes {
        let scores_dir = input_dir.join(chromosome).join(SCORES_DIR);
        if !scores_dir.is_dir() {
            debug!("No score directory for {}: {:?}", chromosome, scores_dir);
            continue;
        }

        let pattern = scores_dir.join(SCORE_FILE_PATTERN);
        let mut paths = glob(&pattern.to_string_lossy())?
            .map(|entry| entry.map_err(|e| ScanError::Io(e.into_error())))
            .collect::<Result<Vec<PathBuf>, ScanError>>()?;
        paths.sort();

        let before = gene_files.len();
        for path in paths {
            match GeneFile::new(&path, chromosome) {
                Ok(gene_file) => gene_files.push(gene_file),
                Err(e) => warn!("Skipping {:?}: {}", path, e),
            }
        }

        info!("{}: {} score tables", chromosome, gene_files.len() - before);
    }

    Ok(gene_files)
}

///
/// Load one gene's table, scan it and summarize the regions found.
///
pub fn scan_gene_file(
    gene_file: &GeneFile,
    config: &ScanConfig,
) -> Result<SummaryRows, HotspotsError> {
    let table = ScoreTable::from_path(
        &gene_file.path,
        &config.flag_column,
        &config.score_columns(),
    )?;
    let regions = config.mode.scan(&table.records);

    let rows = match config.mode {
        ScanMode::Cluster(_) => SummaryRows::Clusters(cluster_rows(gene_file, &table, &regions)),
        ScanMode::Hotspot(_) => SummaryRows::Hotspots(hotspot_rows(gene_file, &table, &regions)),
    };

    Ok(rows)
}

///
/// Scan every gene table under `input_dir`.
///
/// Genes are processed independently on a rayon pool and joined back in
/// input order. A failing gene never stops the batch: tables missing a
/// required column are skipped, unreadable ones are rejected with a warning.
///
/// # Arguments:
/// - input_dir: folder holding one sub folder per chromosome
/// - config: columns, scan mode and chromosomes to visit
/// - threads: worker count, `None` for rayon's default
pub fn run_scan(
    input_dir: &Path,
    config: &ScanConfig,
    threads: Option<usize>,
) -> Result<ScanReport, ScanError> {
    let gene_files = collect_gene_files(input_dir, &config.chromosomes)?;
    info!(
        "Scanning {} score tables from {:?}",
        gene_files.len(),
        input_dir
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.unwrap_or(0))
        .build()?;

    let pb = ProgressBar::new(gene_files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} genes ({eta})")?
            .progress_chars("##-"),
    );

    let outcomes: Vec<Result<SummaryRows, HotspotsError>> = pool.install(|| {
        gene_files
            .par_iter()
            .map(|gene_file| {
                let outcome = scan_gene_file(gene_file, config);
                pb.inc(1);
                outcome
            })
            .collect()
    });

    pb.finish_and_clear();

    let mut report = ScanReport {
        rows: SummaryRows::empty(&config.mode),
        files: gene_files.len(),
        skipped: vec![],
        rejected: vec![],
    };

    for (gene_file, outcome) in gene_files.iter().zip(outcomes) {
        match outcome {
            Ok(rows) => report.rows.append(rows),
            Err(e) if e.is_missing_column() => {
                debug!("Skipping {}: {}", gene_file.gene, e);
                report.skipped.push((gene_file.path.clone(), e.to_string()));
            }
            Err(e) => {
                warn!("Rejecting {:?}: {}", gene_file.path, e);
                report.rejected.push((gene_file.path.clone(), e.to_string()));
            }
        }
    }

    report.rows.sort();

    info!(
        "{} rows from {} tables ({} skipped, {} rejected)",
        report.rows.len(),
        report.files,
        report.skipped.len(),
        report.rejected.len()
    );

    Ok(report)
}

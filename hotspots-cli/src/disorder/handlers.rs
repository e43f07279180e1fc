use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use hotspots_core::utils::write_tsv_rows;
use hotspots_seqstats::consts::DEFAULT_ALPHA;
use hotspots_seqstats::tables::{
    read_disorder_annotations, read_hotspot_spans_by_gene, sum_cds_lengths,
};
use hotspots_seqstats::{codon_sets, compare_codons, disorder_enrichment, disorder_spans};

pub fn run_disorder(matches: &ArgMatches) -> Result<()> {
    let disorder = matches
        .get_one::<String>("disorder")
        .expect("A disorder table is required.");
    let hotspots = matches
        .get_one::<String>("hotspots")
        .expect("A hotspot table is required.");
    let proteome = matches
        .get_one::<String>("proteome")
        .expect("A proteome table is required.");
    let output_path = matches.get_one::<String>("output");
    let per_gene_path = matches.get_one::<String>("per-gene");
    let alpha = matches
        .get_one::<f64>("alpha")
        .copied()
        .unwrap_or(DEFAULT_ALPHA);

    let annotations = read_disorder_annotations(Path::new(disorder))
        .with_context(|| format!("Failed to read disorder table {}", disorder))?;
    let hotspots = read_hotspot_spans_by_gene(Path::new(hotspots))
        .with_context(|| format!("Failed to read hotspot table {}", hotspots))?;
    let proteome_codons = sum_cds_lengths(Path::new(proteome))
        .with_context(|| format!("Failed to read proteome table {}", proteome))?;

    let disorder = disorder_spans(&annotations);
    info!(
        "{} of {} disorder annotations carry a residue range",
        disorder.len(),
        annotations.len()
    );

    let disorder = codon_sets(disorder.iter().map(|(g, s)| (g.as_str(), s.as_slice())));
    let hotspots = codon_sets(hotspots.iter().map(|(g, s)| (g.as_str(), s.as_slice())));
    let overlaps = compare_codons(&disorder, &hotspots);

    if let Some(path) = per_gene_path {
        write_tsv_rows(&overlaps, Path::new(path))
            .with_context(|| format!("Failed to write {}", path))?;
    }

    let enrichment = disorder_enrichment(&overlaps, proteome_codons, alpha)?;
    let json = serde_json::to_string_pretty(&enrichment)?;

    match output_path {
        Some(path) => {
            let mut file =
                File::create(path).with_context(|| format!("Failed to create {}", path))?;
            writeln!(file, "{}", json)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", json)?;
        }
    }

    Ok(())
}

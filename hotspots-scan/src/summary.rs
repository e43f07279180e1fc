use hotspots_core::models::{GeneFile, Region, ScoreTable};
use hotspots_core::models::span::join_spans;
use hotspots_core::utils::format_float;

use crate::models::{ClusterRow, HotspotRow};
use crate::statistics::{ScoreSummary, region_statistics};

fn join_with<I, F>(values: I, format: F) -> String
where
    I: IntoIterator<Item = f64>,
    F: Fn(f64) -> String,
{
    values
        .into_iter()
        .map(format)
        .collect::<Vec<_>>()
        .join(",")
}

/// Peptide counts are integer columns, so whole sums print without `.0`.
fn format_sum(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format_float(value)
    }
}

///
/// Group a gene's clusters by length and build one row per length.
///
/// Lengths appear in the order they were first seen along the gene; within
/// a row, coordinates and statistics are comma-joined in cluster order.
///
/// # Arguments:
/// - gene_file: identifiers of the gene
/// - table: the gene's score table, loaded with the averaged column at
///   position 0 and the summed column at position 1
/// - regions: clusters found on `table`
pub fn cluster_rows(
    gene_file: &GeneFile,
    table: &ScoreTable,
    regions: &[Region],
) -> Vec<ClusterRow> {
    let mut by_length: Vec<(u32, Vec<&Region>)> = Vec::new();
    for region in regions {
        let length = region.len();
        match by_length.iter_mut().find(|(l, _)| *l == length) {
            Some((_, group)) => group.push(region),
            None => by_length.push((length, vec![region])),
        }
    }

    by_length
        .into_iter()
        .map(|(length, group)| {
            let fractions: Vec<ScoreSummary> = group
                .iter()
                .map(|r| region_statistics(&table.records, &r.span, 0))
                .collect();
            let peptides: Vec<ScoreSummary> = group
                .iter()
                .map(|r| region_statistics(&table.records, &r.span, 1))
                .collect();
            let spans: Vec<_> = group.iter().map(|r| r.span).collect();

            ClusterRow {
                chromosome: gene_file.chromosome.clone(),
                gene: gene_file.gene.clone(),
                transcript: gene_file.transcript.clone(),
                gene_length: table.len(),
                num_clusters: group.len(),
                length_clusters: length,
                codon_coordinates: join_spans(&spans),
                peptides: join_with(peptides.iter().map(|s| s.sum), format_sum),
                fraction_mean: join_with(fractions.iter().map(|s| s.mean), format_float),
                fraction_std: join_with(fractions.iter().map(|s| s.std), format_float),
            }
        })
        .collect()
}

///
/// One row per hotspot, with the mean of the averaged column (position 0)
/// over the hotspot's codons, interior gaps included.
///
pub fn hotspot_rows(
    gene_file: &GeneFile,
    table: &ScoreTable,
    regions: &[Region],
) -> Vec<HotspotRow> {
    regions
        .iter()
        .map(|region| {
            let fraction = region_statistics(&table.records, &region.span, 0);
            HotspotRow {
                chromosome: gene_file.chromosome.clone(),
                gene: gene_file.gene.clone(),
                transcript: gene_file.transcript.clone(),
                gene_len: table.len(),
                htspt_len: region.len(),
                htspt_coord: region.span.to_string(),
                codon_gap: region.gaps_as_string(),
                mean_fracc: format_float(fraction.mean),
            }
        })
        .collect()
}

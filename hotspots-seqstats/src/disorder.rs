//! Overlap between intrinsically disordered regions and hotspot regions.
//!
//! Codons are compared gene by gene; the proportions of disordered codons
//! inside and outside hotspot regions are then tested against each other.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

use hotspots_core::models::CodonSpan;
use hotspots_core::utils::TsvRow;

use crate::errors::{Result, SeqStatsError};
use crate::odds_ratio::z_value;

static DISORDER_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z])(\d+)-([A-Za-z])(\d+)").expect("valid regex"));

///
/// Find a residue range such as `M1-K50` in a disorder annotation.
///
/// Annotations are free text; those without a range give `None`.
///
pub fn parse_disorder_span(description: &str) -> Option<CodonSpan> {
    let caps = DISORDER_SPAN.captures(description)?;
    let start: u32 = caps.get(2)?.as_str().parse().ok()?;
    let end: u32 = caps.get(4)?.as_str().parse().ok()?;
    (start <= end).then(|| CodonSpan::new(start, end))
}

///
/// Disordered spans per gene from (gene, annotation) pairs.
///
/// Annotations without a residue range are dropped.
///
pub fn disorder_spans(annotations: &[(String, String)]) -> Vec<(String, Vec<CodonSpan>)> {
    annotations
        .iter()
        .filter_map(|(gene, description)| {
            parse_disorder_span(description).map(|span| (gene.clone(), vec![span]))
        })
        .collect()
}

/// Set of codons per gene.
pub type CodonSets = HashMap<String, HashSet<u32>>;

///
/// Merge spans into one codon set per gene.
///
pub fn codon_sets<'a, I>(rows: I) -> CodonSets
where
    I: IntoIterator<Item = (&'a str, &'a [CodonSpan])>,
{
    let mut sets: CodonSets = HashMap::new();
    for (gene, spans) in rows {
        let codons = sets.entry(gene.to_string()).or_default();
        for span in spans {
            codons.extend(span.codons());
        }
    }
    sets
}

/// Disordered and hotspot codon counts of one gene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneOverlap {
    #[serde(rename = "Gene")]
    pub gene: String,
    #[serde(rename = "Disordered_codons")]
    pub disordered_codons: u64,
    #[serde(rename = "HR_codons")]
    pub hr_codons: u64,
    #[serde(rename = "Dis_HR_codons")]
    pub dis_hr_codons: u64,
}

impl TsvRow for GeneOverlap {
    const HEADER: &'static [&'static str] =
        &["Gene", "Disordered_codons", "HR_codons", "Dis_HR_codons"];
}

///
/// Per-gene overlap for every gene present in either set, sorted by gene.
///
pub fn compare_codons(disorder: &CodonSets, hotspots: &CodonSets) -> Vec<GeneOverlap> {
    let empty = HashSet::new();
    let genes: BTreeSet<&String> = disorder.keys().chain(hotspots.keys()).collect();

    genes
        .into_iter()
        .map(|gene| {
            let disordered = disorder.get(gene).unwrap_or(&empty);
            let hr = hotspots.get(gene).unwrap_or(&empty);
            GeneOverlap {
                gene: gene.clone(),
                disordered_codons: disordered.len() as u64,
                hr_codons: hr.len() as u64,
                dis_hr_codons: disordered.intersection(hr).count() as u64,
            }
        })
        .collect()
}

/// Confidence interval bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

/// Result of comparing disorder inside and outside hotspot regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisorderEnrichment {
    pub disordered_in_hr: u64,
    pub disordered_out_hr: u64,
    pub total_in_hr: u64,
    pub total_out_hr: u64,
    pub proportion_in_hr: f64,
    pub proportion_out_hr: f64,
    pub percentage_in_hr: f64,
    pub percentage_out_hr: f64,
    /// Pooled two-proportion z statistic.
    pub z_statistic: f64,
    /// Two-sided p-value of the z statistic.
    pub p_value: f64,
    pub difference: f64,
    pub confidence: f64,
    pub ci_in_hr: Interval,
    pub ci_out_hr: Interval,
    pub ci_difference: Interval,
}

fn wald_interval(p: f64, n: f64, z: f64) -> Interval {
    let half = z * (p * (1.0 - p) / n).sqrt();
    Interval {
        lower: p - half,
        upper: p + half,
    }
}

///
/// Test whether disordered codons are over-represented in hotspot regions.
///
/// # Arguments:
/// - overlaps: per-gene counts from [compare_codons]
/// - proteome_codons: total coding length of the proteome
/// - alpha: significance level of the confidence intervals
pub fn disorder_enrichment(
    overlaps: &[GeneOverlap],
    proteome_codons: u64,
    alpha: f64,
) -> Result<DisorderEnrichment> {
    let disordered_total: u64 = overlaps.iter().map(|o| o.disordered_codons).sum();
    let disordered_in_hr: u64 = overlaps.iter().map(|o| o.dis_hr_codons).sum();
    let total_in_hr: u64 = overlaps.iter().map(|o| o.hr_codons).sum();

    if total_in_hr == 0 {
        return Err(SeqStatsError::StatisticsError(
            "no codons inside hotspot regions".to_string(),
        ));
    }
    if proteome_codons <= total_in_hr {
        return Err(SeqStatsError::StatisticsError(format!(
            "proteome length {} doesn't exceed hotspot codons {}",
            proteome_codons, total_in_hr
        )));
    }

    let disordered_out_hr = disordered_total - disordered_in_hr;
    let total_out_hr = proteome_codons - total_in_hr;

    let (n1, n2) = (total_in_hr as f64, total_out_hr as f64);
    let p1 = disordered_in_hr as f64 / n1;
    let p2 = disordered_out_hr as f64 / n2;

    let pooled = (disordered_in_hr + disordered_out_hr) as f64 / (n1 + n2);
    let z_statistic = (p1 - p2) / (pooled * (1.0 - pooled) * (1.0 / n1 + 1.0 / n2)).sqrt();

    let normal =
        Normal::new(0.0, 1.0).map_err(|e| SeqStatsError::StatisticsError(e.to_string()))?;
    let p_value = 2.0 * (1.0 - normal.cdf(z_statistic.abs()));

    let confidence = 1.0 - alpha;
    let z = z_value(confidence)?;
    let difference = p1 - p2;
    let half = z * (p1 * (1.0 - p1) / n1 + p2 * (1.0 - p2) / n2).sqrt();

    Ok(DisorderEnrichment {
        disordered_in_hr,
        disordered_out_hr,
        total_in_hr,
        total_out_hr,
        proportion_in_hr: p1,
        proportion_out_hr: p2,
        percentage_in_hr: p1 * 100.0,
        percentage_out_hr: p2 * 100.0,
        z_statistic,
        p_value,
        difference,
        confidence,
        ci_in_hr: wald_interval(p1, n1, z),
        ci_out_hr: wald_interval(p2, n2, z),
        ci_difference: Interval {
            lower: difference - half,
            upper: difference + half,
        },
    })
}

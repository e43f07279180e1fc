//! Amino-acid enrichment of hotspot regions against the proteome.
//!
//! For every amino acid the odds of meeting it inside hotspot regions are
//! compared to the odds of meeting it anywhere in the proteome. Confidence
//! intervals use Woolf's log method on the 2x2 count table.

use std::collections::HashMap;

use log::warn;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

use hotspots_core::models::CodonSpan;
use hotspots_core::utils::TsvRow;

use crate::amino_acids::{AminoAcidCounts, extract_region_sequence};
use crate::errors::{Result, SeqStatsError};

/// Odds ratio of one amino acid, hotspot regions vs. proteome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsRatio {
    #[serde(rename = "AA")]
    pub amino_acid: char,
    #[serde(rename = "counts_HR")]
    pub counts_hr: u64,
    pub counts_proteome: u64,
    #[serde(rename = "odds_HR")]
    pub odds_hr: f64,
    pub odds_proteome: f64,
    pub odds_ratio: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
}

impl TsvRow for OddsRatio {
    const HEADER: &'static [&'static str] = &[
        "AA",
        "counts_HR",
        "counts_proteome",
        "odds_HR",
        "odds_proteome",
        "odds_ratio",
        "ci_lower",
        "ci_upper",
    ];
}

///
/// Two-sided standard normal quantile for a confidence level, e.g. 1.96 for 0.95.
///
pub fn z_value(confidence: f64) -> Result<f64> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(SeqStatsError::StatisticsError(format!(
            "confidence must be in (0, 1), got {}",
            confidence
        )));
    }
    let normal =
        Normal::new(0.0, 1.0).map_err(|e| SeqStatsError::StatisticsError(e.to_string()))?;
    Ok(normal.inverse_cdf(1.0 - (1.0 - confidence) / 2.0))
}

///
/// Amino-acid counts over the hotspot regions of all transcripts.
///
/// # Arguments:
/// - hotspots: (transcript, spans) pairs
/// - sequences: protein sequence per transcript
pub fn hotspot_region_counts(
    hotspots: &[(String, Vec<CodonSpan>)],
    sequences: &HashMap<String, String>,
) -> AminoAcidCounts {
    let mut counts = AminoAcidCounts::default();
    for (transcript, spans) in hotspots {
        match sequences.get(transcript) {
            Some(sequence) => counts.add_sequence(&extract_region_sequence(sequence, spans)),
            None => warn!("No sequence for transcript {}, skipping its hotspots", transcript),
        }
    }
    counts
}

fn odds(count: u64, total: u64) -> f64 {
    count as f64 / (total as f64 - count as f64)
}

///
/// Odds ratio and confidence interval of every amino acid, sorted by odds
/// ratio, highest first.
///
pub fn odds_ratios(
    hotspot_counts: &AminoAcidCounts,
    proteome_counts: &AminoAcidCounts,
    confidence: f64,
) -> Result<Vec<OddsRatio>> {
    let z = z_value(confidence)?;
    let hr_total = hotspot_counts.total();
    let proteome_total = proteome_counts.total();

    let mut ratios: Vec<OddsRatio> = hotspot_counts
        .iter()
        .zip(proteome_counts.iter())
        .map(|((amino_acid, a), (_, c))| {
            let b = hr_total - a;
            let d = proteome_total - c;

            let odds_hr = odds(a, hr_total);
            let odds_proteome = odds(c, proteome_total);
            let odds_ratio = odds_hr / odds_proteome;

            // Woolf's interval is undefined with an empty cell
            let (ci_lower, ci_upper) = if [a, b, c, d].contains(&0) {
                (f64::NAN, f64::NAN)
            } else {
                let se_log_or =
                    (1.0 / a as f64 + 1.0 / b as f64 + 1.0 / c as f64 + 1.0 / d as f64).sqrt();
                let log_or = odds_ratio.ln();
                ((log_or - z * se_log_or).exp(), (log_or + z * se_log_or).exp())
            };

            OddsRatio {
                amino_acid,
                counts_hr: a,
                counts_proteome: c,
                odds_hr,
                odds_proteome,
                odds_ratio,
                ci_lower,
                ci_upper,
            }
        })
        .collect();

    // undefined ratios (amino acid absent from both sets) go last
    ratios.sort_by(|x, y| match (x.odds_ratio.is_nan(), y.odds_ratio.is_nan()) {
        (false, false) => y.odds_ratio.total_cmp(&x.odds_ratio),
        (x_nan, y_nan) => x_nan.cmp(&y_nan),
    });

    Ok(ratios)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[rstest]
    #[case(0.95, 1.959964)]
    #[case(0.99, 2.575829)]
    fn test_z_value(#[case] confidence: f64, #[case] expected: f64) {
        assert!(approx(z_value(confidence).unwrap(), expected));
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(f64::NAN)]
    fn test_z_value_rejects(#[case] confidence: f64) {
        assert!(z_value(confidence).is_err());
    }

    #[rstest]
    fn test_odds_ratios() {
        let hr = AminoAcidCounts::from_sequence("AAAG");
        let proteome = AminoAcidCounts::from_sequence("AGGGGGGG");

        let ratios = odds_ratios(&hr, &proteome, 0.95).unwrap();
        assert_eq!(ratios.len(), 21);

        let top = &ratios[0];
        assert_eq!(top.amino_acid, 'A');
        assert_eq!(top.counts_hr, 3);
        assert!(approx(top.odds_hr, 3.0));
        assert!(approx(top.odds_proteome, 1.0 / 7.0));
        assert!(approx(top.odds_ratio, 21.0));

        let se = (1.0 / 3.0 + 1.0 + 1.0 + 1.0 / 7.0f64).sqrt();
        let z = z_value(0.95).unwrap();
        assert!(approx(top.ci_lower, (21.0f64.ln() - z * se).exp()));
        assert!(approx(top.ci_upper, (21.0f64.ln() + z * se).exp()));
        assert!(top.ci_lower < top.odds_ratio && top.odds_ratio < top.ci_upper);

        let g = ratios.iter().find(|r| r.amino_acid == 'G').unwrap();
        assert!(approx(g.odds_ratio, 1.0 / 21.0));
    }

    #[rstest]
    #[case('W')] // absent from both sets
    #[case('V')] // absent from the hotspot regions only
    #[case('K')] // every hotspot residue
    fn test_empty_cell_has_no_interval(#[case] amino_acid: char) {
        let hr = AminoAcidCounts::from_sequence("KKKK");
        let proteome = AminoAcidCounts::from_sequence("KVVGGG");

        let ratios = odds_ratios(&hr, &proteome, 0.95).unwrap();
        let ratio = ratios.iter().find(|r| r.amino_acid == amino_acid).unwrap();
        assert!(ratio.ci_lower.is_nan());
        assert!(ratio.ci_upper.is_nan());
    }

    #[rstest]
    fn test_hotspot_region_counts() {
        let sequences: HashMap<String, String> = [
            ("T1".to_string(), "MAGTKL".to_string()),
            ("T2".to_string(), "WWWW".to_string()),
        ]
        .into_iter()
        .collect();
        let hotspots = vec![
            ("T1".to_string(), vec![CodonSpan::new(2, 3)]),
            ("T2".to_string(), vec![CodonSpan::new(1, 2), CodonSpan::new(4, 4)]),
            ("T9".to_string(), vec![CodonSpan::new(1, 2)]),
        ];

        let counts = hotspot_region_counts(&hotspots, &sequences);
        assert_eq!(counts.get('A'), 1);
        assert_eq!(counts.get('G'), 1);
        assert_eq!(counts.get('W'), 3);
        assert_eq!(counts.total(), 5);
    }
}

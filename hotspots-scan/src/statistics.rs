//! Aggregate statistics over the records covered by a region.
//!
//! Records are re-selected by coordinate range after the scan, so the
//! numbers only depend on the region bounds and the table.

use hotspots_core::models::score_table::records_in_span;
use hotspots_core::models::{CodonSpan, PositionRecord};

/// Sum, mean and sample standard deviation of a set of scores.
///
/// NaN scores are skipped. `mean` is NaN without values, `std` is NaN with
/// fewer than two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub std: f64,
}

impl ScoreSummary {
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
        let count = values.len();
        let sum: f64 = values.iter().sum();

        let mean = if count == 0 {
            f64::NAN
        } else {
            sum / count as f64
        };

        let std = if count < 2 {
            f64::NAN
        } else {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        };

        ScoreSummary {
            count,
            sum,
            mean,
            std,
        }
    }
}

///
/// Summarize score column `column` over the records inside `span`.
///
/// # Arguments:
/// - records: gene records ordered by codon index
/// - span: region bounds (inclusive)
/// - column: position of the score in `PositionRecord::scores`
pub fn region_statistics(
    records: &[PositionRecord],
    span: &CodonSpan,
    column: usize,
) -> ScoreSummary {
    ScoreSummary::from_values(records_in_span(records, span).iter().map(|r| r.score(column)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use hotspots_core::models::Flag;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[fixture]
    fn records() -> Vec<PositionRecord> {
        vec![
            PositionRecord::new(1, Flag::No, vec![0.0, 0.1]),
            PositionRecord::new(2, Flag::Yes, vec![3.0, 0.5]),
            PositionRecord::new(3, Flag::Yes, vec![1.0, f64::NAN]),
            PositionRecord::new(4, Flag::Yes, vec![2.0, 0.3]),
            PositionRecord::new(5, Flag::No, vec![0.0, 0.2]),
        ]
    }

    #[rstest]
    fn test_summary_values() {
        let summary = ScoreSummary::from_values([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(summary.count, 8);
        assert!(approx(summary.sum, 40.0));
        assert!(approx(summary.mean, 5.0));
        // sample std (ddof = 1)
        assert!(approx(summary.std, (32.0f64 / 7.0).sqrt()));
    }

    #[rstest]
    fn test_summary_small_inputs() {
        let empty = ScoreSummary::from_values(Vec::<f64>::new());
        assert_eq!(empty.count, 0);
        assert_eq!(empty.sum, 0.0);
        assert!(empty.mean.is_nan());
        assert!(empty.std.is_nan());

        let single = ScoreSummary::from_values([0.7]);
        assert!(approx(single.mean, 0.7));
        assert!(single.std.is_nan());
    }

    #[rstest]
    fn test_region_statistics(records: Vec<PositionRecord>) {
        let span = CodonSpan::new(2, 4);

        let peptides = region_statistics(&records, &span, 0);
        assert!(approx(peptides.sum, 6.0));

        // NaN at codon 3 is skipped
        let fraction = region_statistics(&records, &span, 1);
        assert_eq!(fraction.count, 2);
        assert!(approx(fraction.mean, 0.4));
    }

    #[rstest]
    fn test_region_statistics_outside_table(records: Vec<PositionRecord>) {
        let summary = region_statistics(&records, &CodonSpan::new(20, 30), 1);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
    }
}

//! Run-length scans over one gene's ordered position records.
//!
//! Two policies share the [RegionScanner] interface:
//!
//! - [ClusterScanner]: every maximal run of YES codons is a region.
//! - [HotspotScanner]: YES runs may be bridged by up to `max_gap` consecutive
//!   NO codons; the resulting span is kept only if one of its runs is at
//!   least `min_run` codons long.
//!
use std::mem;

use hotspots_core::models::{CodonSpan, Flag, PositionRecord, Region};

use crate::consts::{DEFAULT_MAX_GAP, DEFAULT_MIN_RUN};

/// Trait for turning a gene's records into detected regions.
pub trait RegionScanner {
    /// Scan records (ordered by codon index) and return the regions found,
    /// ordered by start and non-overlapping.
    fn scan(&self, records: &[PositionRecord]) -> Vec<Region>;
}

///
/// Simple clustering: maximal runs of consecutive YES codons.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClusterScanner;

impl RegionScanner for ClusterScanner {
    fn scan(&self, records: &[PositionRecord]) -> Vec<Region> {
        let mut regions: Vec<Region> = Vec::new();
        let mut open: Option<CodonSpan> = None;

        for record in records {
            let codon = record.codon_index;
            match record.flag {
                Flag::Yes => {
                    if let Some(run) = open.as_mut() {
                        run.end = codon;
                    } else {
                        open = Some(CodonSpan::new(codon, codon));
                    }
                }
                Flag::No => {
                    if let Some(run) = open.take() {
                        regions.push(Region::from_run(run));
                    }
                }
            }
        }

        // sequence ended inside a run
        if let Some(run) = open {
            regions.push(Region::from_run(run));
        }

        regions
    }
}

///
/// Gap-tolerant hotspot detection.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotspotScanner {
    /// At least one YES run of a hotspot must reach this length.
    pub min_run: u32,
    /// Number of consecutive NO codons a hotspot may contain.
    pub max_gap: u32,
}

impl Default for HotspotScanner {
    fn default() -> Self {
        HotspotScanner {
            min_run: DEFAULT_MIN_RUN,
            max_gap: DEFAULT_MAX_GAP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    InRun { start: u32, last: u32 },
    InGap { trailing: u32 },
}

/// Runs and gaps of the span currently being extended.
#[derive(Debug, Default)]
struct OpenSpan {
    runs: Vec<CodonSpan>,
    gaps: Vec<u32>,
}

impl HotspotScanner {
    pub fn new(min_run: u32, max_gap: u32) -> Self {
        HotspotScanner { min_run, max_gap }
    }

    /// State after a NO codon, closing the span once the gap is too long.
    fn after_no(
        &self,
        trailing: u32,
        span: &mut OpenSpan,
        regions: &mut Vec<Region>,
    ) -> ScanState {
        if trailing > self.max_gap {
            self.close(span, trailing as usize, regions);
            ScanState::Outside
        } else {
            ScanState::InGap { trailing }
        }
    }

    /// Evaluate the open span. The last `trailing` gaps are the NO codons
    /// after the final run and never belong to the hotspot.
    fn close(&self, span: &mut OpenSpan, trailing: usize, regions: &mut Vec<Region>) {
        let runs = mem::take(&mut span.runs);
        let mut gaps = mem::take(&mut span.gaps);
        gaps.truncate(gaps.len().saturating_sub(trailing));

        if !runs.iter().any(|r| r.len() >= self.min_run) {
            return;
        }

        if let Some(region) = Region::from_runs(runs, gaps) {
            regions.push(region);
        }
    }
}

impl RegionScanner for HotspotScanner {
    fn scan(&self, records: &[PositionRecord]) -> Vec<Region> {
        let mut regions: Vec<Region> = Vec::new();
        let mut span = OpenSpan::default();
        let mut state = ScanState::Outside;

        for record in records {
            let codon = record.codon_index;
            state = match (state, record.flag) {
                (ScanState::Outside, Flag::Yes) | (ScanState::InGap { .. }, Flag::Yes) => {
                    ScanState::InRun {
                        start: codon,
                        last: codon,
                    }
                }
                (ScanState::InRun { start, .. }, Flag::Yes) => {
                    ScanState::InRun { start, last: codon }
                }
                (ScanState::Outside, Flag::No) => ScanState::Outside,
                (ScanState::InRun { start, last }, Flag::No) => {
                    span.runs.push(CodonSpan::new(start, last));
                    span.gaps.push(codon);
                    self.after_no(1, &mut span, &mut regions)
                }
                (ScanState::InGap { trailing }, Flag::No) => {
                    span.gaps.push(codon);
                    self.after_no(trailing + 1, &mut span, &mut regions)
                }
            };
        }

        // end of the gene: finalize whatever is still open
        match state {
            ScanState::InRun { start, last } => {
                span.runs.push(CodonSpan::new(start, last));
                self.close(&mut span, 0, &mut regions);
            }
            ScanState::InGap { trailing } => {
                self.close(&mut span, trailing as usize, &mut regions);
            }
            ScanState::Outside => {}
        }

        regions
    }
}

///
/// Scan policy selected for a run.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Cluster(ClusterScanner),
    Hotspot(HotspotScanner),
}

impl RegionScanner for ScanMode {
    fn scan(&self, records: &[PositionRecord]) -> Vec<Region> {
        match self {
            ScanMode::Cluster(scanner) => scanner.scan(records),
            ScanMode::Hotspot(scanner) => scanner.scan(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    /// Records numbered from 1 with a score equal to the codon index.
    fn records_from_flags(flags: &str) -> Vec<PositionRecord> {
        flags
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let flag = if c == 'Y' { Flag::Yes } else { Flag::No };
                PositionRecord::new(i as u32 + 1, flag, vec![(i + 1) as f64])
            })
            .collect()
    }

    fn spans(regions: &[Region]) -> Vec<String> {
        regions.iter().map(|r| r.to_string()).collect()
    }

    fn assert_well_formed(regions: &[Region]) {
        for region in regions {
            assert!(region.start() <= region.end());
            assert_eq!(region.len(), region.end() - region.start() + 1);
            for gap in &region.gaps {
                assert!(region.span.contains(*gap));
            }
        }
        for pair in regions.windows(2) {
            assert!(pair[0].end() < pair[1].start());
        }
    }

    #[rstest]
    fn test_cluster_example() {
        let records = records_from_flags("NYYYNY");
        let regions = ClusterScanner.scan(&records);

        assert_eq!(spans(&regions), vec!["2-4", "6-6"]);
        assert_eq!(regions[0].len(), 3);
        assert_eq!(regions[1].len(), 1);
    }

    #[rstest]
    #[case("", vec![])]
    #[case("NNNN", vec![])]
    #[case("YYYY", vec!["1-4"])]
    #[case("YNYNY", vec!["1-1", "3-3", "5-5"])]
    #[case("NNYYNNNYY", vec!["3-4", "8-9"])]
    fn test_cluster_cases(#[case] flags: &str, #[case] expected: Vec<&str>) {
        let regions = ClusterScanner.scan(&records_from_flags(flags));
        assert_eq!(spans(&regions), expected);
        assert_well_formed(&regions);
    }

    #[rstest]
    fn test_cluster_uses_codon_coordinates() {
        let records = vec![
            PositionRecord::new(10, Flag::Yes, vec![]),
            PositionRecord::new(11, Flag::Yes, vec![]),
            PositionRecord::new(12, Flag::No, vec![]),
        ];
        assert_eq!(spans(&ClusterScanner.scan(&records)), vec!["10-11"]);
    }

    #[rstest]
    fn test_hotspot_example() {
        let records = records_from_flags("YYYYYNYYYN");
        let regions = HotspotScanner::default().scan(&records);

        assert_eq!(spans(&regions), vec!["1-9"]);
        assert_eq!(regions[0].gaps, vec![6]);
        assert_eq!(regions[0].runs.len(), 2);
    }

    #[rstest]
    #[case::all_no("NNNNNNNN", vec![], vec![])]
    #[case::short_runs_only("YYYYNYYYYNNN", vec![], vec![])]
    #[case::double_gap("YYYYYNNYY", vec!["1-9"], vec![vec![6, 7]])]
    #[case::terminated("YYYYYNNNYY", vec!["1-5"], vec![vec![]])]
    #[case::ends_in_run("NNYYYYY", vec!["3-7"], vec![vec![]])]
    #[case::ends_in_double_gap("YYYYYNYNN", vec!["1-7"], vec![vec![6]])]
    #[case::long_run_later("YYNYYYYYY", vec!["1-9"], vec![vec![3]])]
    #[case::two_hotspots(
        "YYYYYNNNNYYYYYYNY",
        vec!["1-5", "10-17"],
        vec![vec![], vec![16]]
    )]
    fn test_hotspot_cases(
        #[case] flags: &str,
        #[case] expected: Vec<&str>,
        #[case] gaps: Vec<Vec<u32>>,
    ) {
        let regions = HotspotScanner::default().scan(&records_from_flags(flags));

        assert_eq!(spans(&regions), expected);
        assert_eq!(
            regions.iter().map(|r| r.gaps.clone()).collect::<Vec<_>>(),
            gaps
        );
        assert_well_formed(&regions);
        for region in &regions {
            assert!(region.longest_run() >= DEFAULT_MIN_RUN);
        }
    }

    #[rstest]
    fn test_hotspot_thresholds() {
        let records = records_from_flags("YYYNYY");

        // min_run of 3 keeps the span, zero gap tolerance splits it
        assert_eq!(spans(&HotspotScanner::new(3, 2).scan(&records)), vec!["1-6"]);
        assert_eq!(spans(&HotspotScanner::new(3, 0).scan(&records)), vec!["1-3"]);
        assert!(HotspotScanner::new(4, 2).scan(&records).is_empty());
    }

    #[rstest]
    #[case("NYYYNY")]
    #[case("YYYYYNYYYN")]
    #[case("YYYYYYNNNNYYYYYNNYYYYYYN")]
    fn test_scan_is_idempotent(#[case] flags: &str) {
        let records = records_from_flags(flags);
        for mode in [
            ScanMode::Cluster(ClusterScanner),
            ScanMode::Hotspot(HotspotScanner::default()),
        ] {
            let first = mode.scan(&records);
            let second = mode.scan(&records);
            assert_eq!(first, second);
            assert_well_formed(&first);
        }
    }
}

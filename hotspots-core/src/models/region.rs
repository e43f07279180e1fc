use std::fmt::{self, Display};

use crate::models::span::CodonSpan;

///
/// Region struct, one detected cluster or hotspot inside a single gene.
///
/// `runs` holds the YES sub-runs the region was built from, in order. A
/// simple cluster has exactly one run equal to `span`. `gaps` holds the
/// tolerated NO codons strictly inside `span`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub span: CodonSpan,
    pub runs: Vec<CodonSpan>,
    pub gaps: Vec<u32>,
}

impl Region {
    ///
    /// Region made of a single uninterrupted run.
    ///
    pub fn from_run(run: CodonSpan) -> Self {
        Region {
            span: run,
            runs: vec![run],
            gaps: vec![],
        }
    }

    ///
    /// Region spanning from the first run's start to the last run's end.
    /// Returns `None` when there are no runs.
    ///
    pub fn from_runs(runs: Vec<CodonSpan>, gaps: Vec<u32>) -> Option<Self> {
        let start = runs.first()?.start;
        let end = runs.last()?.end;
        Some(Region {
            span: CodonSpan::new(start, end),
            runs,
            gaps,
        })
    }

    pub fn start(&self) -> u32 {
        self.span.start
    }

    pub fn end(&self) -> u32 {
        self.span.end
    }

    ///
    /// Get length of the region (inclusive)
    ///
    pub fn len(&self) -> u32 {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    ///
    /// Length of the longest YES sub-run.
    ///
    pub fn longest_run(&self) -> u32 {
        self.runs.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    ///
    /// Gap codons, comma-joined (empty string when there are none).
    ///
    pub fn gaps_as_string(&self) -> String {
        self.gaps
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.span)
    }
}

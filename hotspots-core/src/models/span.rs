use std::fmt::{self, Display};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::errors::HotspotsError;

///
/// Inclusive codon coordinate range, written as `start-end`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub struct CodonSpan {
    pub start: u32,
    pub end: u32,
}

impl CodonSpan {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        CodonSpan { start, end }
    }

    ///
    /// Number of codons covered, both ends included.
    ///
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// A span always covers at least one codon.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, codon: u32) -> bool {
        self.start <= codon && codon <= self.end
    }

    pub fn codons(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl Display for CodonSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for CodonSpan {
    type Err = HotspotsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || HotspotsError::SpanParseError(s.to_string());

        let (start, end) = s.trim().split_once('-').ok_or_else(err)?;
        let start: u32 = start.trim().parse().map_err(|_| err())?;
        let end: u32 = end.trim().parse().map_err(|_| err())?;

        if start > end {
            return Err(err());
        }

        Ok(CodonSpan { start, end })
    }
}

///
/// Parse a comma-joined list of spans, e.g. `3-7,12-20`.
///
pub fn parse_span_list(s: &str) -> Result<Vec<CodonSpan>, HotspotsError> {
    if s.trim().is_empty() {
        return Err(HotspotsError::SpanParseError(s.to_string()));
    }
    s.split(',').map(CodonSpan::from_str).collect()
}

///
/// Render spans the way they are stored in output tables.
///
pub fn join_spans(spans: &[CodonSpan]) -> String {
    spans
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

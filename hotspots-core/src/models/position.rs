use std::fmt::{self, Display};
use std::str::FromStr;

///
/// Per-codon candidate flag as written in the score tables.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Flag {
    Yes,
    No,
}

impl FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "YES" => Ok(Flag::Yes),
            "NO" => Ok(Flag::No),
            other => Err(format!("Invalid flag: {}", other)),
        }
    }
}

impl Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Yes => write!(f, "YES"),
            Flag::No => write!(f, "NO"),
        }
    }
}

///
/// One row of a gene's score table: the codon coordinate, its flag and the
/// score columns that were requested when the table was loaded, in request
/// order.
///
#[derive(PartialEq, Debug, Clone)]
pub struct PositionRecord {
    pub codon_index: u32,
    pub flag: Flag,
    pub scores: Vec<f64>,
}

impl PositionRecord {
    pub fn new(codon_index: u32, flag: Flag, scores: Vec<f64>) -> Self {
        PositionRecord {
            codon_index,
            flag,
            scores,
        }
    }

    ///
    /// Score of the `column`-th requested score column, NaN if absent.
    ///
    pub fn score(&self, column: usize) -> f64 {
        self.scores.get(column).copied().unwrap_or(f64::NAN)
    }
}

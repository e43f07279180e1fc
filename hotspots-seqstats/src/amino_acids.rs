use std::ops::AddAssign;

use log::warn;

use hotspots_core::models::CodonSpan;

use crate::consts::AMINO_ACIDS;

///
/// Occurrences of each letter of [AMINO_ACIDS] in a set of sequences.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AminoAcidCounts {
    counts: [u64; AMINO_ACIDS.len()],
}

impl AminoAcidCounts {
    ///
    /// Count the alphabet letters of `sequence`; anything else is ignored.
    ///
    pub fn from_sequence(sequence: &str) -> Self {
        let mut counts = AminoAcidCounts::default();
        counts.add_sequence(sequence);
        counts
    }

    pub fn add_sequence(&mut self, sequence: &str) {
        for c in sequence.chars() {
            if let Some(i) = AMINO_ACIDS.iter().position(|&aa| aa == c) {
                self.counts[i] += 1;
            }
        }
    }

    pub fn get(&self, amino_acid: char) -> u64 {
        AMINO_ACIDS
            .iter()
            .position(|&aa| aa == amino_acid)
            .map(|i| self.counts[i])
            .unwrap_or(0)
    }

    /// Sum over the whole alphabet.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// (amino acid, count) pairs in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        AMINO_ACIDS.iter().copied().zip(self.counts.iter().copied())
    }
}

impl AddAssign for AminoAcidCounts {
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.counts.iter_mut().zip(other.counts) {
            *a += b;
        }
    }
}

impl<'a> FromIterator<&'a str> for AminoAcidCounts {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut counts = AminoAcidCounts::default();
        for sequence in iter {
            counts.add_sequence(sequence);
        }
        counts
    }
}

///
/// Concatenate the residues covered by `spans` (1-based, inclusive).
///
/// Spans reaching past the end of the sequence are clipped to it.
///
pub fn extract_region_sequence(sequence: &str, spans: &[CodonSpan]) -> String {
    let residues: Vec<char> = sequence.chars().collect();
    let mut region = String::new();

    for span in spans {
        let start = (span.start.saturating_sub(1) as usize).min(residues.len());
        let end = (span.end as usize).min(residues.len());
        if end < span.end as usize {
            warn!(
                "Span {} reaches past the sequence end ({} residues)",
                span,
                residues.len()
            );
        }
        region.extend(&residues[start..end.max(start)]);
    }

    region
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_count_sequence() {
        let counts = AminoAcidCounts::from_sequence("MAGGA*Bx");
        assert_eq!(counts.get('A'), 2);
        assert_eq!(counts.get('G'), 2);
        assert_eq!(counts.get('M'), 1);
        // '*', 'B' and lowercase letters are outside the alphabet
        assert_eq!(counts.total(), 5);
    }

    #[rstest]
    fn test_counts_accumulate() {
        let mut counts: AminoAcidCounts = ["AAX", "GX"].into_iter().collect();
        counts += AminoAcidCounts::from_sequence("W");

        assert_eq!(counts.get('X'), 2);
        assert_eq!(counts.get('W'), 1);
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.iter().count(), AMINO_ACIDS.len());
    }

    #[rstest]
    #[case(vec![CodonSpan::new(1, 3)], "MAG")]
    #[case(vec![CodonSpan::new(2, 2), CodonSpan::new(5, 6)], "AKL")]
    #[case(vec![CodonSpan::new(5, 40)], "KL")]
    #[case(vec![CodonSpan::new(30, 40)], "")]
    fn test_extract_region_sequence(#[case] spans: Vec<CodonSpan>, #[case] expected: &str) {
        assert_eq!(extract_region_sequence("MAGTKL", &spans), expected);
    }
}

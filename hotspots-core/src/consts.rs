/// Coordinate column present in every score table.
pub const CODON_INDEX_COLUMN: &str = "CodonIndex";

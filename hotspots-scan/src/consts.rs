/// Sub directory of each chromosome folder that holds the per-gene tables.
pub const SCORES_DIR: &str = "scores";
pub const SCORE_FILE_PATTERN: &str = "*.tsv.gz";

pub const DEFAULT_CLUSTER_LHR: &str = "001";
pub const DEFAULT_HOTSPOT_LHR: &str = "002";

/// A hotspot needs at least one YES run this long.
pub const DEFAULT_MIN_RUN: u32 = 5;
/// Consecutive NO codons tolerated inside a hotspot.
pub const DEFAULT_MAX_GAP: u32 = 2;

pub const PEPTIDES_COLUMN: &str = "Peptides";

pub const DEFAULT_CHROMOSOMES: [&str; 24] = [
    "chr1", "chr2", "chr3", "chr4", "chr5", "chr6", "chr7", "chr8", "chr9", "chr10", "chr11",
    "chr12", "chr13", "chr14", "chr15", "chr16", "chr17", "chr18", "chr19", "chr20", "chr21",
    "chr22", "chrX", "chrY",
];

pub fn flag_column(lhr: &str) -> String {
    format!("Hotspot_u_nmers{}", lhr)
}

/// Fraction column read by the cluster step, e.g. `Fraction_u_pnmers001`.
pub fn cluster_score_column(lhr: &str) -> String {
    format!("Fraction_u_pnmers{}", lhr)
}

/// Fraction column read by the hotspot step, e.g. `Fraction_u_pnmers_002`.
pub fn hotspot_score_column(lhr: &str) -> String {
    format!("Fraction_u_pnmers_{}", lhr)
}

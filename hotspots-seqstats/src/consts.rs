/// Amino-acid alphabet counted in region and proteome sequences, in report order.
pub const AMINO_ACIDS: [char; 21] = [
    'G', 'A', 'V', 'L', 'I', 'T', 'S', 'M', 'C', 'P', 'F', 'Y', 'W', 'H', 'K', 'R', 'D', 'E',
    'N', 'Q', 'X',
];

pub const GENE_COLUMN: &str = "Gene";
pub const TRANSCRIPT_COLUMN: &str = "Transcript";
pub const HOTSPOT_COORD_COLUMN: &str = "Htspt_coord";
pub const AMINO_ACIDS_COLUMN: &str = "AminoAcids";
pub const SEQUENCE_COLUMN: &str = "Sequence";
pub const DISORDER_COLUMN: &str = "Annot_description";
pub const CDS_LENGTH_COLUMN: &str = "CDS_aa";

pub const DEFAULT_CONFIDENCE: f64 = 0.95;
pub const DEFAULT_ALPHA: f64 = 0.05;

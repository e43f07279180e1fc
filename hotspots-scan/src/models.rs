use std::path::Path;

use serde::Serialize;

use hotspots_core::Result;
use hotspots_core::utils::{TsvRow, write_tsv_rows};

use crate::consts::{
    DEFAULT_CHROMOSOMES, PEPTIDES_COLUMN, cluster_score_column, flag_column, hotspot_score_column,
};
use crate::scanner::{ClusterScanner, HotspotScanner, ScanMode};

/// Settings for one scan over a directory of score tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub mode: ScanMode,
    /// YES/NO column used to build regions.
    pub flag_column: String,
    /// Column averaged over each region.
    pub score_column: String,
    /// Column summed over each cluster (cluster mode only).
    pub sum_column: Option<String>,
    pub chromosomes: Vec<String>,
}

impl ScanConfig {
    ///
    /// Cluster scan reading `Hotspot_u_nmers<lhr>`, `Fraction_u_pnmers<lhr>`
    /// and `Peptides`.
    ///
    pub fn cluster(lhr: &str) -> Self {
        ScanConfig {
            mode: ScanMode::Cluster(ClusterScanner),
            flag_column: flag_column(lhr),
            score_column: cluster_score_column(lhr),
            sum_column: Some(PEPTIDES_COLUMN.to_string()),
            chromosomes: default_chromosomes(),
        }
    }

    ///
    /// Hotspot scan reading `Hotspot_u_nmers<lhr>` and `Fraction_u_pnmers_<lhr>`.
    ///
    pub fn hotspot(lhr: &str, scanner: HotspotScanner) -> Self {
        ScanConfig {
            mode: ScanMode::Hotspot(scanner),
            flag_column: flag_column(lhr),
            score_column: hotspot_score_column(lhr),
            sum_column: None,
            chromosomes: default_chromosomes(),
        }
    }

    ///
    /// Score columns to load, the averaged column first.
    ///
    pub fn score_columns(&self) -> Vec<&str> {
        let mut columns = vec![self.score_column.as_str()];
        if let Some(sum) = &self.sum_column {
            columns.push(sum.as_str());
        }
        columns
    }
}

fn default_chromosomes() -> Vec<String> {
    DEFAULT_CHROMOSOMES.iter().map(|c| c.to_string()).collect()
}

/// One line of the cluster table: all clusters of one length in one gene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterRow {
    #[serde(rename = "Chromosome")]
    pub chromosome: String,
    #[serde(rename = "Gene")]
    pub gene: String,
    #[serde(rename = "Transcript")]
    pub transcript: String,
    #[serde(rename = "Gene_Length")]
    pub gene_length: usize,
    #[serde(rename = "Num_Clusters")]
    pub num_clusters: usize,
    #[serde(rename = "Length_Clusters")]
    pub length_clusters: u32,
    #[serde(rename = "Codon_coordinates")]
    pub codon_coordinates: String,
    #[serde(rename = "Peptides")]
    pub peptides: String,
    #[serde(rename = "Fraction_mean")]
    pub fraction_mean: String,
    #[serde(rename = "Fraction_std")]
    pub fraction_std: String,
}

impl TsvRow for ClusterRow {
    const HEADER: &'static [&'static str] = &[
        "Chromosome",
        "Gene",
        "Transcript",
        "Gene_Length",
        "Num_Clusters",
        "Length_Clusters",
        "Codon_coordinates",
        "Peptides",
        "Fraction_mean",
        "Fraction_std",
    ];
}

/// One line of the hotspot table: a single hotspot region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotRow {
    #[serde(rename = "Chromosome")]
    pub chromosome: String,
    #[serde(rename = "Gene")]
    pub gene: String,
    #[serde(rename = "Transcript")]
    pub transcript: String,
    #[serde(rename = "Gene_len")]
    pub gene_len: usize,
    #[serde(rename = "Htspt_len")]
    pub htspt_len: u32,
    #[serde(rename = "Htspt_coord")]
    pub htspt_coord: String,
    #[serde(rename = "Codon_GAP")]
    pub codon_gap: String,
    #[serde(rename = "Mean_fracc")]
    pub mean_fracc: String,
}

impl TsvRow for HotspotRow {
    const HEADER: &'static [&'static str] = &[
        "Chromosome",
        "Gene",
        "Transcript",
        "Gene_len",
        "Htspt_len",
        "Htspt_coord",
        "Codon_GAP",
        "Mean_fracc",
    ];
}

/// Rows produced by a scan, typed by mode.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryRows {
    Clusters(Vec<ClusterRow>),
    Hotspots(Vec<HotspotRow>),
}

impl SummaryRows {
    pub fn empty(mode: &ScanMode) -> Self {
        match mode {
            ScanMode::Cluster(_) => SummaryRows::Clusters(vec![]),
            ScanMode::Hotspot(_) => SummaryRows::Hotspots(vec![]),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SummaryRows::Clusters(rows) => rows.len(),
            SummaryRows::Hotspots(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Append rows of the same kind. Rows of the other kind are ignored.
    ///
    pub fn append(&mut self, other: SummaryRows) {
        match (self, other) {
            (SummaryRows::Clusters(rows), SummaryRows::Clusters(mut more)) => {
                rows.append(&mut more)
            }
            (SummaryRows::Hotspots(rows), SummaryRows::Hotspots(mut more)) => {
                rows.append(&mut more)
            }
            _ => {}
        }
    }

    ///
    /// Stable sort by gene, then region length ascending.
    ///
    pub fn sort(&mut self) {
        match self {
            SummaryRows::Clusters(rows) => rows.sort_by(|a, b| {
                a.gene
                    .cmp(&b.gene)
                    .then(a.length_clusters.cmp(&b.length_clusters))
            }),
            SummaryRows::Hotspots(rows) => {
                rows.sort_by(|a, b| a.gene.cmp(&b.gene).then(a.htspt_len.cmp(&b.htspt_len)))
            }
        }
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        match self {
            SummaryRows::Clusters(rows) => write_tsv_rows(rows, path),
            SummaryRows::Hotspots(rows) => write_tsv_rows(rows, path),
        }
    }
}

use std::fs::{self, File};
use std::io::{BufRead, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use rstest::*;
use tempfile::{TempDir, tempdir};

use hotspots_core::utils::get_dynamic_reader;
use hotspots_scan::{HotspotScanner, ScanConfig, SummaryRows, run_scan};
use hotspots_seqstats::tables::{read_hotspot_spans_by_gene, read_hotspot_spans_by_transcript};

fn write_gz(path: &Path, text: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

/// Score table in the layout of the upstream pipeline, one row per flag.
fn score_table(flags: &str) -> String {
    let mut text = String::from(
        "CodonIndex\tHotspot_u_nmers001\tHotspot_u_nmers002\tPeptides\tFraction_u_pnmers001\tFraction_u_pnmers_002\n",
    );
    for (i, c) in flags.chars().enumerate() {
        let flag = if c == 'Y' { "YES" } else { "NO" };
        text.push_str(&format!("{}\t{flag}\t{flag}\t1\t0.5\t0.5\n", i + 1));
    }
    text
}

#[fixture]
fn input_dir() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    write_gz(
        &root.join("chr1/scores/ZNF1_ENST0001.tsv.gz"),
        &score_table("NYYYNY"),
    );
    write_gz(
        &root.join("chr1/scores/ABC1_ENST0002.tsv.gz"),
        &score_table("YYYYYNYYYN"),
    );
    // lacks every flag column: skipped
    write_gz(
        &root.join("chr2/scores/NOFLAG_ENST0003.tsv.gz"),
        "CodonIndex\tPeptides\n1\t0\n",
    );
    // unparsable coordinate: rejected
    write_gz(
        &root.join("chrX/scores/BAD_ENST0004.tsv.gz"),
        &score_table("YY").replace("\n2\t", "\ntwo\t"),
    );

    dir
}

mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn read_lines(path: &Path) -> Vec<String> {
        get_dynamic_reader(path)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect()
    }

    #[rstest]
    fn test_cluster_scan(input_dir: TempDir) {
        let config = ScanConfig::cluster("001");
        let report = run_scan(input_dir.path(), &config, Some(2)).unwrap();

        assert_eq!(report.files, 4);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.rejected.len(), 1);

        let SummaryRows::Clusters(rows) = &report.rows else {
            panic!("cluster scan produced hotspot rows");
        };

        // sorted by gene, then cluster length
        let keys: Vec<(&str, u32)> = rows
            .iter()
            .map(|r| (r.gene.as_str(), r.length_clusters))
            .collect();
        assert_eq!(keys, vec![("ABC1", 3), ("ABC1", 5), ("ZNF1", 1), ("ZNF1", 3)]);

        let znf_short = &rows[2];
        assert_eq!(znf_short.codon_coordinates, "6-6");
        assert_eq!(znf_short.chromosome, "chr1");
        assert_eq!(znf_short.gene_length, 6);
    }

    #[rstest]
    fn test_hotspot_scan_writes_table(input_dir: TempDir) {
        let config = ScanConfig::hotspot("002", HotspotScanner::default());
        let report = run_scan(input_dir.path(), &config, None).unwrap();

        let out = input_dir.path().join("out/hotspots.tsv.gz");
        report.rows.write_to_file(&out).unwrap();

        let lines = read_lines(&out);
        assert_eq!(
            lines[0],
            "Chromosome\tGene\tTranscript\tGene_len\tHtspt_len\tHtspt_coord\tCodon_GAP\tMean_fracc"
        );
        assert_eq!(lines[1], "chr1\tABC1\tENST0002\t10\t9\t1-9\t6\t0.5");
        assert_eq!(lines.len(), 2);
    }

    #[rstest]
    fn test_scan_is_repeatable(input_dir: TempDir) {
        let config = ScanConfig::hotspot("002", HotspotScanner::default());
        let first = run_scan(input_dir.path(), &config, Some(1)).unwrap();
        let second = run_scan(input_dir.path(), &config, Some(4)).unwrap();

        assert_eq!(first.rows, second.rows);
    }

    #[rstest]
    fn test_chromosome_selection(input_dir: TempDir) {
        let mut config = ScanConfig::cluster("001");
        config.chromosomes = vec!["chrX".to_string()];
        let report = run_scan(input_dir.path(), &config, None).unwrap();

        assert_eq!(report.files, 1);
        assert!(report.rows.is_empty());
        assert_eq!(report.rejected.len(), 1);
    }

    #[rstest]
    fn test_empty_hotspot_table_is_readable(input_dir: TempDir) {
        // chrX holds only a rejected table, so no hotspot is found
        let mut config = ScanConfig::hotspot("002", HotspotScanner::default());
        config.chromosomes = vec!["chrX".to_string()];
        let report = run_scan(input_dir.path(), &config, None).unwrap();
        assert!(report.rows.is_empty());

        let out = input_dir.path().join("out/hotspots.tsv");
        report.rows.write_to_file(&out).unwrap();

        assert_eq!(
            read_lines(&out),
            vec!["Chromosome\tGene\tTranscript\tGene_len\tHtspt_len\tHtspt_coord\tCodon_GAP\tMean_fracc"]
        );
        assert!(read_hotspot_spans_by_transcript(&out).unwrap().is_empty());
        assert!(read_hotspot_spans_by_gene(&out).unwrap().is_empty());
    }

    #[rstest]
    fn test_empty_cluster_table_keeps_header(input_dir: TempDir) {
        let out = input_dir.path().join("out/clusters.tsv.gz");
        SummaryRows::Clusters(vec![]).write_to_file(&out).unwrap();

        assert_eq!(
            read_lines(&out),
            vec![
                "Chromosome\tGene\tTranscript\tGene_Length\tNum_Clusters\tLength_Clusters\t\
                 Codon_coordinates\tPeptides\tFraction_mean\tFraction_std"
            ]
        );
    }
}

use std::path::{Path, PathBuf};

use crate::errors::HotspotsError;

///
/// A per-gene score table on disk together with the identifiers that are
/// encoded in its location: `<chromosome>/scores/<GENE>_<TRANSCRIPT>.tsv.gz`.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct GeneFile {
    pub path: PathBuf,
    pub gene: String,
    pub transcript: String,
    pub chromosome: String,
}

impl GeneFile {
    ///
    /// Create a new [GeneFile], taking gene and transcript from the file name.
    ///
    /// # Arguments:
    /// - path: path to the score table
    /// - chromosome: chromosome directory the table was found under
    pub fn new(path: &Path, chromosome: &str) -> Result<Self, HotspotsError> {
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .ok_or_else(|| HotspotsError::InvalidFileName(path.display().to_string()))?;

        let (gene, transcript) = split_gene_transcript(file_name)
            .ok_or_else(|| HotspotsError::InvalidFileName(file_name.to_string()))?;

        Ok(GeneFile {
            path: path.to_path_buf(),
            gene,
            transcript,
            chromosome: chromosome.to_string(),
        })
    }
}

///
/// `BRCA1_ENST00000357654.tsv.gz` -> (`BRCA1`, `ENST00000357654`)
///
fn split_gene_transcript(file_name: &str) -> Option<(String, String)> {
    let mut parts = file_name.split('_');
    let gene = parts.next()?;
    let transcript = parts.next()?.split('.').next()?;

    if gene.is_empty() || transcript.is_empty() {
        return None;
    }

    Some((gene.to_string(), transcript.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("BRCA1_ENST00000357654.tsv.gz", "BRCA1", "ENST00000357654")]
    #[case("TP53_ENST00000269305_extra.tsv", "TP53", "ENST00000269305")]
    #[case("A_B", "A", "B")]
    fn test_gene_file_names(#[case] name: &str, #[case] gene: &str, #[case] transcript: &str) {
        let path = Path::new("/data/chr17/scores").join(name);
        let gf = GeneFile::new(&path, "chr17").unwrap();

        assert_eq!(gf.gene, gene);
        assert_eq!(gf.transcript, transcript);
        assert_eq!(gf.chromosome, "chr17");
    }

    #[rstest]
    #[case("nounderscore.tsv.gz")]
    #[case("_ENST1.tsv.gz")]
    #[case("GENE_.tsv.gz")]
    fn test_gene_file_bad_names(#[case] name: &str) {
        let path = Path::new("/data/chr1/scores").join(name);
        assert!(matches!(
            GeneFile::new(&path, "chr1"),
            Err(HotspotsError::InvalidFileName(_))
        ));
    }
}

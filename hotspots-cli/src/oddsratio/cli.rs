use clap::{Command, arg, value_parser};

pub const ODDSRATIO_CMD: &str = "oddsratio";
pub const DEFAULT_OUT: &str = "odds_ratios.tsv";

pub fn create_oddsratio_cli() -> Command {
    Command::new(ODDSRATIO_CMD)
        .about("Amino-acid odds ratios of hotspot regions against the proteome.")
        .arg(
            arg!(--hotspots <HOTSPOTS>)
                .required(true)
                .help("Hotspot table with Transcript and Htspt_coord columns"),
        )
        .arg(
            arg!(--sequences <SEQUENCES>)
                .required(true)
                .help("Table with Transcript and AminoAcids columns"),
        )
        .arg(
            arg!(--proteome <PROTEOME>)
                .required(true)
                .help("Proteome table with a Sequence column"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output table [default: odds_ratios.tsv]"),
        )
        .arg(
            arg!(--confidence <CONFIDENCE>)
                .required(false)
                .value_parser(value_parser!(f64))
                .help("Confidence level of the intervals [default: 0.95]"),
        )
}

use clap::{Arg, Command, arg, value_parser};

pub const DISORDER_CMD: &str = "disorder";

pub fn create_disorder_cli() -> Command {
    Command::new(DISORDER_CMD)
        .about("Test whether disordered regions are enriched in hotspot regions.")
        .arg(
            arg!(--disorder <DISORDER>)
                .required(true)
                .help("Disorder annotations with Gene and Annot_description columns"),
        )
        .arg(
            arg!(--hotspots <HOTSPOTS>)
                .required(true)
                .help("Hotspot table with Gene and Htspt_coord columns"),
        )
        .arg(
            arg!(--proteome <PROTEOME>)
                .required(true)
                .help("Proteome table with a CDS_aa column"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output JSON path (default: stdout)"),
        )
        .arg(
            Arg::new("per-gene")
                .long("per-gene")
                .required(false)
                .help("Also write per-gene codon counts to this table"),
        )
        .arg(
            arg!(--alpha <ALPHA>)
                .required(false)
                .value_parser(value_parser!(f64))
                .help("Significance level of the confidence intervals [default: 0.05]"),
        )
}

use clap::{Arg, Command, arg, value_parser};

use hotspots_scan::consts::{DEFAULT_CLUSTER_LHR, DEFAULT_HOTSPOT_LHR};

pub const CLUSTER_CMD: &str = "cluster";
pub const HOTSPOT_CMD: &str = "hotspot";

/// Arguments shared by both scan modes.
fn scan_args(command: Command, default_lhr: &'static str) -> Command {
    command
        .arg(
            Arg::new("input")
                .required(true)
                .help("Folder with one <chromosome>/scores/ sub folder of per-gene tables"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .help("Output table (gzip-compressed when ending in .gz)"),
        )
        .arg(
            Arg::new("lhr")
                .default_value(default_lhr)
                .help("LHR threshold label selecting the flag and score columns"),
        )
        .arg(
            Arg::new("flag-column")
                .long("flag-column")
                .help("YES/NO flag column (default: Hotspot_u_nmers<LHR>)"),
        )
        .arg(
            Arg::new("score-column")
                .long("score-column")
                .help("Score column summarized per region"),
        )
        .arg(
            arg!(--chromosomes <CHROMOSOMES>)
                .value_delimiter(',')
                .help("Comma-separated chromosome folders to visit (default: chr1-chr22, chrX, chrY)"),
        )
        .arg(
            arg!(--threads <THREADS>)
                .value_parser(value_parser!(usize))
                .help("Worker threads (default: one per core)"),
        )
}

pub fn create_cluster_cli() -> Command {
    let command = Command::new(CLUSTER_CMD)
        .about("Report every run of flagged codons, grouped by run length per gene.")
        .arg(
            Arg::new("sum-column")
                .long("sum-column")
                .help("Column summed per cluster (default: Peptides)"),
        );
    scan_args(command, DEFAULT_CLUSTER_LHR)
}

pub fn create_hotspot_cli() -> Command {
    let command = Command::new(HOTSPOT_CMD)
        .about("Report hotspots: flagged runs bridged over short unflagged gaps.")
        .arg(
            Arg::new("min-run")
                .long("min-run")
                .value_parser(value_parser!(u32))
                .help("Minimum length of the longest flagged run of a hotspot [default: 5]"),
        )
        .arg(
            Arg::new("max-gap")
                .long("max-gap")
                .value_parser(value_parser!(u32))
                .help("Maximum number of consecutive unflagged codons inside a hotspot [default: 2]"),
        );
    scan_args(command, DEFAULT_HOTSPOT_LHR)
}

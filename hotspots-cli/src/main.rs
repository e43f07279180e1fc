mod scan {
    pub mod cli;
    pub mod handlers;
}
mod oddsratio {
    pub mod cli;
    pub mod handlers;
}
mod disorder {
    pub mod cli;
    pub mod handlers;
}

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "hotspots";
    pub const BIN_NAME: &str = "hotspots";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Detect codon clusters and hotspots in per-gene score tables and characterize the regions found.")
        .subcommand_required(true)
        .subcommand(scan::cli::create_cluster_cli())
        .subcommand(scan::cli::create_hotspot_cli())
        .subcommand(oddsratio::cli::create_oddsratio_cli())
        .subcommand(disorder::cli::create_disorder_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // CLUSTERS
        //
        Some((scan::cli::CLUSTER_CMD, matches)) => {
            scan::handlers::run_cluster(matches)?;
        }

        //
        // HOTSPOTS
        //
        Some((scan::cli::HOTSPOT_CMD, matches)) => {
            scan::handlers::run_hotspot(matches)?;
        }

        //
        // AMINO ACID ODDS RATIOS
        //
        Some((oddsratio::cli::ODDSRATIO_CMD, matches)) => {
            oddsratio::handlers::run_oddsratio(matches)?;
        }

        //
        // DISORDER OVERLAP
        //
        Some((disorder::cli::DISORDER_CMD, matches)) => {
            disorder::handlers::run_disorder(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

mod compare;
mod listing;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "gcvit";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Binned same/diff/total genotype comparison reports over configured VCF datasets.")
        .subcommand_required(true)
        .subcommand(compare::cli::create_compare_cli())
        .subcommand(listing::cli::create_list_cli())
        .subcommand(listing::cli::create_samples_cli())
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // COMPARE
        //
        Some((compare::cli::COMPARE_CMD, matches)) => {
            compare::handlers::run_compare(matches)?;
        }

        //
        // DATASET LISTINGS
        //
        Some((listing::cli::LIST_CMD, matches)) => {
            listing::handlers::run_list(matches)?;
        }
        Some((listing::cli::SAMPLES_CMD, matches)) => {
            listing::handlers::run_samples(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

use clap::{Arg, ArgAction, Command, arg};

pub const COMPARE_CMD: &str = "compare";

pub fn create_compare_cli() -> Command {
    Command::new(COMPARE_CMD)
        .about("Compare one reference sample's genotype calls against comparison samples, binned over position windows, and emit GFF3.")
        .arg(arg!(--config <config> "Path to the dataset catalog YAML file").required(true))
        .arg(arg!(--reference <reference> "Reference series as <dataset>:<sample>").required(true))
        .arg(
            Arg::new("comparison")
                .long("comparison")
                .help("Comparison series as <dataset>:<sample>; repeatable")
                .action(ArgAction::Append)
                .required(true),
        )
        .arg(arg!(--bin <bin> "Nominal bin size in bases (default 500000)"))
        .arg(arg!(--output <output> "Output GFF file (stdout when omitted)"))
}

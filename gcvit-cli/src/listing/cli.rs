use clap::{Arg, Command, arg};

pub const LIST_CMD: &str = "list";
pub const SAMPLES_CMD: &str = "samples";

pub fn create_list_cli() -> Command {
    Command::new(LIST_CMD)
        .about("List the configured datasets as JSON.")
        .arg(arg!(--config <config> "Path to the dataset catalog YAML file").required(true))
}

pub fn create_samples_cli() -> Command {
    Command::new(SAMPLES_CMD)
        .about("List one dataset's sample ids as JSON.")
        .arg(arg!(--config <config> "Path to the dataset catalog YAML file").required(true))
        .arg(Arg::new("dataset").help("Dataset id to list samples for").required(true))
}

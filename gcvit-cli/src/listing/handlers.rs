use std::io;
use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use serde::Serialize;

use gcvit_io::DatasetCatalog;

/// One `{value, label}` entry, the shape the original gcvit UI consumes.
#[derive(Serialize)]
struct Choice {
    value: String,
    label: String,
}

fn load_catalog(matches: &ArgMatches) -> Result<DatasetCatalog> {
    let config = matches
        .get_one::<String>("config")
        .expect("A path to a catalog config file is required.");
    Ok(DatasetCatalog::from_config_file(Path::new(config))?)
}

pub fn run_list(matches: &ArgMatches) -> Result<()> {
    let catalog = load_catalog(matches)?;

    let choices: Vec<Choice> = catalog
        .datasets()
        .map(|dataset| Choice {
            value: dataset.id.clone(),
            label: dataset.name.clone(),
        })
        .collect();

    serde_json::to_writer(io::stdout().lock(), &choices)?;
    println!();
    Ok(())
}

pub fn run_samples(matches: &ArgMatches) -> Result<()> {
    let catalog = load_catalog(matches)?;
    let dataset = matches
        .get_one::<String>("dataset")
        .expect("A dataset id is required.");

    let dataset = catalog.resolve(dataset)?;
    let choices: Vec<Choice> = dataset
        .samples
        .iter()
        .map(|sample| Choice {
            value: sample.clone(),
            label: sample.clone(),
        })
        .collect();

    serde_json::to_writer(io::stdout().lock(), &choices)?;
    println!();
    Ok(())
}

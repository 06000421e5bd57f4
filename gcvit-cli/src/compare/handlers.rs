use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use gcvit_core::models::SampleSpec;
use gcvit_io::{CompareRequest, DatasetCatalog};

pub fn run_compare(matches: &ArgMatches) -> Result<()> {
    let config = matches
        .get_one::<String>("config")
        .expect("A path to a catalog config file is required.");

    let reference = matches
        .get_one::<String>("reference")
        .expect("A reference series is required.");

    let comparisons = matches
        .get_many::<String>("comparison")
        .expect("At least one comparison series is required.");

    let bin_size = matches
        .get_one::<String>("bin")
        .map(|b| b.parse::<u64>())
        .transpose()
        .context("Bin size must be a positive integer.")?;

    let catalog = DatasetCatalog::from_config_file(Path::new(config))?;
    let request = CompareRequest {
        reference: reference.parse::<SampleSpec>()?,
        comparisons: comparisons
            .map(|s| s.parse::<SampleSpec>())
            .collect::<std::result::Result<Vec<_>, _>>()?,
        bin_size,
    };

    match matches.get_one::<String>("output") {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Couldn't create output file: {:?}", path))?;
            gcvit_io::run_compare(&catalog, &request, BufWriter::new(file))?;
        }
        None => {
            gcvit_io::run_compare(&catalog, &request, io::stdout().lock())?;
        }
    }

    Ok(())
}

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use gcvit_core::errors::{GcvitError, Result};

use crate::vcf::VcfReader;

#[derive(Debug, Deserialize)]
struct CatalogConfig {
    datasets: Vec<DatasetConfig>,
}

#[derive(Debug, Deserialize)]
struct DatasetConfig {
    id: String,
    name: String,
    location: PathBuf,
    #[serde(default)]
    gzip: bool,
}

///
/// One configured dataset: display name, variant file location, and the
/// sample ids its header declares.
///
#[derive(Debug, Clone)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    pub location: PathBuf,
    pub gzip: bool,
    pub samples: Vec<String>,
}

///
/// The catalog of configured datasets. Built explicitly at startup from a
/// YAML config file; sample ids are populated by reading each file's header
/// once, so a bad config fails the whole run before any request is served.
///
#[derive(Debug, Clone, Default)]
pub struct DatasetCatalog {
    datasets: BTreeMap<String, Dataset>,
}

impl DatasetCatalog {
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: CatalogConfig = serde_yaml::from_str(&text).map_err(|e| {
            GcvitError::Config(format!("cannot parse catalog config {:?}: {}", path, e))
        })?;

        let mut datasets = BTreeMap::new();
        for entry in config.datasets {
            let reader = VcfReader::open(&entry.location, entry.gzip).map_err(|e| {
                GcvitError::Config(format!(
                    "cannot read header of dataset {:?} at {:?}: {}",
                    entry.id, entry.location, e
                ))
            })?;
            let samples = reader.header().samples.clone();

            info!(
                "catalog: dataset {:?} with {} samples",
                entry.id,
                samples.len()
            );
            datasets.insert(
                entry.id.clone(),
                Dataset {
                    id: entry.id,
                    name: entry.name,
                    location: entry.location,
                    gzip: entry.gzip,
                    samples,
                },
            );
        }

        Ok(Self { datasets })
    }

    pub fn resolve(&self, id: &str) -> Result<&Dataset> {
        self.datasets
            .get(id)
            .ok_or_else(|| GcvitError::Config(format!("unknown dataset {:?}", id)))
    }

    /// All datasets, ordered by id.
    pub fn datasets(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.values()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

//! # Input/Output collaborators for the gcvit engine.
//!
//! Real implementations of the seams `gcvit-core` defines: a dataset
//! catalog built from a YAML config file, a streaming VCF reader for plain
//! or gzip'd files, and a GFF3 feature writer. Also hosts
//! [`compare::run_compare`], the end-to-end entry point the CLI calls.
pub mod catalog;
pub mod compare;
pub mod gff;
pub mod vcf;

// re-expose the main entry points
pub use catalog::{Dataset, DatasetCatalog};
pub use compare::{CompareRequest, run_compare};
pub use gff::GffWriter;
pub use vcf::{GenotypeStream, VcfHeader, VcfReader};

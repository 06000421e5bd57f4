//! # Core engine for binned genotype comparison.
//!
//! Consumes a stream of variant sites (sorted by contig and ascending
//! position), compares one reference sample's genotype call against one or
//! more comparison samples, and aggregates same/diff/total counts over
//! fixed-width, per-contig-normalized position bins. Each closed bin is
//! emitted as three annotated interval features.
//!
//! The variant source and the feature sink are trait seams
//! ([`engine::SiteSource`], [`engine::FeatureWrite`]); `gcvit-io` provides
//! the VCF and GFF implementations.
pub mod bins;
pub mod consts;
pub mod contigs;
pub mod counts;
pub mod engine;
pub mod errors;
pub mod models;

// re-expose core types
pub use bins::{BinState, ClosedBin};
pub use consts::*;
pub use contigs::ContigLengths;
pub use counts::{Accumulator, CounterSet};
pub use engine::{CompareEngine, FeatureWrite, SiteSource};
pub use errors::{GcvitError, Result};
pub use models::{Feature, FeatureKind, SampleSpec, VariantSite};

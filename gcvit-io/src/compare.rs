use std::io::Write;

use log::info;

use gcvit_core::engine::CompareEngine;
use gcvit_core::errors::{GcvitError, Result};
use gcvit_core::models::SampleSpec;

use crate::catalog::DatasetCatalog;
use crate::gff::GffWriter;
use crate::vcf::{GenotypeStream, VcfReader};

///
/// One comparison request: the reference series, the comparison series
/// measured against it, and an optional nominal bin size.
///
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub reference: SampleSpec,
    pub comparisons: Vec<SampleSpec>,
    pub bin_size: Option<u64>,
}

/// Run one comparison end to end: resolve the reference dataset, stream its
/// variant file once, and write the binned same/diff/total features as GFF3
/// to `out`.
///
/// Every comparison series must come from the reference's dataset; only
/// that one file is read, so a cross-dataset comparison would silently
/// count nothing and is rejected up front instead.
pub fn run_compare<W: Write>(
    catalog: &DatasetCatalog,
    request: &CompareRequest,
    out: W,
) -> Result<()> {
    if request.comparisons.is_empty() {
        return Err(GcvitError::Config(
            "at least one comparison sample is required".to_string(),
        ));
    }
    for spec in &request.comparisons {
        if spec.dataset != request.reference.dataset {
            return Err(GcvitError::Config(format!(
                "comparison {} is not from the reference dataset {:?}",
                spec, request.reference.dataset
            )));
        }
    }

    let dataset = catalog.resolve(&request.reference.dataset)?;
    info!(
        "comparing {} against {} sample(s) in dataset {:?}",
        request.reference,
        request.comparisons.len(),
        dataset.id
    );

    let reader = VcfReader::open(&dataset.location, dataset.gzip)?;
    let lengths = reader.header().contig_lengths();

    let comparison_ids: Vec<String> = request
        .comparisons
        .iter()
        .map(|spec| spec.sample.clone())
        .collect();
    let mut stream = GenotypeStream::new(reader, &request.reference.sample, &comparison_ids)?;

    let mut writer = GffWriter::new(out)?;
    CompareEngine::new(
        lengths,
        &request.reference.sample,
        &comparison_ids,
        request.bin_size,
    )
    .run(&mut stream, &mut writer)
}

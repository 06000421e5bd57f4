use log::{debug, info};

use crate::bins::{BinState, ClosedBin};
use crate::consts::{DEFAULT_BIN_SIZE, FEATURE_SOURCE};
use crate::contigs::ContigLengths;
use crate::counts::{Accumulator, CounterSet};
use crate::errors::Result;
use crate::models::{Feature, FeatureKind, VariantSite};

///
/// Lazy source of variant sites. Implementations yield records one at a
/// time in sorted order (ascending position within a contig, contigs never
/// interleaved) and must surface malformed input as an error rather than
/// end-of-stream.
///
pub trait SiteSource {
    fn next_site(&mut self) -> Result<Option<VariantSite>>;
}

///
/// Sink for emitted interval features. Failures are propagated to the
/// caller, never retried.
///
pub trait FeatureWrite {
    fn write_feature(&mut self, feature: &Feature) -> Result<()>;
}

impl FeatureWrite for Vec<Feature> {
    fn write_feature(&mut self, feature: &Feature) -> Result<()> {
        self.push(feature.clone());
        Ok(())
    }
}

///
/// The single-pass comparison engine. Owns the bin state and the counter
/// sets for exactly one run; consumes itself on [`CompareEngine::run`].
///
pub struct CompareEngine {
    lengths: ContigLengths,
    state: BinState,
    accumulator: Accumulator,
    sites: u64,
}

impl CompareEngine {
    /// `bin_size` of `None` or 0 falls back to [`DEFAULT_BIN_SIZE`].
    pub fn new(
        lengths: ContigLengths,
        reference_id: &str,
        comparison_ids: &[String],
        bin_size: Option<u64>,
    ) -> Self {
        let nominal = match bin_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_BIN_SIZE,
        };

        Self {
            lengths,
            state: BinState::new(nominal),
            accumulator: Accumulator::new(reference_id, comparison_ids),
            sites: 0,
        }
    }

    /// Drive one forward pass: transition the bin state for each record
    /// (flushing the closed bin first when the record falls outside it),
    /// then accumulate the record against the now-active bin. After clean
    /// stream exhaustion the last open bin is flushed exactly once.
    ///
    /// A source error aborts immediately and the in-progress bin is
    /// discarded rather than flushed as if complete.
    pub fn run(mut self, source: &mut dyn SiteSource, sink: &mut dyn FeatureWrite) -> Result<()> {
        while let Some(site) = source.next_site()? {
            if let Some(closed) = self.state.observe(&site.contig, site.position, &self.lengths) {
                self.flush(&closed, sink)?;
            }
            self.accumulator
                .record(site.reference_call.as_deref(), &site.comparison_calls);
            self.sites += 1;
        }

        if let Some(closed) = self.state.close(&self.lengths) {
            self.flush(&closed, sink)?;
        }

        info!("processed {} sites", self.sites);
        Ok(())
    }

    /// Emit the three features for a closed bin in fixed order (same, diff,
    /// total), then zero the counters for the next bin.
    fn flush(&mut self, bin: &ClosedBin, sink: &mut dyn FeatureWrite) -> Result<()> {
        debug!(
            "flushing bin {}.{} ({}..={})",
            bin.contig, bin.bin_index, bin.start, bin.end
        );

        for (kind, counters) in [
            (FeatureKind::Same, self.accumulator.same()),
            (FeatureKind::Diff, self.accumulator.diff()),
            (FeatureKind::Total, self.accumulator.total()),
        ] {
            sink.write_feature(&build_feature(bin, kind, counters))?;
        }

        self.accumulator.reset();
        Ok(())
    }
}

fn build_feature(bin: &ClosedBin, kind: FeatureKind, counters: &CounterSet) -> Feature {
    let mut attributes = vec![("ID".to_string(), format!("{}.{}", kind, bin.bin_index))];
    attributes.extend(
        counters
            .iter()
            .map(|(key, count)| (key.to_string(), count.to_string())),
    );

    Feature {
        seqid: bin.contig.clone(),
        source: FEATURE_SOURCE,
        kind,
        start: bin.start,
        end: bin.end,
        attributes,
    }
}

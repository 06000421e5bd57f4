use std::io::Write;

use gcvit_core::engine::FeatureWrite;
use gcvit_core::errors::{GcvitError, Result};
use gcvit_core::models::Feature;

/// GFF columns 6 and 8 when no score/phase applies.
const MISSING_FIELD: &str = ".";

///
/// Writes features as GFF3: the `##gff-version 3` pragma up front, then one
/// tab-separated feature line per record with `;`-joined `key=value`
/// attributes, in exactly the order the engine produced them.
///
pub struct GffWriter<W: Write> {
    inner: W,
}

impl<W: Write> GffWriter<W> {
    pub fn new(mut inner: W) -> Result<Self> {
        writeln!(inner, "##gff-version 3")?;
        Ok(Self { inner })
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> FeatureWrite for GffWriter<W> {
    fn write_feature(&mut self, feature: &Feature) -> Result<()> {
        let attributes = feature
            .attributes
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(";");

        writeln!(
            self.inner,
            "{}\t{}\t{}\t{}\t{}\t{}\t+\t{}\t{}",
            feature.seqid,
            feature.source,
            feature.kind,
            feature.start,
            feature.end,
            MISSING_FIELD,
            MISSING_FIELD,
            attributes,
        )
        .map_err(|e| GcvitError::Write(e.to_string()))
    }
}

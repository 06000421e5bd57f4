use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use gcvit_core::contigs::ContigLengths;
use gcvit_core::engine::SiteSource;
use gcvit_core::errors::{GcvitError, Result};
use gcvit_core::models::VariantSite;

/// One `##contig` header entry. A missing or non-numeric length attribute
/// is recorded as 0 (unknown).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contig {
    pub id: String,
    pub length: u64,
}

#[derive(Debug, Clone, Default)]
pub struct VcfHeader {
    pub contigs: Vec<Contig>,
    pub samples: Vec<String>,
}

impl VcfHeader {
    pub fn contig_lengths(&self) -> ContigLengths {
        self.contigs
            .iter()
            .map(|c| (c.id.clone(), c.length))
            .collect()
    }

    /// Column index of `sample` among the header's genotype columns.
    pub fn sample_index(&self, sample: &str) -> Option<usize> {
        self.samples.iter().position(|s| s == sample)
    }
}

/// `##contig=<ID=Gm01,length=56831624>` → (`Gm01`, 56831624).
fn parse_contig_line(line: &str) -> Option<Contig> {
    let body = line.strip_prefix("##contig=<")?;
    let body = body.strip_suffix('>').unwrap_or(body);

    let mut id = None;
    let mut length = 0;
    for entry in body.split(',') {
        match entry.split_once('=') {
            Some(("ID", value)) => id = Some(value.to_string()),
            Some(("length", value)) => length = value.parse().unwrap_or(0),
            _ => {}
        }
    }

    id.map(|id| Contig { id, length })
}

///
/// Streaming reader over one VCF file. The header (meta lines plus the
/// `#CHROM` column line) is consumed at construction; records are then
/// decoded lazily, one per [`VcfReader::next_record`] call, so the file is
/// never held in memory.
///
pub struct VcfReader<R: BufRead> {
    reader: R,
    header: VcfHeader,
    line_no: u64,
}

/// One decoded data line, with its genotype columns still raw. GT values
/// are pulled out per sample column on demand.
#[derive(Debug, Clone)]
pub struct VcfRecord {
    pub contig: String,
    pub position: u64,
    gt_index: Option<usize>,
    genotype_columns: Vec<String>,
}

impl VcfRecord {
    /// The GT string for genotype column `column`, or `None` when the
    /// record carries no GT value there.
    pub fn genotype(&self, column: usize) -> Option<&str> {
        let gt_index = self.gt_index?;
        self.genotype_columns
            .get(column)?
            .split(':')
            .nth(gt_index)
    }
}

impl VcfReader<BufReader<Box<dyn Read>>> {
    /// Open a plain or gzip'd VCF file.
    pub fn open(path: &Path, gzip: bool) -> Result<Self> {
        let file = File::open(path)?;
        let inner: Box<dyn Read> = if gzip {
            Box::new(MultiGzDecoder::new(file))
        } else {
            Box::new(file)
        };
        Self::new(BufReader::new(inner))
    }
}

impl<R: BufRead> VcfReader<R> {
    pub fn new(mut reader: R) -> Result<Self> {
        let mut contigs = Vec::new();
        let mut line_no = 0;
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(GcvitError::Read {
                    line: line_no,
                    msg: "missing #CHROM header line".to_string(),
                });
            }
            line_no += 1;
            let trimmed = line.trim_end();

            if let Some(contig) = parse_contig_line(trimmed) {
                contigs.push(contig);
            } else if trimmed.starts_with("#CHROM") {
                let samples = trimmed
                    .split('\t')
                    .skip(9)
                    .map(|s| s.to_string())
                    .collect();
                return Ok(Self {
                    reader,
                    header: VcfHeader { contigs, samples },
                    line_no,
                });
            } else if !trimmed.starts_with("##") {
                return Err(GcvitError::Read {
                    line: line_no,
                    msg: format!("unexpected line before #CHROM: {:?}", trimmed),
                });
            }
        }
    }

    pub fn header(&self) -> &VcfHeader {
        &self.header
    }

    /// Decode the next data line, or `None` at clean end of stream.
    pub fn next_record(&mut self) -> Result<Option<VcfRecord>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let trimmed = line.trim_end();
            if !trimmed.is_empty() {
                return self.parse_record(trimmed).map(Some);
            }
        }
    }

    fn parse_record(&self, line: &str) -> Result<VcfRecord> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 8 {
            return Err(GcvitError::Read {
                line: self.line_no,
                msg: format!("expected at least 8 tab-separated fields, found {}", fields.len()),
            });
        }

        let position = fields[1].parse().map_err(|_| GcvitError::Read {
            line: self.line_no,
            msg: format!("invalid position {:?}", fields[1]),
        })?;

        let gt_index = fields
            .get(8)
            .and_then(|format| format.split(':').position(|key| key == "GT"));

        Ok(VcfRecord {
            contig: fields[0].to_string(),
            position,
            gt_index,
            genotype_columns: fields
                .iter()
                .skip(9)
                .map(|s| s.to_string())
                .collect(),
        })
    }
}

///
/// Adapter from a [`VcfReader`] to the engine's [`SiteSource`]: resolves
/// the requested sample names to genotype columns once, up front, then
/// yields one [`VariantSite`] per record.
///
pub struct GenotypeStream<R: BufRead> {
    reader: VcfReader<R>,
    reference_column: usize,
    comparison_columns: Vec<(String, usize)>,
}

impl<R: BufRead> GenotypeStream<R> {
    /// Fails with a configuration error when any requested sample is not
    /// declared in the file's `#CHROM` line.
    pub fn new(
        reader: VcfReader<R>,
        reference_sample: &str,
        comparison_samples: &[String],
    ) -> Result<Self> {
        let resolve = |sample: &str| {
            reader.header().sample_index(sample).ok_or_else(|| {
                GcvitError::Config(format!("sample {:?} not present in file header", sample))
            })
        };

        let reference_column = resolve(reference_sample)?;
        let comparison_columns = comparison_samples
            .iter()
            .map(|sample| Ok((sample.clone(), resolve(sample)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            reader,
            reference_column,
            comparison_columns,
        })
    }
}

impl<R: BufRead> SiteSource for GenotypeStream<R> {
    fn next_site(&mut self) -> Result<Option<VariantSite>> {
        let record = match self.reader.next_record()? {
            Some(record) => record,
            None => return Ok(None),
        };

        Ok(Some(VariantSite {
            reference_call: record.genotype(self.reference_column).map(|s| s.to_string()),
            comparison_calls: self
                .comparison_columns
                .iter()
                .map(|(id, column)| (id.clone(), record.genotype(*column).map(|s| s.to_string())))
                .collect(),
            contig: record.contig,
            position: record.position,
        }))
    }
}

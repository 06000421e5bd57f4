use std::collections::HashMap;

///
/// Maps a contig identifier to its declared length. Built once per run from
/// the reference dataset's header metadata and never mutated afterwards.
/// A length of 0 means the contig's length is unknown.
///
#[derive(Debug, Clone, Default)]
pub struct ContigLengths {
    lengths: HashMap<String, u64>,
}

impl ContigLengths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declared length of `contig`, or 0 when unknown or undeclared.
    pub fn length_of(&self, contig: &str) -> u64 {
        self.lengths.get(contig).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

impl FromIterator<(String, u64)> for ContigLengths {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            lengths: iter.into_iter().collect(),
        }
    }
}

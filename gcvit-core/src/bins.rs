use crate::contigs::ContigLengths;

///
/// A closed bin ready for emission: contig, the 1-based inclusive interval
/// it covers, and the index it carried.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedBin {
    pub contig: String,
    pub bin_index: u64,
    pub start: u64,
    pub end: u64,
}

///
/// Tracks the active bin across one forward pass: current contig, current
/// bin index, and that contig's effective bin width.
///
/// Two sizes are deliberately kept apart:
/// - `nominal_size` is the caller-requested bin size. It decides which bin
///   a position is assigned to on advancement.
/// - `effective_width` is `nominal_size` normalized so a contig of known
///   length divides evenly (no short trailing bin). It decides the rendered
///   start/end of every bin on that contig.
///
#[derive(Debug, Clone)]
pub struct BinState {
    contig: String,
    nominal_size: u64,
    effective_width: u64,
    bin_index: u64,
}

/// `ceil(length / nominal)` bins, each `length / bins` wide. Unknown length
/// falls back to the nominal size.
fn effective_width(declared_length: u64, nominal_size: u64) -> u64 {
    if declared_length > 0 {
        declared_length / declared_length.div_ceil(nominal_size)
    } else {
        nominal_size
    }
}

impl BinState {
    pub fn new(nominal_size: u64) -> Self {
        Self {
            contig: String::new(),
            nominal_size,
            effective_width: nominal_size,
            bin_index: 0,
        }
    }

    pub fn contig(&self) -> &str {
        &self.contig
    }

    pub fn bin_index(&self) -> u64 {
        self.bin_index
    }

    pub fn effective_width(&self) -> u64 {
        self.effective_width
    }

    /// Apply the transition for one incoming record. Returns the bin that
    /// must be flushed before the record is counted, if any.
    ///
    /// A contig change is a hard boundary: the open bin (if any) closes and
    /// the index restarts at 1 with a freshly computed width. Within a
    /// contig, a position past the current bin's upper edge closes the bin
    /// and re-locates the index from the *nominal* size.
    pub fn observe(
        &mut self,
        contig: &str,
        position: u64,
        lengths: &ContigLengths,
    ) -> Option<ClosedBin> {
        if contig != self.contig {
            let closed = self.current_bounds(lengths);
            self.contig = contig.to_string();
            self.effective_width = effective_width(lengths.length_of(contig), self.nominal_size);
            self.bin_index = 1;
            closed
        } else if position > self.bin_index * self.effective_width {
            let closed = self.current_bounds(lengths);
            self.bin_index = position / self.nominal_size + 1;
            closed
        } else {
            None
        }
    }

    /// The final flush after stream exhaustion. `None` when no record ever
    /// opened a bin.
    pub fn close(&self, lengths: &ContigLengths) -> Option<ClosedBin> {
        self.current_bounds(lengths)
    }

    fn current_bounds(&self, lengths: &ContigLengths) -> Option<ClosedBin> {
        if self.bin_index == 0 {
            return None;
        }

        let declared = lengths.length_of(&self.contig);
        let mut end = self.bin_index * self.effective_width;
        if declared > 0 && end > declared {
            end = declared;
        }

        Some(ClosedBin {
            contig: self.contig.clone(),
            bin_index: self.bin_index,
            start: (self.bin_index - 1) * self.effective_width + 1,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn lengths() -> ContigLengths {
        vec![
            ("Gm01".to_string(), 1_000_000),
            ("Gm02".to_string(), 1_250_000),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    #[case(1_000_000, 500_000, 500_000)] // divides evenly
    #[case(1_250_000, 500_000, 416_666)] // 3 bins over 1.25Mb
    #[case(0, 500_000, 500_000)] // unknown length keeps nominal
    #[case(300_000, 500_000, 300_000)] // single short contig, one bin
    fn test_effective_width(#[case] length: u64, #[case] nominal: u64, #[case] expected: u64) {
        assert_eq!(effective_width(length, nominal), expected);
    }

    #[rstest]
    fn test_first_record_opens_without_flush(lengths: ContigLengths) {
        let mut state = BinState::new(500_000);
        let closed = state.observe("Gm01", 100, &lengths);

        assert_eq!(closed, None);
        assert_eq!(state.bin_index(), 1);
        assert_eq!(state.effective_width(), 500_000);
    }

    #[rstest]
    fn test_position_within_bin_is_silent(lengths: ContigLengths) {
        let mut state = BinState::new(500_000);
        state.observe("Gm01", 100, &lengths);
        let closed = state.observe("Gm01", 500_000, &lengths);

        assert_eq!(closed, None);
        assert_eq!(state.bin_index(), 1);
    }

    #[rstest]
    fn test_position_past_edge_flushes(lengths: ContigLengths) {
        let mut state = BinState::new(500_000);
        state.observe("Gm01", 100, &lengths);
        let closed = state.observe("Gm01", 500_001, &lengths);

        assert_eq!(
            closed,
            Some(ClosedBin {
                contig: "Gm01".to_string(),
                bin_index: 1,
                start: 1,
                end: 500_000,
            })
        );
        assert_eq!(state.bin_index(), 2);
    }

    #[rstest]
    fn test_contig_change_flushes_and_resets(lengths: ContigLengths) {
        let mut state = BinState::new(500_000);
        state.observe("Gm01", 600_000, &lengths);
        let closed = state.observe("Gm02", 5, &lengths);

        let closed = closed.expect("contig change should close the open bin");
        assert_eq!(closed.contig, "Gm01");
        assert_eq!(closed.bin_index, 1);
        assert_eq!(state.contig(), "Gm02");
        assert_eq!(state.bin_index(), 1);
        assert_eq!(state.effective_width(), 416_666);
    }

    #[rstest]
    fn test_last_bin_ends_exactly_at_declared_length(lengths: ContigLengths) {
        let mut state = BinState::new(500_000);
        state.observe("Gm01", 100, &lengths);
        state.observe("Gm01", 600_000, &lengths);

        let last = state.close(&lengths).unwrap();
        assert_eq!(last.bin_index, 2);
        assert_eq!(last.start, 500_001);
        assert_eq!(last.end, 1_000_000);
    }

    #[rstest]
    fn test_clamp_when_unclamped_end_exceeds_length(lengths: ContigLengths) {
        // jumping from bin 1 straight to the contig's final base locates
        // nominal bin 3, whose unclamped end (1_500_000) is pulled back to
        // the declared 1_000_000
        let mut state = BinState::new(500_000);
        state.observe("Gm01", 100, &lengths);
        let closed = state.observe("Gm01", 1_000_000, &lengths);
        assert!(closed.is_some());
        assert_eq!(state.bin_index(), 3);

        let last = state.close(&lengths).unwrap();
        assert_eq!(last.end, 1_000_000);
    }

    #[rstest]
    fn test_unknown_contig_uses_nominal_size(lengths: ContigLengths) {
        let mut state = BinState::new(500_000);
        state.observe("scaffold_1", 1_600_000, &lengths);
        assert_eq!(state.bin_index(), 1);
        assert_eq!(state.effective_width(), 500_000);

        let closed = state.observe("scaffold_1", 1_700_000, &lengths).unwrap();
        assert_eq!(closed.start, 1);
        assert_eq!(closed.end, 500_000);
        // nominal size locates the new bin
        assert_eq!(state.bin_index(), 4);
    }

    #[rstest]
    fn test_close_before_any_record_is_none(lengths: ContigLengths) {
        let state = BinState::new(500_000);
        assert_eq!(state.close(&lengths), None);
    }
}

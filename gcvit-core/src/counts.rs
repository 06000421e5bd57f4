use std::collections::BTreeMap;

use crate::consts::{UNDEFINED_KEY, VALUE_KEY, is_undefined_call};

///
/// One class-key → count mapping. Keys are fixed at construction; counts are
/// reset to zero after every flush. A `BTreeMap` keeps iteration (and thus
/// output attribute order) lexicographic and deterministic.
///
#[derive(Debug, Clone)]
pub struct CounterSet {
    counts: BTreeMap<String, u64>,
}

impl CounterSet {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            counts: keys.into_iter().map(|k| (k.into(), 0)).collect(),
        }
    }

    pub fn increment(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Zero every key, keeping the key set intact.
    pub fn reset(&mut self) {
        for count in self.counts.values_mut() {
            *count = 0;
        }
    }

    /// Key/count pairs in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

///
/// The three counter sets of one comparison run and the per-site
/// classification rules that update them.
///
#[derive(Debug, Clone)]
pub struct Accumulator {
    reference_id: String,
    same: CounterSet,
    diff: CounterSet,
    total: CounterSet,
}

impl Accumulator {
    pub fn new(reference_id: &str, comparison_ids: &[String]) -> Self {
        let mut base: Vec<String> = comparison_ids.to_vec();
        base.push(VALUE_KEY.to_string());

        let mut total_keys = base.clone();
        total_keys.push(UNDEFINED_KEY.to_string());
        total_keys.push(reference_id.to_string());

        Self {
            reference_id: reference_id.to_string(),
            same: CounterSet::new(base.clone()),
            diff: CounterSet::new(base),
            total: CounterSet::new(total_keys),
        }
    }

    /// Classify one site. `reference_call` of `None` (no GT value present)
    /// counts as undefined, as does a literal `./.` or `.|.` string; an
    /// undefined reference call leaves every counter untouched.
    pub fn record(
        &mut self,
        reference_call: Option<&str>,
        comparisons: &[(String, Option<String>)],
    ) {
        let reference_call = match reference_call {
            Some(gt) if !is_undefined_call(gt) => gt,
            _ => return,
        };

        self.total.increment(VALUE_KEY);
        self.total.increment(&self.reference_id);

        for (id, call) in comparisons {
            match call.as_deref() {
                Some(gt) if !is_undefined_call(gt) => {
                    if gt == reference_call {
                        self.same.increment(id);
                        self.same.increment(VALUE_KEY);
                    } else {
                        self.diff.increment(id);
                        self.diff.increment(VALUE_KEY);
                    }
                    self.total.increment(id);
                }
                _ => self.total.increment(UNDEFINED_KEY),
            }
        }
    }

    pub fn same(&self) -> &CounterSet {
        &self.same
    }

    pub fn diff(&self) -> &CounterSet {
        &self.diff
    }

    pub fn total(&self) -> &CounterSet {
        &self.total
    }

    /// Zero all three counter sets. Called immediately after every flush.
    pub fn reset(&mut self) {
        self.same.reset();
        self.diff.reset();
        self.total.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn comparison(id: &str, call: &str) -> (String, Option<String>) {
        (id.to_string(), Some(call.to_string()))
    }

    #[fixture]
    fn acc() -> Accumulator {
        Accumulator::new("RefSample", &["A".to_string(), "B".to_string()])
    }

    #[rstest]
    fn test_undefined_reference_is_a_noop(mut acc: Accumulator) {
        acc.record(Some("./."), &[comparison("A", "0/1")]);
        acc.record(Some(".|."), &[comparison("A", "0/1")]);
        acc.record(None, &[comparison("A", "0/1")]);

        assert_eq!(acc.total().get(VALUE_KEY), 0);
        assert_eq!(acc.same().get(VALUE_KEY), 0);
        assert_eq!(acc.diff().get(VALUE_KEY), 0);
        assert_eq!(acc.total().get(UNDEFINED_KEY), 0);
    }

    #[rstest]
    fn test_undefined_comparison_counts_only_undefined(mut acc: Accumulator) {
        acc.record(Some("0/1"), &[("A".to_string(), Some("./.".to_string()))]);

        assert_eq!(acc.total().get(UNDEFINED_KEY), 1);
        assert_eq!(acc.total().get(VALUE_KEY), 1);
        assert_eq!(acc.total().get("RefSample"), 1);
        assert_eq!(acc.same().get("A"), 0);
        assert_eq!(acc.diff().get("A"), 0);
        assert_eq!(acc.total().get("A"), 0);
    }

    #[rstest]
    fn test_one_match_one_mismatch(mut acc: Accumulator) {
        acc.record(
            Some("0/1"),
            &[comparison("A", "0/1"), comparison("B", "1/1")],
        );

        assert_eq!(acc.same().get("A"), 1);
        assert_eq!(acc.diff().get("B"), 1);
        assert_eq!(acc.total().get("A"), 1);
        assert_eq!(acc.total().get("B"), 1);
        // one site, one total.value increment regardless of sample count
        assert_eq!(acc.total().get(VALUE_KEY), 1);
        assert_eq!(acc.same().get(VALUE_KEY), 1);
        assert_eq!(acc.diff().get(VALUE_KEY), 1);
    }

    #[rstest]
    fn test_exact_string_equality_no_normalization(mut acc: Accumulator) {
        // 0|1 and 0/1 are different strings, so they classify as diff
        acc.record(Some("0/1"), &[comparison("A", "0|1")]);

        assert_eq!(acc.diff().get("A"), 1);
        assert_eq!(acc.same().get("A"), 0);
    }

    #[rstest]
    fn test_missing_call_counts_as_undefined(mut acc: Accumulator) {
        acc.record(Some("0/0"), &[("A".to_string(), None)]);

        assert_eq!(acc.total().get(UNDEFINED_KEY), 1);
        assert_eq!(acc.same().get("A"), 0);
        assert_eq!(acc.diff().get("A"), 0);
    }

    #[rstest]
    fn test_same_plus_diff_equals_total_for_defined_calls(mut acc: Accumulator) {
        for call in ["0/0", "0/1", "1/1", "0/1"] {
            acc.record(
                Some("0/1"),
                &[comparison("A", call), comparison("B", "0/1")],
            );
        }

        let defined = acc.same().get(VALUE_KEY) + acc.diff().get(VALUE_KEY);
        assert_eq!(defined, 8);
        assert_eq!(acc.total().get("A") + acc.total().get("B"), 8);
    }

    #[rstest]
    fn test_reset_zeroes_but_keeps_keys(mut acc: Accumulator) {
        acc.record(Some("0/1"), &[comparison("A", "0/1")]);
        acc.reset();

        assert_eq!(acc.same().get("A"), 0);
        assert_eq!(acc.total().get(VALUE_KEY), 0);
        let keys: Vec<&str> = acc.total().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "B", "RefSample", "undefined", "value"]);
    }
}

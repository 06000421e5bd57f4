use std::fmt::{self, Display};

///
/// The three feature classes emitted per closed bin, in this fixed order.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Same,
    Diff,
    Total,
}

impl FeatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Same => "same",
            FeatureKind::Diff => "diff",
            FeatureKind::Total => "total",
        }
    }
}

impl Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// One output interval feature. `start`/`end` are 1-based inclusive;
/// attributes carry `ID` first, then every counter class/count pair in
/// lexicographic key order.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub seqid: String,
    pub source: &'static str,
    pub kind: FeatureKind,
    pub start: u64,
    pub end: u64,
    pub attributes: Vec<(String, String)>,
}

impl Feature {
    pub fn id(&self) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == "ID")
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_kind_labels() {
        assert_eq!(FeatureKind::Same.as_str(), "same");
        assert_eq!(FeatureKind::Diff.as_str(), "diff");
        assert_eq!(FeatureKind::Total.to_string(), "total");
    }

    #[rstest]
    fn test_feature_id_lookup() {
        let feature = Feature {
            seqid: "Gm01".to_string(),
            source: "gcvit",
            kind: FeatureKind::Same,
            start: 1,
            end: 500_000,
            attributes: vec![
                ("ID".to_string(), "same.1".to_string()),
                ("value".to_string(), "12".to_string()),
            ],
        };
        assert_eq!(feature.id(), Some("same.1"));
    }
}

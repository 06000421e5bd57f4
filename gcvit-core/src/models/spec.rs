use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::GcvitError;

///
/// A `dataset:sample` specifier as passed in requests for both the reference
/// and every comparison series.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSpec {
    pub dataset: String,
    pub sample: String,
}

impl FromStr for SampleSpec {
    type Err = GcvitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((dataset, sample)) if !dataset.is_empty() && !sample.is_empty() => {
                Ok(SampleSpec {
                    dataset: dataset.to_string(),
                    sample: sample.to_string(),
                })
            }
            _ => Err(GcvitError::Config(format!(
                "invalid sample specifier {:?}: expected <dataset>:<sample>",
                s
            ))),
        }
    }
}

impl Display for SampleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.dataset, self.sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parse_spec() {
        let spec: SampleSpec = "soy3k:HG00096".parse().unwrap();
        assert_eq!(spec.dataset, "soy3k");
        assert_eq!(spec.sample, "HG00096");
    }

    #[rstest]
    fn test_sample_may_contain_colons() {
        let spec: SampleSpec = "exp:line:42".parse().unwrap();
        assert_eq!(spec.dataset, "exp");
        assert_eq!(spec.sample, "line:42");
    }

    #[rstest]
    #[case("nodataset")]
    #[case(":sample")]
    #[case("dataset:")]
    fn test_rejects_malformed(#[case] input: &str) {
        assert!(input.parse::<SampleSpec>().is_err());
    }
}

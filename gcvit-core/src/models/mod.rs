pub mod feature;
pub mod site;
pub mod spec;

// re-export for cleaner imports
pub use self::feature::{Feature, FeatureKind};
pub use self::site::VariantSite;
pub use self::spec::SampleSpec;

/// Nominal bin size used when a request omits one or passes a non-positive
/// value, in bases.
pub const DEFAULT_BIN_SIZE: u64 = 500_000;

/// Fixed source label for emitted features (GFF column 2).
pub const FEATURE_SOURCE: &str = "gcvit";

/// Aggregate key present in every counter set.
pub const VALUE_KEY: &str = "value";

/// Key in the `total` counter set for undefined comparison calls.
pub const UNDEFINED_KEY: &str = "undefined";

/// A genotype call is undefined iff it is exactly one of these.
pub const UNDEFINED_CALLS: [&str; 2] = ["./.", ".|."];

/// True when a GT string counts as an undefined call.
pub fn is_undefined_call(gt: &str) -> bool {
    UNDEFINED_CALLS.contains(&gt)
}

/// Template matching module for locating the reference image in captures
///
/// This module provides:
/// - Zero-mean normalized cross-correlation scoring
/// - Multi-scale search with scales precomputed at load
/// - The threshold decision rule that gates clicks
pub mod matcher;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;


pub use matcher::MultiScaleMatcher;
pub use types::{Detection, MatchResult, ScaleSet};

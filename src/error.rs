//! Error types for style construction and palette lookup.

use thiserror::Error;

/// Errors raised while building a style descriptor.
///
/// All of these surface at construction time; rendering itself never
/// fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    /// UpperCase and LowerCase were requested on the same descriptor.
    #[error("formatting cannot include both UpperCase and LowerCase")]
    InvalidStyleCombination,

    /// A numeric palette index outside the fixed 16-entry table.
    #[error("{index} is not a valid palette index (expected 0..=15)")]
    InvalidPaletteIndex { index: u8 },
}

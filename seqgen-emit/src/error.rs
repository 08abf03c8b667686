//! Error type for the opt-in input checks.

use thiserror::Error;

/// Errors reported by the identifier checks in [`crate::naming`].
///
/// The fragment builders themselves are total and never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmitError {
    /// The given string is not a plain identifier.
    #[error("`{0}` is not a valid TypeScript identifier")]
    InvalidIdentifier(String),
}

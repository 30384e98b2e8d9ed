//! Error types for rule construction.

use thiserror::Error;

/// Errors raised while building rule sets.
///
/// Evaluation itself is total and never returns an error; everything that
/// can go wrong is rejected up front when a rule is constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("rule `{name}` has a zero divisor")]
    ZeroDivisor { name: String },

    #[error("rule name must not be empty")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for content check operations

use std::fmt;

/// Errors that can occur in the checked variants of the content utilities
///
/// Most functions in this crate are pure predicates that resolve every
/// failure to `false` and never surface an error. The `Result`-returning
/// entry points (`TagAllowlist::check`, `flatten::flatten_array`) use this
/// type for callers that want the taxonomy.
#[derive(Debug)]
pub enum CheckError {
    /// Caller supplied a value of the wrong shape
    InvalidInput(String),
    /// A contained internal fault (e.g. a parser panic caught at the boundary)
    InternalError(String),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CheckError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for CheckError {}

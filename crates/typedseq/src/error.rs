use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for typedseq operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A candidate element failed the allow-list of the sequence it was
    /// about to enter.
    #[error("Not allowed: ({kind}) {repr}")]
    TypeNotAllowed { kind: String, repr: String },
    /// An explicit write targeted a position the sequence can never reach.
    #[error("Index too high: index: {index}, max: {max}")]
    IndexTooHigh { index: usize, max: usize },
}

impl Error {
    pub(crate) fn type_not_allowed(kind: impl ToString, repr: impl ToString) -> Self {
        Self::TypeNotAllowed {
            kind: kind.to_string(),
            repr: repr.to_string(),
        }
    }
}

use thiserror::Error;

/// Normalized failure outcome of a remote operation.
///
/// The remote store mixes transport signals (non-2xx statuses, unreachable
/// host) with application signals (error fields and sentinel messages inside
/// otherwise-successful bodies). Implementations of [`crate::UserStore`] fold
/// both into this one shape so callers handle exactly one kind of failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The request could not complete, or the store answered with a
    /// non-success status.
    #[error("{0}")]
    Transport(String),

    /// The store answered successfully but reported an error in the body.
    #[error("{0}")]
    Rejected(String),
}

impl StoreError {
    /// The human-readable message carried by either variant.
    pub fn message(&self) -> &str {
        match self {
            StoreError::Transport(msg) | StoreError::Rejected(msg) => msg,
        }
    }
}

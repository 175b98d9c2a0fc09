use thiserror::Error;

/// Failures the ledger and the conversational flows can produce.
///
/// A missing limit is not an error; lookups return `Option` for that case.
#[derive(Debug, Error)]
pub(crate) enum LedgerError {
    #[error("amount must be a positive whole number")]
    InvalidAmount,
    #[error("unrecognized category: '{0}'")]
    UnknownCategory(String),
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("session state error: {0}")]
    Session(#[from] serde_json::Error),
}

use thiserror::Error;

/// Failure surface of the external sheet-suggestion provider.
///
/// Caught at the aggregator boundary; affected sheets fall back to the local
/// matcher and the batch continues.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("suggestion provider unavailable: {0}")]
    Unavailable(String),
    #[error("suggestion provider returned malformed data: {0}")]
    Malformed(String),
}

/// Provider result type.
pub type ProviderResult<Ok> = Result<Ok, ProviderError>;

/// Errors a backend lookup can fail with.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The underlying storage failed to serve the request.
    #[error("database error: {0}")]
    Database(String),
    /// The caller abandoned the request before the lookup completed.
    #[error("request cancelled")]
    Cancelled,
}

/// Domain-specific error types for feedrank
///
/// The engine is pure and total over its input domain, so the taxonomy is
/// narrow: invalid caller arguments, configuration failures, and errors
/// surfaced by the external post/interest stores.

#[derive(Debug, thiserror::Error)]
pub enum FeedrankError {
    /// The caller passed an argument that indicates a bug on their side
    /// (e.g. negative limit/offset). Never silently clamped.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        field: Option<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reported by an external post/interest store backend.
    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FeedrankError {
    /// Helper to create invalid-argument errors with field names
    ///
    /// Example:
    /// ```
    /// use feedrank::errors::FeedrankError;
    /// let err = FeedrankError::invalid_argument("limit", "limit must not be negative");
    /// ```
    pub fn invalid_argument(field: &str, message: &str) -> Self {
        FeedrankError::InvalidArgument {
            message: message.to_string(),
            field: Some(field.to_string()),
        }
    }
}

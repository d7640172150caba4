#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field was missing or empty.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Missing, malformed or expired credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A resource addressed by id does not exist for the caller.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A well-formed request that cannot succeed given the current state
    /// (duplicate account, bad credentials).
    #[error("Rejected: {0}")]
    Rejected(String),
}

//! Error types for the Sitestack model.

/// Error type for invalid model values.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Invalid AWS account ID format.
    #[error("invalid AWS account ID: {0} (must be 12-digit numeric string)")]
    InvalidAccountId(String),

    /// Invalid template logical ID.
    #[error("invalid logical ID: {id} ({reason})")]
    InvalidLogicalId {
        /// The rejected logical ID.
        id: String,
        /// Why the ID was rejected.
        reason: String,
    },
}

//! Identifier newtypes shared across resource declarations.

use std::fmt;

use crate::ModelError;

/// AWS Account ID (12-digit string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Placeholder account ID used when none is injected.
    pub const DEFAULT: &str = "000000000000";

    /// Create a new account ID from a string.
    ///
    /// # Errors
    /// Returns an error if the account ID is not a 12-digit numeric string.
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.len() != 12 || !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ModelError::InvalidAccountId(id));
        }
        Ok(Self(id))
    }

    /// Get the account ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// AWS Region identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Default region for site stacks. CloudFront only accepts
    /// certificates from this region, so it doubles as the certificate
    /// region.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a new region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Logical ID of a resource declaration within a stack.
///
/// Logical IDs key the `Resources` section of the synthesized template
/// and are the endpoints of dependency edges in the resource graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct LogicalId(String);

impl LogicalId {
    /// Maximum logical ID length accepted by the provisioning engine.
    pub const MAX_LEN: usize = 255;

    /// Create a new logical ID.
    ///
    /// # Errors
    /// Returns an error unless the ID is non-empty, starts with an ASCII
    /// letter, contains only ASCII alphanumerics, and is at most
    /// [`Self::MAX_LEN`] characters long.
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ModelError::InvalidLogicalId {
                id,
                reason: "must not be empty".to_owned(),
            });
        }
        if id.len() > Self::MAX_LEN {
            return Err(ModelError::InvalidLogicalId {
                id,
                reason: format!("must be at most {} characters", Self::MAX_LEN),
            });
        }
        if !id.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(ModelError::InvalidLogicalId {
                id,
                reason: "must start with an ASCII letter".to_owned(),
            });
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ModelError::InvalidLogicalId {
                id,
                reason: "must contain only ASCII alphanumerics".to_owned(),
            });
        }
        Ok(Self(id))
    }

    /// Get the logical ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Validation for site stack configuration.
//!
//! Domain names follow the hostname rules shared by DNS records, bucket
//! names, and distribution aliases: since the bucket is named after the
//! site's public hostname, one rule set covers all of them.

use std::net::Ipv4Addr;
use std::path::Path;

use crate::error::ConfigError;

/// Maximum total length of a domain name in bytes.
const MAX_DOMAIN_LEN: usize = 253;

/// Maximum length of a single label in bytes.
const MAX_LABEL_LEN: usize = 63;

/// Minimum number of labels: the stack needs a registrable domain with a
/// hosted zone, so a bare TLD or single label is rejected.
const MIN_LABELS: usize = 2;

/// Validate a root domain name.
///
/// Rules:
/// - Non-empty, at most 253 bytes
/// - Only lowercase letters, digits, hyphens, and dots
/// - At least two labels, each 1-63 bytes
/// - No label starts or ends with a hyphen
/// - Not formatted as an IPv4 address
/// - No wildcard labels
///
/// # Errors
///
/// Returns [`ConfigError::EmptyRootDomain`] for an empty name and
/// [`ConfigError::InvalidDomainName`] if any other rule is violated.
///
/// # Examples
///
/// ```
/// use sitestack_core::validation::validate_domain_name;
///
/// assert!(validate_domain_name("example.com").is_ok());
/// assert!(validate_domain_name("Example.com").is_err());
/// ```
pub fn validate_domain_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyRootDomain);
    }

    if name.len() > MAX_DOMAIN_LEN {
        return Err(ConfigError::InvalidDomainName {
            name: name.to_owned(),
            reason: format!("must be at most {MAX_DOMAIN_LEN} bytes"),
        });
    }

    if name.contains('*') {
        return Err(ConfigError::InvalidDomainName {
            name: name.to_owned(),
            reason: "wildcard labels are not allowed in a root domain".to_owned(),
        });
    }

    if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'.')
    {
        return Err(ConfigError::InvalidDomainName {
            name: name.to_owned(),
            reason: "must only contain lowercase letters, digits, hyphens, and dots".to_owned(),
        });
    }

    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < MIN_LABELS {
        return Err(ConfigError::InvalidDomainName {
            name: name.to_owned(),
            reason: "must have at least two labels (e.g. example.com)".to_owned(),
        });
    }

    for label in &labels {
        if label.is_empty() {
            return Err(ConfigError::InvalidDomainName {
                name: name.to_owned(),
                reason: "labels must not be empty".to_owned(),
            });
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(ConfigError::InvalidDomainName {
                name: name.to_owned(),
                reason: format!("labels must be at most {MAX_LABEL_LEN} bytes"),
            });
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(ConfigError::InvalidDomainName {
                name: name.to_owned(),
                reason: "labels must not start or end with a hyphen".to_owned(),
            });
        }
    }

    if name.parse::<Ipv4Addr>().is_ok() {
        return Err(ConfigError::InvalidDomainName {
            name: name.to_owned(),
            reason: "must not be formatted as an IP address".to_owned(),
        });
    }

    Ok(())
}

/// Validate the website index document name.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyIndexDocument`] if the name is empty.
pub fn validate_index_document(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyIndexDocument);
    }
    Ok(())
}

/// Validate the custom error document path.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyErrorDocument`] if the path is empty.
pub fn validate_error_document(path: &str) -> Result<(), ConfigError> {
    if path.is_empty() {
        return Err(ConfigError::EmptyErrorDocument);
    }
    Ok(())
}

/// Validate that the content source directory exists and is readable.
///
/// The check runs at build time so a bad path fails before any resource
/// is declared, rather than deep inside the engine's apply.
///
/// # Errors
///
/// Returns [`ConfigError::ContentDirMissing`],
/// [`ConfigError::ContentDirNotADirectory`], or
/// [`ConfigError::ContentDirUnreadable`].
pub fn validate_content_dir(path: &Path) -> Result<(), ConfigError> {
    let metadata = std::fs::metadata(path).map_err(|_| ConfigError::ContentDirMissing {
        path: path.to_path_buf(),
    })?;

    if !metadata.is_dir() {
        return Err(ConfigError::ContentDirNotADirectory {
            path: path.to_path_buf(),
        });
    }

    std::fs::read_dir(path).map_err(|e| ConfigError::ContentDirUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(())
}

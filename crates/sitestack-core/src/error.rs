//! Error types for the site stack builder.
//!
//! Two failures are observable by callers: invalid input rejected before
//! any resource is declared ([`ConfigError`]), and opaque failures the
//! external engine reports during apply
//! ([`SiteStackError::Provisioning`]). Graph integrity violations get
//! their own type so consumers re-checking a graph can match on them.

use std::path::PathBuf;

use sitestack_model::ModelError;

/// Invalid or missing input, detected before any resource is emitted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The root domain was empty.
    #[error("root domain must not be empty")]
    EmptyRootDomain,

    /// The root domain is not a valid DNS name.
    #[error("invalid domain name: {name} ({reason})")]
    InvalidDomainName {
        /// The rejected domain name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// The website index document was empty.
    #[error("index document must not be empty")]
    EmptyIndexDocument,

    /// The error document path was empty.
    #[error("error document path must not be empty")]
    EmptyErrorDocument,

    /// The content source directory does not exist.
    #[error("content source directory does not exist: {path}")]
    ContentDirMissing {
        /// The missing path.
        path: PathBuf,
    },

    /// The content source path exists but is not a directory.
    #[error("content source path is not a directory: {path}")]
    ContentDirNotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The content source directory exists but cannot be read.
    #[error("content source directory is not readable: {path} ({reason})")]
    ContentDirUnreadable {
        /// The unreadable path.
        path: PathBuf,
        /// The underlying I/O failure.
        reason: String,
    },

    /// A configuration file could not be read or parsed.
    #[error("cannot load configuration from {path}: {reason}")]
    ConfigFile {
        /// The configuration file path.
        path: PathBuf,
        /// Why loading failed.
        reason: String,
    },

    /// An environment variable held an unusable value.
    #[error("invalid value for {name}: {value}")]
    InvalidEnvValue {
        /// The environment variable name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An identifier failed model-level validation.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Graph integrity violation.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Two nodes declared the same logical ID.
    #[error("duplicate logical ID in resource graph: {0}")]
    DuplicateLogicalId(String),

    /// A node depends on a logical ID that is not in the graph, or that
    /// appears after the node (the graph is built in topological order).
    #[error("node {node} depends on {dependency}, which is not declared before it")]
    UnsatisfiedDependency {
        /// The dependent node.
        node: String,
        /// The missing or out-of-order dependency.
        dependency: String,
    },
}

/// Top-level error type for site stack operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteStackError {
    /// Invalid input, rejected before any resource was declared.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The resource graph violated its ordering invariant.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Opaque failure reported by the external provisioning engine.
    /// Surfaced verbatim; never interpreted or retried here.
    #[error("provisioning engine failure: {message}")]
    Provisioning {
        /// The engine's failure text.
        message: String,
    },
}

impl From<ModelError> for SiteStackError {
    fn from(err: ModelError) -> Self {
        Self::Config(ConfigError::Model(err))
    }
}

/// Convenience result type for site stack operations.
pub type SiteStackResult<T> = Result<T, SiteStackError>;

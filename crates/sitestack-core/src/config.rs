//! Configuration for the site stack builder.
//!
//! A [`SiteConfig`] is the single input to [`crate::build`]; nothing is
//! read from ambient globals during the build. Environment variables and
//! JSON files are only convenience loaders that produce a config value
//! up front.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use sitestack_model::{AccountId, AwsRegion, CertificateValidation, RemovalPolicy};

use crate::error::ConfigError;

/// Default local directory uploaded into the content bucket.
pub const DEFAULT_CONTENT_DIR: &str = "./website-content";

/// Default website index document.
pub const DEFAULT_INDEX_DOCUMENT: &str = "index.html";

/// Default custom error document.
pub const DEFAULT_ERROR_DOCUMENT: &str = "error.html";

/// Default edge cache TTL for error responses, in seconds (30 minutes).
pub const DEFAULT_ERROR_CACHE_TTL_SECS: u64 = 1800;

/// Deployment target: the account/region pair injected into the build.
///
/// This is the only environment-dependent input the builder accepts;
/// everything else lives in [`SiteConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Deployment account.
    pub account: AccountId,
    /// Deployment region.
    pub region: AwsRegion,
}

impl Environment {
    /// Create an environment from an account and region.
    #[must_use]
    pub fn new(account: AccountId, region: AwsRegion) -> Self {
        Self { account, region }
    }

    /// Load the environment from `AWS_ACCOUNT_ID` / `AWS_REGION`,
    /// falling back to the defaults when unset.
    ///
    /// # Errors
    /// Returns an error if `AWS_ACCOUNT_ID` is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load the environment from a variable lookup function.
    pub(crate) fn from_vars(
        get: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let account = match get("AWS_ACCOUNT_ID") {
            Some(v) => AccountId::new(v).map_err(ConfigError::Model)?,
            None => AccountId::default(),
        };
        let region = get("AWS_REGION").map_or_else(AwsRegion::default, AwsRegion::new);
        Ok(Self { account, region })
    }
}

/// Inputs describing one static site deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Root domain of the site, e.g. `example.com`. Must be a valid
    /// lowercase DNS name with an existing hosted zone.
    #[builder(setter(into))]
    pub root_domain: String,

    /// Whether the site also answers on the `www` subdomain. When set,
    /// the bucket is named after the `www` host and a second alias
    /// record is declared.
    #[builder(default = true)]
    pub include_www: bool,

    /// Document served for the site root.
    #[builder(default = DEFAULT_INDEX_DOCUMENT.to_owned(), setter(into))]
    pub index_document: String,

    /// Page the CDN serves in place of a 404 from the origin.
    #[builder(default = DEFAULT_ERROR_DOCUMENT.to_owned(), setter(into))]
    pub error_document_path: String,

    /// Proof-of-ownership method for the TLS certificate.
    #[builder(default)]
    pub certificate_validation: CertificateValidation,

    /// Local directory whose contents are uploaded into the bucket.
    #[builder(default = PathBuf::from(DEFAULT_CONTENT_DIR), setter(into))]
    pub content_source_dir: PathBuf,

    /// Teardown behavior for the bucket and certificate.
    #[builder(default)]
    pub bucket_removal: RemovalPolicy,

    /// Whether bucket objects are deleted on teardown so the bucket
    /// itself can be removed.
    #[builder(default = true)]
    pub auto_delete_objects: bool,

    /// Edge cache TTL for the custom error response, in seconds.
    #[builder(default = DEFAULT_ERROR_CACHE_TTL_SECS)]
    pub error_cache_ttl_secs: u64,

    /// Optional human-readable comment on the distribution.
    #[builder(default, setter(strip_option, into))]
    pub comment: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_domain: String::new(),
            include_www: true,
            index_document: DEFAULT_INDEX_DOCUMENT.to_owned(),
            error_document_path: DEFAULT_ERROR_DOCUMENT.to_owned(),
            certificate_validation: CertificateValidation::default(),
            content_source_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            bucket_removal: RemovalPolicy::default(),
            auto_delete_objects: true,
            error_cache_ttl_secs: DEFAULT_ERROR_CACHE_TTL_SECS,
            comment: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from `SITE_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    /// Returns an error if a set variable holds an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration from a variable lookup function.
    pub(crate) fn from_vars(
        get: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = get("SITE_DOMAIN") {
            config.root_domain = v;
        }
        if let Some(v) = get("SITE_INCLUDE_WWW") {
            config.include_www = parse_bool(&v);
        }
        if let Some(v) = get("SITE_INDEX_DOCUMENT") {
            config.index_document = v;
        }
        if let Some(v) = get("SITE_ERROR_DOCUMENT") {
            config.error_document_path = v;
        }
        if let Some(v) = get("SITE_CERT_VALIDATION") {
            config.certificate_validation = CertificateValidation::from(v.as_str());
        }
        if let Some(v) = get("SITE_CONTENT_DIR") {
            config.content_source_dir = PathBuf::from(v);
        }
        if let Some(v) = get("SITE_BUCKET_REMOVAL") {
            config.bucket_removal = RemovalPolicy::from(v.as_str());
        }
        if let Some(v) = get("SITE_AUTO_DELETE_OBJECTS") {
            config.auto_delete_objects = parse_bool(&v);
        }
        if let Some(v) = get("SITE_ERROR_CACHE_TTL_SECS") {
            config.error_cache_ttl_secs =
                v.parse()
                    .map_err(|_| ConfigError::InvalidEnvValue {
                        name: "SITE_ERROR_CACHE_TTL_SECS".to_owned(),
                        value: v,
                    })?;
        }
        if let Some(v) = get("SITE_COMMENT") {
            config.comment = Some(v);
        }

        Ok(config)
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    /// Returns [`ConfigError::ConfigFile`] if the file cannot be read or
    /// parsed.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// The site's public hostname: the `www` host when `include_www` is
    /// set, the root domain otherwise. Names the content bucket.
    #[must_use]
    pub fn site_hostname(&self) -> String {
        if self.include_www {
            format!("www.{}", self.root_domain)
        } else {
            self.root_domain.clone()
        }
    }

    /// Every domain name the distribution answers for, apex first.
    #[must_use]
    pub fn aliases(&self) -> Vec<String> {
        let mut aliases = vec![self.root_domain.clone()];
        if self.include_www {
            aliases.push(format!("www.{}", self.root_domain));
        }
        aliases
    }
}

/// Parse a boolean environment value (`1`/`true` are truthy).
fn parse_bool(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_should_create_default_config() {
        let config = SiteConfig::default();
        assert!(config.root_domain.is_empty());
        assert!(config.include_www);
        assert_eq!(config.index_document, "index.html");
        assert_eq!(config.error_document_path, "error.html");
        assert_eq!(config.error_cache_ttl_secs, 1800);
        assert_eq!(config.content_source_dir, PathBuf::from("./website-content"));
    }

    #[test]
    fn test_should_build_config_with_builder_defaults() {
        let config = SiteConfig::builder().root_domain("example.com").build();
        assert_eq!(config.root_domain, "example.com");
        assert!(config.include_www);
        assert_eq!(config.bucket_removal, RemovalPolicy::Destroy);
        assert!(config.auto_delete_objects);
        assert!(config.comment.is_none());
    }

    #[test]
    fn test_should_apply_env_overrides() {
        let config = SiteConfig::from_vars(vars(&[
            ("SITE_DOMAIN", "example.org"),
            ("SITE_INCLUDE_WWW", "false"),
            ("SITE_ERROR_DOCUMENT", "error/index.html"),
            ("SITE_CERT_VALIDATION", "EMAIL"),
            ("SITE_BUCKET_REMOVAL", "Retain"),
            ("SITE_ERROR_CACHE_TTL_SECS", "600"),
        ]))
        .unwrap();

        assert_eq!(config.root_domain, "example.org");
        assert!(!config.include_www);
        assert_eq!(config.error_document_path, "error/index.html");
        assert_eq!(config.certificate_validation, CertificateValidation::Email);
        assert_eq!(config.bucket_removal, RemovalPolicy::Retain);
        assert_eq!(config.error_cache_ttl_secs, 600);
    }

    #[test]
    fn test_should_reject_unparseable_ttl() {
        let result = SiteConfig::from_vars(vars(&[("SITE_ERROR_CACHE_TTL_SECS", "soon")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvValue { .. })));
    }

    #[test]
    fn test_should_parse_truthy_bool_values() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("yes"));
    }

    #[test]
    fn test_should_derive_site_hostname_from_www_flag() {
        let config = SiteConfig::builder().root_domain("example.com").build();
        assert_eq!(config.site_hostname(), "www.example.com");

        let config = SiteConfig::builder()
            .root_domain("example.com")
            .include_www(false)
            .build();
        assert_eq!(config.site_hostname(), "example.com");
    }

    #[test]
    fn test_should_list_aliases_apex_first() {
        let config = SiteConfig::builder().root_domain("example.com").build();
        assert_eq!(config.aliases(), vec!["example.com", "www.example.com"]);

        let config = SiteConfig::builder()
            .root_domain("example.com")
            .include_www(false)
            .build();
        assert_eq!(config.aliases(), vec!["example.com"]);
    }

    #[test]
    fn test_should_load_config_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(
            &path,
            r#"{ "rootDomain": "example.net", "includeWww": false, "errorCacheTtlSecs": 300 }"#,
        )
        .unwrap();

        let config = SiteConfig::from_json_file(&path).unwrap();
        assert_eq!(config.root_domain, "example.net");
        assert!(!config.include_www);
        assert_eq!(config.error_cache_ttl_secs, 300);
        // Unspecified fields keep their defaults.
        assert_eq!(config.index_document, "index.html");
    }

    #[test]
    fn test_should_reject_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SiteConfig::from_json_file(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(ConfigError::ConfigFile { .. })));
    }

    #[test]
    fn test_should_reject_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            SiteConfig::from_json_file(&path),
            Err(ConfigError::ConfigFile { .. })
        ));
    }

    #[test]
    fn test_should_build_environment_from_vars() {
        let env = Environment::from_vars(vars(&[
            ("AWS_ACCOUNT_ID", "123456789012"),
            ("AWS_REGION", "eu-central-1"),
        ]))
        .unwrap();
        assert_eq!(env.account.as_str(), "123456789012");
        assert_eq!(env.region.as_str(), "eu-central-1");
    }

    #[test]
    fn test_should_default_environment_when_unset() {
        let env = Environment::from_vars(|_| None).unwrap();
        assert_eq!(env.account.as_str(), AccountId::DEFAULT);
        assert_eq!(env.region.as_str(), AwsRegion::DEFAULT);
    }

    #[test]
    fn test_should_reject_invalid_account_in_environment() {
        let result = Environment::from_vars(vars(&[("AWS_ACCOUNT_ID", "not-an-account")]));
        assert!(matches!(result, Err(ConfigError::Model(_))));
    }
}

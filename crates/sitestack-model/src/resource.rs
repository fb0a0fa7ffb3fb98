//! Per-resource property structs and the resource declaration enum.
//!
//! Each struct carries the literal attributes of one declared resource.
//! Cross-resource references are not stored here; they live as explicit
//! dependency edges on the graph node that owns the spec.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::enums::{
    AllowedMethods, BucketAccessControl, CertificateValidation, MinimumProtocolVersion,
    RecordType, RemovalPolicy, SslSupportMethod, ViewerProtocolPolicy,
};
use crate::types::AwsRegion;

/// Reference to an existing hosted zone, looked up by the engine.
///
/// The zone is read-only: the stack never owns or mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZoneLookup {
    /// Root domain whose authoritative record set is looked up.
    pub domain_name: String,
}

/// TLS certificate declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSpec {
    /// Primary domain the certificate is issued for.
    pub domain_name: String,
    /// Additional names the certificate covers (e.g. the `www` host).
    pub subject_alternative_names: Vec<String>,
    /// Proof-of-ownership method.
    pub validation: CertificateValidation,
    /// Region the certificate is issued in. The CDN only accepts
    /// certificates from `us-east-1`.
    pub region: AwsRegion,
    /// Teardown behavior.
    pub removal_policy: RemovalPolicy,
}

/// Content bucket declaration with website hosting enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSpec {
    /// Bucket name; equals the site's public hostname.
    pub bucket_name: String,
    /// Whether anonymous reads are allowed.
    pub public_read_access: bool,
    /// Canned access control grant.
    pub access_control: BucketAccessControl,
    /// Whether new ACL grants are blocked (public policy still allowed).
    pub block_public_acls: bool,
    /// Document served for the bare website root.
    pub website_index_document: String,
    /// Document the website endpoint serves on errors.
    pub website_error_document: String,
    /// Teardown behavior.
    pub removal_policy: RemovalPolicy,
    /// Whether objects are deleted so teardown can remove the bucket.
    pub auto_delete_objects: bool,
}

/// One error-response mapping on the distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseSpec {
    /// Origin status code being mapped.
    pub http_status: u16,
    /// Status code returned to the viewer.
    pub response_http_status: u16,
    /// Page served in place of the origin response, rooted at `/`.
    pub response_page_path: String,
    /// How long edges cache the error response, in seconds.
    pub cache_ttl_secs: u64,
}

/// CDN distribution declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSpec {
    /// Custom domain names the distribution answers for.
    pub aliases: Vec<String>,
    /// Object served for the bare distribution root.
    pub default_root_object: String,
    /// Identifier of the single website origin.
    pub origin_id: String,
    /// Minimum viewer TLS version.
    pub minimum_protocol_version: MinimumProtocolVersion,
    /// Certificate presentation method.
    pub ssl_support_method: SslSupportMethod,
    /// Plain-HTTP viewer handling.
    pub viewer_protocol_policy: ViewerProtocolPolicy,
    /// Methods forwarded to the origin.
    pub allowed_methods: AllowedMethods,
    /// Whether edge compression is enabled.
    pub compress: bool,
    /// Error-response mappings.
    pub error_responses: Vec<ErrorResponseSpec>,
    /// Optional human-readable comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// DNS alias record pointing a name at the distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasRecordSpec {
    /// Fully-qualified record name.
    pub record_name: String,
    /// Record type.
    pub record_type: RecordType,
    /// Name of the hosted zone the record is created in.
    pub zone_name: String,
}

/// Upload of a local directory into the content bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentUploadSpec {
    /// Local directory whose contents are uploaded.
    pub source_dir: PathBuf,
}

/// Kind discriminant for a resource declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Hosted zone lookup (read-only).
    HostedZone,
    /// TLS certificate.
    Certificate,
    /// Content bucket.
    Bucket,
    /// CDN distribution.
    Distribution,
    /// DNS alias record.
    AliasRecord,
    /// Content upload step.
    ContentUpload,
}

impl ResourceKind {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HostedZone => "HostedZone",
            Self::Certificate => "Certificate",
            Self::Bucket => "Bucket",
            Self::Distribution => "Distribution",
            Self::AliasRecord => "AliasRecord",
            Self::ContentUpload => "ContentUpload",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single resource declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ResourceSpec {
    /// Hosted zone lookup (read-only).
    HostedZone(HostedZoneLookup),
    /// TLS certificate.
    Certificate(CertificateSpec),
    /// Content bucket.
    Bucket(BucketSpec),
    /// CDN distribution.
    Distribution(DistributionSpec),
    /// DNS alias record.
    AliasRecord(AliasRecordSpec),
    /// Content upload step.
    ContentUpload(ContentUploadSpec),
}

impl ResourceSpec {
    /// Kind discriminant of this declaration.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::HostedZone(_) => ResourceKind::HostedZone,
            Self::Certificate(_) => ResourceKind::Certificate,
            Self::Bucket(_) => ResourceKind::Bucket,
            Self::Distribution(_) => ResourceKind::Distribution,
            Self::AliasRecord(_) => ResourceKind::AliasRecord,
            Self::ContentUpload(_) => ResourceKind::ContentUpload,
        }
    }

    /// Whether the stack owns this resource's lifecycle.
    ///
    /// The hosted zone is looked up, never created or destroyed.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        !matches!(self, Self::HostedZone(_))
    }
}

//! Construction of the site resource graph.
//!
//! One linear pipeline: hosted zone lookup, certificate, bucket,
//! distribution, alias records, content upload. Each step's node
//! depends on nodes from earlier steps only, so the graph comes out in
//! topological order.
//!
//! The build is deterministic: the same config and environment always
//! produce the same node set, edge set, and literal attributes. No
//! clock, randomness, or ambient state is consulted.

use tracing::{debug, info};

use sitestack_model::{
    AliasRecordSpec, AllowedMethods, AwsRegion, BucketSpec, CertificateSpec,
    CertificateValidation, ContentUploadSpec, DistributionSpec, ErrorResponseSpec,
    HostedZoneLookup, LogicalId, MinimumProtocolVersion, RecordType, ResourceSpec,
    SslSupportMethod, ViewerProtocolPolicy,
};

use crate::config::{Environment, SiteConfig};
use crate::error::SiteStackResult;
use crate::graph::{ResourceGraph, ResourceNode};
use crate::validation::{
    validate_content_dir, validate_domain_name, validate_error_document,
    validate_index_document,
};

/// Logical ID of the hosted zone lookup.
pub const ZONE_ID: &str = "HostedZone";

/// Logical ID of the TLS certificate.
pub const CERTIFICATE_ID: &str = "SiteCertificate";

/// Logical ID of the content bucket.
pub const BUCKET_ID: &str = "SiteBucket";

/// Logical ID of the CDN distribution.
pub const DISTRIBUTION_ID: &str = "SiteDistribution";

/// Logical ID of the apex alias record.
pub const APEX_RECORD_ID: &str = "SiteAliasRecord";

/// Logical ID of the `www` alias record.
pub const WWW_RECORD_ID: &str = "WwwSiteAliasRecord";

/// Logical ID of the content upload step.
pub const UPLOAD_ID: &str = "WebsiteContentUpload";

/// Origin identifier wiring the distribution to the bucket.
pub const ORIGIN_ID: &str = "site-bucket-origin";

/// Error document the bucket's own website endpoint serves. The CDN's
/// error page is configured separately on the distribution.
const BUCKET_ERROR_DOCUMENT: &str = "error.html";

/// HTTP status mapped to the custom error page.
const NOT_FOUND_STATUS: u16 = 404;

/// Build the resource graph for one site deployment.
///
/// Validates the config, then declares one node per pipeline step. The
/// certificate always covers every distribution alias, and the bucket
/// is named after the site's public hostname, so all domain literals in
/// the graph agree on the same root domain and subdomain variant.
///
/// # Errors
///
/// Returns [`crate::ConfigError`] (wrapped in
/// [`crate::SiteStackError`]) if the config is invalid; no partial
/// graph is produced.
pub fn build(config: &SiteConfig, env: &Environment) -> SiteStackResult<ResourceGraph> {
    validate_domain_name(&config.root_domain)?;
    validate_index_document(&config.index_document)?;
    validate_error_document(&config.error_document_path)?;
    validate_content_dir(&config.content_source_dir)?;

    let root_domain = config.root_domain.clone();
    let site_hostname = config.site_hostname();
    let aliases = config.aliases();

    let zone_id = LogicalId::new(ZONE_ID)?;
    let certificate_id = LogicalId::new(CERTIFICATE_ID)?;
    let bucket_id = LogicalId::new(BUCKET_ID)?;
    let distribution_id = LogicalId::new(DISTRIBUTION_ID)?;

    let mut graph = ResourceGraph::new();

    // 1. Hosted zone lookup: read-only, owned by nobody.
    insert(
        &mut graph,
        ResourceNode {
            id: zone_id.clone(),
            spec: ResourceSpec::HostedZone(HostedZoneLookup {
                domain_name: root_domain.clone(),
            }),
            depends_on: Vec::new(),
        },
    )?;

    // 2. Certificate. DNS validation proves ownership through the zone;
    // email validation needs no zone at all. The CDN only accepts
    // certificates issued in us-east-1, whatever region the stack
    // itself targets.
    let certificate_deps = match config.certificate_validation {
        CertificateValidation::Dns => vec![zone_id.clone()],
        CertificateValidation::Email => Vec::new(),
    };
    insert(
        &mut graph,
        ResourceNode {
            id: certificate_id.clone(),
            spec: ResourceSpec::Certificate(CertificateSpec {
                domain_name: root_domain.clone(),
                subject_alternative_names: aliases
                    .iter()
                    .filter(|a| **a != root_domain)
                    .cloned()
                    .collect(),
                validation: config.certificate_validation,
                region: AwsRegion::new(AwsRegion::DEFAULT),
                removal_policy: config.bucket_removal,
            }),
            depends_on: certificate_deps,
        },
    )?;

    // 3. Content bucket, named after the public hostname.
    insert(
        &mut graph,
        ResourceNode {
            id: bucket_id.clone(),
            spec: ResourceSpec::Bucket(BucketSpec {
                bucket_name: site_hostname.clone(),
                public_read_access: true,
                access_control: sitestack_model::BucketAccessControl::BucketOwnerFullControl,
                block_public_acls: true,
                website_index_document: config.index_document.clone(),
                website_error_document: BUCKET_ERROR_DOCUMENT.to_owned(),
                removal_policy: config.bucket_removal,
                auto_delete_objects: config.auto_delete_objects,
            }),
            depends_on: Vec::new(),
        },
    )?;

    // 4. Distribution fronting the bucket with the certificate attached.
    insert(
        &mut graph,
        ResourceNode {
            id: distribution_id.clone(),
            spec: ResourceSpec::Distribution(DistributionSpec {
                aliases: aliases.clone(),
                default_root_object: config.index_document.clone(),
                origin_id: ORIGIN_ID.to_owned(),
                minimum_protocol_version: MinimumProtocolVersion::TlsV12_2021,
                ssl_support_method: SslSupportMethod::SniOnly,
                viewer_protocol_policy: ViewerProtocolPolicy::RedirectToHttps,
                allowed_methods: AllowedMethods::GetHeadOptions,
                compress: true,
                error_responses: vec![ErrorResponseSpec {
                    http_status: NOT_FOUND_STATUS,
                    response_http_status: NOT_FOUND_STATUS,
                    response_page_path: rooted(&config.error_document_path),
                    cache_ttl_secs: config.error_cache_ttl_secs,
                }],
                comment: config.comment.clone(),
            }),
            depends_on: vec![certificate_id, bucket_id.clone()],
        },
    )?;

    // 5. Alias records: apex always, www only when the site answers on it.
    insert(
        &mut graph,
        ResourceNode {
            id: LogicalId::new(APEX_RECORD_ID)?,
            spec: ResourceSpec::AliasRecord(AliasRecordSpec {
                record_name: root_domain.clone(),
                record_type: RecordType::A,
                zone_name: root_domain.clone(),
            }),
            depends_on: vec![zone_id.clone(), distribution_id.clone()],
        },
    )?;
    if config.include_www {
        insert(
            &mut graph,
            ResourceNode {
                id: LogicalId::new(WWW_RECORD_ID)?,
                spec: ResourceSpec::AliasRecord(AliasRecordSpec {
                    record_name: site_hostname.clone(),
                    record_type: RecordType::A,
                    zone_name: root_domain.clone(),
                }),
                depends_on: vec![zone_id, distribution_id],
            },
        )?;
    }

    // 6. Content upload into the bucket.
    insert(
        &mut graph,
        ResourceNode {
            id: LogicalId::new(UPLOAD_ID)?,
            spec: ResourceSpec::ContentUpload(ContentUploadSpec {
                source_dir: config.content_source_dir.clone(),
            }),
            depends_on: vec![bucket_id],
        },
    )?;

    info!(
        root_domain = %root_domain,
        site_hostname = %site_hostname,
        account = %env.account,
        region = %env.region,
        nodes = graph.len(),
        edges = graph.edge_count(),
        "site stack graph built",
    );

    Ok(graph)
}

/// Insert a node, logging the declaration.
fn insert(graph: &mut ResourceGraph, node: ResourceNode) -> SiteStackResult<()> {
    debug!(id = %node.id, kind = %node.spec.kind(), deps = node.depends_on.len(), "declared resource");
    graph.insert(node)?;
    Ok(())
}

/// Root a document path at `/`, as the CDN expects.
fn rooted(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

//! Template synthesis: rendering a resource graph for the engine.
//!
//! Each owned node becomes one `Resources` entry; the hosted zone
//! lookup becomes a `Parameters` entry the engine resolves itself.
//! Two companion resources are derived from the bucket node rather
//! than declared in the graph: the public-read bucket policy and the
//! teardown object-cleanup step.

use std::collections::BTreeMap;

use serde_json::json;
use tracing::debug;

use sitestack_model::{
    AliasRecordSpec, BucketSpec, CertificateSpec, CertificateValidation, ContentUploadSpec,
    DistributionSpec, LogicalId, PropertyValue, ResourceKind, ResourceSpec, Template,
    TemplateOutput, TemplateParameter, TemplateResource,
};

use crate::graph::{ResourceGraph, ResourceNode};

/// Alias-target zone shared by every CDN distribution.
pub const CLOUDFRONT_ALIAS_ZONE_ID: &str = "Z2FDTNDATAQYW2";

/// Managed caching-optimized cache policy applied to the default
/// behavior.
pub const CACHE_POLICY_ID: &str = "658327ea-f89d-4fab-a63d-7e88639e58f6";

/// Render a resource graph to the engine-facing template.
///
/// Rendering is a pure function of the graph: identical graphs produce
/// identical documents (the template's maps are ordered).
#[must_use]
pub fn synthesize(graph: &ResourceGraph) -> Template {
    let mut template = Template::default();

    let zone_id = graph
        .find_by_kind(ResourceKind::HostedZone)
        .map(|node| node.id.clone());
    let zone_param = zone_id.as_ref().map(|id| format!("{id}Id"));
    let certificate_id = graph
        .find_by_kind(ResourceKind::Certificate)
        .map(|node| node.id.clone());
    let bucket_id = graph
        .find_by_kind(ResourceKind::Bucket)
        .map(|node| node.id.clone());
    let distribution_id = graph
        .find_by_kind(ResourceKind::Distribution)
        .map(|node| node.id.clone());

    for node in graph.nodes() {
        let deps = resource_depends_on(node, zone_id.as_ref());
        match &node.spec {
            ResourceSpec::HostedZone(zone) => {
                if let Some(name) = &zone_param {
                    template.parameters.insert(
                        name.clone(),
                        TemplateParameter {
                            parameter_type: "AWS::Route53::HostedZone::Id".to_owned(),
                            description: format!("Existing hosted zone for {}", zone.domain_name),
                        },
                    );
                }
                template.description =
                    format!("Static website hosting stack for {}", zone.domain_name);
            }
            ResourceSpec::Certificate(cert) => {
                template.resources.insert(
                    node.id.to_string(),
                    certificate_resource(deps, cert, zone_param.as_deref()),
                );
            }
            ResourceSpec::Bucket(bucket) => {
                template
                    .resources
                    .insert(node.id.to_string(), bucket_resource(deps, bucket));
                if bucket.public_read_access {
                    template.resources.insert(
                        format!("{}Policy", node.id),
                        bucket_policy_resource(&node.id),
                    );
                }
                if bucket.auto_delete_objects {
                    template.resources.insert(
                        format!("{}Cleanup", node.id),
                        bucket_cleanup_resource(&node.id),
                    );
                }
            }
            ResourceSpec::Distribution(dist) => {
                template.resources.insert(
                    node.id.to_string(),
                    distribution_resource(deps, dist, certificate_id.as_ref(), bucket_id.as_ref()),
                );
            }
            ResourceSpec::AliasRecord(record) => {
                template.resources.insert(
                    node.id.to_string(),
                    alias_record_resource(deps, record, distribution_id.as_ref()),
                );
            }
            ResourceSpec::ContentUpload(upload) => {
                template.resources.insert(
                    node.id.to_string(),
                    content_upload_resource(deps, upload, bucket_id.as_ref()),
                );
            }
        }
    }

    template.outputs = outputs(
        certificate_id.as_ref(),
        bucket_id.as_ref(),
        distribution_id.as_ref(),
    );

    debug!(
        resources = template.resources.len(),
        parameters = template.parameters.len(),
        outputs = template.outputs.len(),
        "template synthesized",
    );

    template
}

/// Dependency edges that render as `DependsOn`: only edges to nodes
/// that are themselves template resources (the zone is a parameter).
fn resource_depends_on(node: &ResourceNode, zone_id: Option<&LogicalId>) -> Vec<String> {
    node.depends_on
        .iter()
        .filter(|dep| Some(*dep) != zone_id)
        .map(ToString::to_string)
        .collect()
}

fn certificate_resource(
    depends_on: Vec<String>,
    cert: &CertificateSpec,
    zone_param: Option<&str>,
) -> TemplateResource {
    let mut properties = json!({
        "DomainName": cert.domain_name,
        "ValidationMethod": cert.validation.as_str(),
    });
    if !cert.subject_alternative_names.is_empty() {
        properties["SubjectAlternativeNames"] = json!(cert.subject_alternative_names);
    }
    if let (CertificateValidation::Dns, Some(param)) = (cert.validation, zone_param) {
        properties["DomainValidationOptions"] = json!([{
            "DomainName": cert.domain_name,
            "HostedZoneId": serde_json::Value::from(PropertyValue::reference(param)),
        }]);
    }

    TemplateResource {
        resource_type: "AWS::CertificateManager::Certificate".to_owned(),
        depends_on,
        deletion_policy: Some(cert.removal_policy),
        properties,
    }
}

fn bucket_resource(depends_on: Vec<String>, bucket: &BucketSpec) -> TemplateResource {
    TemplateResource {
        resource_type: "AWS::S3::Bucket".to_owned(),
        depends_on,
        deletion_policy: Some(bucket.removal_policy),
        properties: json!({
            "BucketName": bucket.bucket_name,
            "AccessControl": bucket.access_control.as_str(),
            "PublicAccessBlockConfiguration": {
                "BlockPublicAcls": bucket.block_public_acls,
                "IgnorePublicAcls": bucket.block_public_acls,
            },
            "WebsiteConfiguration": {
                "IndexDocument": bucket.website_index_document,
                "ErrorDocument": bucket.website_error_document,
            },
        }),
    }
}

/// Public-read policy companion for a website bucket.
fn bucket_policy_resource(bucket_id: &LogicalId) -> TemplateResource {
    TemplateResource {
        resource_type: "AWS::S3::BucketPolicy".to_owned(),
        depends_on: vec![bucket_id.to_string()],
        deletion_policy: None,
        properties: json!({
            "Bucket": serde_json::Value::from(PropertyValue::reference(bucket_id.as_str())),
            "PolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Action": "s3:GetObject",
                    "Effect": "Allow",
                    "Principal": "*",
                    "Resource": serde_json::Value::from(PropertyValue::join(
                        "",
                        vec![
                            PropertyValue::get_att(bucket_id.as_str(), "Arn"),
                            PropertyValue::literal("/*"),
                        ],
                    )),
                }],
            },
        }),
    }
}

/// Teardown companion that empties the bucket so it can be deleted.
fn bucket_cleanup_resource(bucket_id: &LogicalId) -> TemplateResource {
    TemplateResource {
        resource_type: "Custom::BucketObjectCleanup".to_owned(),
        depends_on: vec![bucket_id.to_string()],
        deletion_policy: None,
        properties: json!({
            "BucketName": serde_json::Value::from(PropertyValue::reference(bucket_id.as_str())),
        }),
    }
}

fn distribution_resource(
    depends_on: Vec<String>,
    dist: &DistributionSpec,
    certificate_id: Option<&LogicalId>,
    bucket_id: Option<&LogicalId>,
) -> TemplateResource {
    let mut config = json!({
        "Enabled": true,
        "Aliases": dist.aliases,
        "DefaultRootObject": dist.default_root_object,
        "CustomErrorResponses": dist.error_responses.iter().map(|e| json!({
            "ErrorCode": e.http_status,
            "ResponseCode": e.response_http_status,
            "ResponsePagePath": e.response_page_path,
            "ErrorCachingMinTTL": e.cache_ttl_secs,
        })).collect::<Vec<_>>(),
        "DefaultCacheBehavior": {
            "TargetOriginId": dist.origin_id,
            "ViewerProtocolPolicy": dist.viewer_protocol_policy.as_str(),
            "AllowedMethods": dist.allowed_methods.as_methods(),
            "Compress": dist.compress,
            "CachePolicyId": CACHE_POLICY_ID,
        },
    });
    if let Some(comment) = &dist.comment {
        config["Comment"] = json!(comment);
    }
    if let Some(cert) = certificate_id {
        config["ViewerCertificate"] = json!({
            "AcmCertificateArn": serde_json::Value::from(
                PropertyValue::reference(cert.as_str()),
            ),
            "MinimumProtocolVersion": dist.minimum_protocol_version.as_str(),
            "SslSupportMethod": dist.ssl_support_method.as_str(),
        });
    }
    if let Some(bucket) = bucket_id {
        config["Origins"] = json!([{
            "Id": dist.origin_id,
            "DomainName": serde_json::Value::from(PropertyValue::website_host(bucket.as_str())),
            "CustomOriginConfig": {
                "HTTPPort": 80,
                "HTTPSPort": 443,
                "OriginProtocolPolicy": "http-only",
            },
        }]);
    }

    TemplateResource {
        resource_type: "AWS::CloudFront::Distribution".to_owned(),
        depends_on,
        deletion_policy: None,
        properties: json!({ "DistributionConfig": config }),
    }
}

fn alias_record_resource(
    depends_on: Vec<String>,
    record: &AliasRecordSpec,
    distribution_id: Option<&LogicalId>,
) -> TemplateResource {
    let mut properties = json!({
        "Name": record.record_name,
        "Type": record.record_type.as_str(),
        "HostedZoneName": format!("{}.", record.zone_name),
        "Comment": record.record_name,
    });
    if let Some(dist) = distribution_id {
        properties["AliasTarget"] = json!({
            "DNSName": serde_json::Value::from(
                PropertyValue::get_att(dist.as_str(), "DomainName"),
            ),
            "HostedZoneId": CLOUDFRONT_ALIAS_ZONE_ID,
        });
    }

    TemplateResource {
        resource_type: "AWS::Route53::RecordSet".to_owned(),
        depends_on,
        deletion_policy: None,
        properties,
    }
}

fn content_upload_resource(
    depends_on: Vec<String>,
    upload: &ContentUploadSpec,
    bucket_id: Option<&LogicalId>,
) -> TemplateResource {
    let mut properties = json!({
        "SourcePath": upload.source_dir.display().to_string(),
    });
    if let Some(bucket) = bucket_id {
        properties["DestinationBucket"] =
            serde_json::Value::from(PropertyValue::reference(bucket.as_str()));
    }

    TemplateResource {
        resource_type: "Custom::WebsiteContentDeployment".to_owned(),
        depends_on,
        deletion_policy: None,
        properties,
    }
}

fn outputs(
    certificate_id: Option<&LogicalId>,
    bucket_id: Option<&LogicalId>,
    distribution_id: Option<&LogicalId>,
) -> BTreeMap<String, TemplateOutput> {
    let mut outputs = BTreeMap::new();
    if let Some(cert) = certificate_id {
        outputs.insert(
            "Certificate".to_owned(),
            TemplateOutput {
                description: "Certificate ARN".to_owned(),
                value: PropertyValue::reference(cert.as_str()),
            },
        );
    }
    if let Some(bucket) = bucket_id {
        outputs.insert(
            "Bucket".to_owned(),
            TemplateOutput {
                description: "Content bucket name".to_owned(),
                value: PropertyValue::reference(bucket.as_str()),
            },
        );
    }
    if let Some(dist) = distribution_id {
        outputs.insert(
            "DistributionId".to_owned(),
            TemplateOutput {
                description: "Distribution ID".to_owned(),
                value: PropertyValue::reference(dist.as_str()),
            },
        );
    }
    outputs
}

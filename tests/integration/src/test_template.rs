//! Template synthesis integration tests.
//!
//! Assertions run against the parsed JSON document, the way the
//! provisioning engine sees it.

#[cfg(test)]
mod tests {
    use crate::{site_config, synth_document};

    #[test]
    fn test_should_render_expected_resource_types() {
        let dir = tempfile::tempdir().unwrap();
        let doc = synth_document(&site_config(dir.path()));

        let resources = doc["Resources"].as_object().unwrap();
        let type_of = |id: &str| resources[id]["Type"].as_str().unwrap();

        assert_eq!(
            type_of("SiteCertificate"),
            "AWS::CertificateManager::Certificate"
        );
        assert_eq!(type_of("SiteBucket"), "AWS::S3::Bucket");
        assert_eq!(type_of("SiteDistribution"), "AWS::CloudFront::Distribution");
        assert_eq!(type_of("SiteAliasRecord"), "AWS::Route53::RecordSet");
        assert_eq!(type_of("WwwSiteAliasRecord"), "AWS::Route53::RecordSet");
        assert_eq!(
            type_of("WebsiteContentUpload"),
            "Custom::WebsiteContentDeployment"
        );
    }

    #[test]
    fn test_should_resolve_every_ref_to_a_declared_resource() {
        let dir = tempfile::tempdir().unwrap();
        let doc = synth_document(&site_config(dir.path()));
        let resources = doc["Resources"].as_object().unwrap();

        let mut refs = Vec::new();
        collect_refs(&doc, &mut refs);
        for target in refs {
            assert!(
                resources.contains_key(&target) || doc["Parameters"].get(&target).is_some(),
                "dangling reference: {target}"
            );
        }
    }

    /// Walk the document collecting `Ref` and `Fn::GetAtt` targets.
    fn collect_refs(value: &serde_json::Value, out: &mut Vec<String>) {
        match value {
            serde_json::Value::Object(map) => {
                if let Some(serde_json::Value::String(target)) = map.get("Ref") {
                    out.push(target.clone());
                }
                if let Some(serde_json::Value::Array(target)) = map.get("Fn::GetAtt") {
                    if let Some(serde_json::Value::String(id)) = target.first() {
                        out.push(id.clone());
                    }
                }
                for nested in map.values() {
                    collect_refs(nested, out);
                }
            }
            serde_json::Value::Array(items) => {
                for nested in items {
                    collect_refs(nested, out);
                }
            }
            _ => {}
        }
    }

    #[test]
    fn test_should_render_zone_parameter_instead_of_resource() {
        let dir = tempfile::tempdir().unwrap();
        let doc = synth_document(&site_config(dir.path()));

        assert_eq!(
            doc["Parameters"]["HostedZoneId"]["Type"],
            "AWS::Route53::HostedZone::Id"
        );
        assert!(doc["Resources"].get("HostedZone").is_none());
    }

    #[test]
    fn test_should_enforce_https_and_custom_error_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = site_config(dir.path());
        config.error_document_path = "error/index.html".to_owned();
        config.error_cache_ttl_secs = 600;
        let doc = synth_document(&config);

        let dist = &doc["Resources"]["SiteDistribution"]["Properties"]["DistributionConfig"];
        assert_eq!(
            dist["DefaultCacheBehavior"]["ViewerProtocolPolicy"],
            "redirect-to-https"
        );
        assert_eq!(
            dist["ViewerCertificate"]["MinimumProtocolVersion"],
            "TLSv1.2_2021"
        );
        assert_eq!(dist["ViewerCertificate"]["SslSupportMethod"], "sni-only");

        let error = &dist["CustomErrorResponses"][0];
        assert_eq!(error["ErrorCode"], 404);
        assert_eq!(error["ResponseCode"], 404);
        assert_eq!(error["ResponsePagePath"], "/error/index.html");
        assert_eq!(error["ErrorCachingMinTTL"], 600);
    }

    #[test]
    fn test_should_name_bucket_after_public_hostname() {
        let dir = tempfile::tempdir().unwrap();
        let doc = synth_document(&site_config(dir.path()));

        let bucket = &doc["Resources"]["SiteBucket"];
        assert_eq!(bucket["Properties"]["BucketName"], "www.example.com");
        assert_eq!(bucket["DeletionPolicy"], "Delete");
        assert_eq!(
            bucket["Properties"]["WebsiteConfiguration"]["IndexDocument"],
            "index.html"
        );
    }

    #[test]
    fn test_should_respect_retain_policy() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = site_config(dir.path());
        config.bucket_removal = sitestack_model::RemovalPolicy::Retain;
        let doc = synth_document(&config);

        assert_eq!(doc["Resources"]["SiteBucket"]["DeletionPolicy"], "Retain");
        assert_eq!(
            doc["Resources"]["SiteCertificate"]["DeletionPolicy"],
            "Retain"
        );
    }

    #[test]
    fn test_should_carry_stack_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let doc = synth_document(&site_config(dir.path()));

        assert_eq!(
            doc["Outputs"]["Certificate"]["Value"],
            serde_json::json!({ "Ref": "SiteCertificate" })
        );
        assert_eq!(
            doc["Outputs"]["Bucket"]["Value"],
            serde_json::json!({ "Ref": "SiteBucket" })
        );
        assert_eq!(
            doc["Outputs"]["DistributionId"]["Value"],
            serde_json::json!({ "Ref": "SiteDistribution" })
        );
    }

    #[test]
    fn test_should_render_upload_into_the_bucket() {
        let dir = tempfile::tempdir().unwrap();
        let doc = synth_document(&site_config(dir.path()));

        let upload = &doc["Resources"]["WebsiteContentUpload"];
        assert_eq!(
            upload["Properties"]["DestinationBucket"],
            serde_json::json!({ "Ref": "SiteBucket" })
        );
        assert_eq!(upload["DependsOn"][0], "SiteBucket");
        let source = upload["Properties"]["SourcePath"].as_str().unwrap();
        assert!(source.contains(dir.path().file_name().unwrap().to_str().unwrap()));
    }

    #[test]
    fn test_should_render_email_validated_certificate_without_zone_options() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = site_config(dir.path());
        config.certificate_validation = sitestack_model::CertificateValidation::Email;
        let doc = synth_document(&config);

        let cert = &doc["Resources"]["SiteCertificate"]["Properties"];
        assert_eq!(cert["ValidationMethod"], "EMAIL");
        assert!(cert.get("DomainValidationOptions").is_none());
    }
}

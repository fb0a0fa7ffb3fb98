//! Graph construction integration tests.

#[cfg(test)]
mod tests {
    use crate::{build_graph, init_tracing, site_config};
    use sitestack_core::{ConfigError, Environment, SiteStackError, build};
    use sitestack_model::{ResourceKind, ResourceSpec};

    #[test]
    fn test_should_build_deterministic_graphs() {
        let dir = tempfile::tempdir().unwrap();
        let config = site_config(dir.path());

        let first = build_graph(&config);
        let second = build_graph(&config);

        assert_eq!(first.len(), second.len());
        assert_eq!(first.edge_count(), second.edge_count());
        assert_eq!(first, second);
        // The serialized forms agree byte for byte.
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_should_order_every_dependency_before_its_dependent() {
        let dir = tempfile::tempdir().unwrap();
        let graph = build_graph(&site_config(dir.path()));

        assert!(graph.verify_acyclic_order().is_ok());

        let order: Vec<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
        for (dependent, dependency) in graph.edges() {
            let dependent_pos = order.iter().position(|id| *id == dependent.as_str());
            let dependency_pos = order.iter().position(|id| *id == dependency.as_str());
            assert!(
                dependency_pos < dependent_pos,
                "{dependency} must precede {dependent}"
            );
        }
    }

    #[test]
    fn test_should_toggle_www_alias_set() {
        let dir = tempfile::tempdir().unwrap();

        let with_www = build_graph(&site_config(dir.path()));
        let node = with_www.find_by_kind(ResourceKind::Distribution).unwrap();
        let ResourceSpec::Distribution(spec) = &node.spec else {
            panic!("expected distribution spec");
        };
        assert_eq!(spec.aliases, vec!["example.com", "www.example.com"]);

        let mut config = site_config(dir.path());
        config.include_www = false;
        let without_www = build_graph(&config);
        let node = without_www.find_by_kind(ResourceKind::Distribution).unwrap();
        let ResourceSpec::Distribution(spec) = &node.spec else {
            panic!("expected distribution spec");
        };
        assert_eq!(spec.aliases, vec!["example.com"]);
        assert_eq!(without_www.len(), with_www.len() - 1);
    }

    #[test]
    fn test_should_fail_on_empty_domain_without_partial_graph() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let mut config = site_config(dir.path());
        config.root_domain = String::new();

        let err = build(&config, &Environment::default()).unwrap_err();
        assert!(matches!(
            err,
            SiteStackError::Config(ConfigError::EmptyRootDomain)
        ));
    }

    #[test]
    fn test_should_fail_on_missing_content_dir() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let mut config = site_config(dir.path());
        config.content_source_dir = dir.path().join("no-such-dir");

        let err = build(&config, &Environment::default()).unwrap_err();
        assert!(matches!(
            err,
            SiteStackError::Config(ConfigError::ContentDirMissing { .. })
        ));
    }

    #[test]
    fn test_should_isolate_error_document_changes_to_the_distribution() {
        let dir = tempfile::tempdir().unwrap();
        let base_config = site_config(dir.path());
        let mut changed_config = site_config(dir.path());
        changed_config.error_document_path = "404.html".to_owned();

        let base = build_graph(&base_config);
        let changed = build_graph(&changed_config);

        assert_eq!(base.len(), changed.len());
        for (a, b) in base.nodes().iter().zip(changed.nodes()) {
            if a.spec.kind() == ResourceKind::Distribution {
                assert_ne!(a.spec, b.spec, "distribution must change");
            } else {
                assert_eq!(a.spec, b.spec, "{} must not change", a.id);
            }
        }
    }

    #[test]
    fn test_should_keep_domain_literals_consistent() {
        let dir = tempfile::tempdir().unwrap();
        let graph = build_graph(&site_config(dir.path()));

        let ResourceSpec::Certificate(cert) = &graph
            .find_by_kind(ResourceKind::Certificate)
            .unwrap()
            .spec
        else {
            panic!("expected certificate spec");
        };
        let ResourceSpec::Bucket(bucket) =
            &graph.find_by_kind(ResourceKind::Bucket).unwrap().spec
        else {
            panic!("expected bucket spec");
        };
        let ResourceSpec::Distribution(dist) = &graph
            .find_by_kind(ResourceKind::Distribution)
            .unwrap()
            .spec
        else {
            panic!("expected distribution spec");
        };

        // Every distribution alias is covered by the certificate, and the
        // bucket carries the public hostname.
        let mut covered = vec![cert.domain_name.clone()];
        covered.extend(cert.subject_alternative_names.iter().cloned());
        for alias in &dist.aliases {
            assert!(covered.contains(alias), "alias {alias} not on certificate");
        }
        assert!(dist.aliases.contains(&bucket.bucket_name));

        let records: Vec<&str> = graph
            .nodes()
            .iter()
            .filter_map(|n| match &n.spec {
                ResourceSpec::AliasRecord(r) => Some(r.record_name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(records, vec!["example.com", "www.example.com"]);
    }
}

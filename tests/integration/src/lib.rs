//! Integration tests for the Sitestack builder.
//!
//! These tests exercise the whole pipeline end-to-end: configuration,
//! graph construction, and template synthesis, asserting on the parsed
//! JSON document the way an engine-side consumer would see it. No
//! external services are required.

use std::path::Path;
use std::sync::Once;

use sitestack_core::{Environment, ResourceGraph, SiteConfig, build, synthesize};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A config for `example.com` with the content directory rooted at
/// `content_dir`.
#[must_use]
pub fn site_config(content_dir: &Path) -> SiteConfig {
    SiteConfig::builder()
        .root_domain("example.com")
        .content_source_dir(content_dir)
        .comment("example.com static site")
        .build()
}

/// Build the graph for a config against the default environment.
///
/// # Panics
/// Panics if the build fails; tests construct valid configs.
#[must_use]
pub fn build_graph(config: &SiteConfig) -> ResourceGraph {
    init_tracing();
    build(config, &Environment::default()).expect("build should succeed")
}

/// Build and synthesize, returning the parsed template document.
///
/// # Panics
/// Panics if the build or serialization fails.
#[must_use]
pub fn synth_document(config: &SiteConfig) -> serde_json::Value {
    let graph = build_graph(config);
    serde_json::to_value(synthesize(&graph)).expect("template should serialize")
}

mod test_build;
mod test_template;

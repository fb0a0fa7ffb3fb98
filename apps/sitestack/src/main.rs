//! Sitestack CLI - synthesize a static site hosting stack.
//!
//! Builds the resource graph for one site deployment and renders the
//! engine-facing template to a file or stdout. Provisioning itself is
//! the engine's job; this binary never talks to the network.
//!
//! # Usage
//!
//! ```text
//! SITE_DOMAIN=example.com sitestack --output site-stack.json
//! sitestack --config site.json --check
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SITE_DOMAIN` | *(required)* | Root domain of the site |
//! | `SITE_INCLUDE_WWW` | `true` | Also answer on the `www` host |
//! | `SITE_INDEX_DOCUMENT` | `index.html` | Website index document |
//! | `SITE_ERROR_DOCUMENT` | `error.html` | CDN custom error page |
//! | `SITE_CERT_VALIDATION` | `DNS` | Certificate validation (`DNS`/`EMAIL`) |
//! | `SITE_CONTENT_DIR` | `./website-content` | Local content directory |
//! | `SITE_BUCKET_REMOVAL` | `Delete` | Bucket teardown (`Delete`/`Retain`) |
//! | `SITE_AUTO_DELETE_OBJECTS` | `true` | Empty the bucket on teardown |
//! | `SITE_ERROR_CACHE_TTL_SECS` | `1800` | Error response cache TTL |
//! | `AWS_ACCOUNT_ID` | `000000000000` | Deployment account |
//! | `AWS_REGION` | `us-east-1` | Deployment region |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sitestack_core::{Environment, ProvisioningEngine, SiteConfig, SiteStackError, synthesize};
use sitestack_model::Template;

/// Parsed command-line options.
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    /// JSON configuration file; environment variables are used when unset.
    config: Option<PathBuf>,
    /// Output path for the rendered template; stdout when unset.
    output: Option<PathBuf>,
    /// Validate and build only; render nothing.
    check: bool,
    /// Print usage and exit.
    help: bool,
}

/// Parse command-line arguments (excluding the binary name).
fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--config requires a path".to_owned())?;
                options.config = Some(PathBuf::from(value));
            }
            "--output" | "-o" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--output requires a path".to_owned())?;
                options.output = Some(PathBuf::from(value));
            }
            "--check" => options.check = true,
            "--help" | "-h" => options.help = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(options)
}

/// Usage text printed for `--help`.
const USAGE: &str = "\
sitestack - synthesize a static site hosting stack

USAGE:
    sitestack [--config <path>] [--output <path>] [--check]

OPTIONS:
    --config <path>   Load site configuration from a JSON file
                      (environment variables are used otherwise)
    --output <path>   Write the rendered template to a file
                      (stdout otherwise)
    --check           Validate and build without rendering output
    --help            Print this help
";

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL`
/// environment value.
fn init_tracing() -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());
        EnvFilter::try_new(&level).with_context(|| format!("invalid log level filter: {level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Engine implementation that renders the template to a file or stdout.
#[derive(Debug)]
struct FileEngine {
    /// Destination path; stdout when unset.
    output: Option<PathBuf>,
}

impl ProvisioningEngine for FileEngine {
    fn apply(&mut self, template: &Template) -> Result<(), SiteStackError> {
        let rendered = template
            .to_json_pretty()
            .map_err(|e| SiteStackError::Provisioning {
                message: e.to_string(),
            })?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, rendered).map_err(|e| SiteStackError::Provisioning {
                    message: format!("cannot write {}: {e}", path.display()),
                })?;
                info!(path = %path.display(), "template written");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{rendered}").map_err(|e| SiteStackError::Provisioning {
                    message: format!("cannot write to stdout: {e}"),
                })?;
            }
        }
        Ok(())
    }
}

/// Load the site configuration per the parsed options.
fn load_config(options: &Options) -> Result<SiteConfig> {
    match &options.config {
        Some(path) => SiteConfig::from_json_file(path)
            .with_context(|| format!("cannot load config file {}", path.display())),
        None => SiteConfig::from_env().context("cannot load config from environment"),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    if options.help {
        print!("{USAGE}");
        return Ok(());
    }

    init_tracing()?;

    let config = load_config(&options)?;
    let env = Environment::from_env().context("cannot load deployment environment")?;

    info!(
        root_domain = %config.root_domain,
        account = %env.account,
        region = %env.region,
        "building site stack",
    );

    let graph = sitestack_core::build(&config, &env)?;
    let template = synthesize(&graph);

    if options.check {
        info!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            resources = template.resources.len(),
            "check passed",
        );
        return Ok(());
    }

    let mut engine = FileEngine {
        output: options.output,
    };
    engine.apply(&template)?;

    Ok(())
}

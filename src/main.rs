use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use staffgate::access::audit;
use staffgate::{AccessConfig, AccessPolicy};

const USAGE: &str = "usage: staffgate [--json] [policy.json]";

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut json = false;
    let mut policy_path: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => { println!("{}", USAGE); return Ok(()); }
            other if other.starts_with('-') => anyhow::bail!("unknown flag '{}'\n{}", other, USAGE),
            other => policy_path = Some(PathBuf::from(other)),
        }
    }

    // Env settings apply unless a policy file brings its own config section.
    let cfg = AccessConfig::from_env().context("reading STAFFGATE_* environment")?;
    let policy = match policy_path {
        Some(p) => AccessPolicy::from_file_with(&p, cfg).with_context(|| format!("loading policy '{}'", p.display()))?,
        None => {
            let policy = AccessPolicy::builtin(cfg);
            policy.validate()?;
            policy
        }
    };
    info!(
        target: "staffgate",
        "staffgate audit: unknown_route_default={:?} validate_dynamic_permissions={} pages={} features={}",
        policy.config.unknown_route_default, policy.config.validate_dynamic_permissions, policy.pages.len(), policy.features.len()
    );

    let policy = Arc::new(policy);
    let rows = audit::audit(&policy);
    if json {
        println!("{}", audit::render_json(&rows)?);
    } else {
        print!("{}", audit::render_text(&policy, &rows));
    }
    Ok(())
}

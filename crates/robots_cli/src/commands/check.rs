//! Check command - validate a manifest without writing anything.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use robots_core::RobotsTxt;

use crate::manifest::RobotsManifest;

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the manifest (.yaml, .yml, .toml or .json)
    #[arg(short, long)]
    pub manifest: PathBuf,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    info!("Checking manifest {:?}", args.manifest);

    let manifest = RobotsManifest::load(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;
    let robots = manifest.build().context("Manifest contains invalid rules")?;

    println!("✅ Manifest is valid: {}", args.manifest.display());
    for line in summarize(&robots) {
        println!("   {}", line);
    }

    Ok(())
}

/// One line per group, then the sitemap count.
fn summarize(robots: &RobotsTxt) -> Vec<String> {
    let mut lines = Vec::new();

    if !robots.global_rules().is_empty() {
        lines.push(format!("*: {} rules", robots.global_rules().len()));
    }
    for (crawler, rules) in robots.groups() {
        // The User-agent line is part of the group
        lines.push(format!("{}: {} rules", crawler.agent(), rules.len().saturating_sub(1)));
    }
    lines.push(format!("sitemaps: {}", robots.sitemap_rules().len()));

    lines
}

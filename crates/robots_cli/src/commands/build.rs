//! Build command - render a manifest and persist it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use robots_core::RobotsTxt;
use robots_writer::{FileSink, PersistenceResult, RobotsSink};

use crate::manifest::RobotsManifest;

#[derive(Args)]
pub struct BuildArgs {
    /// Path to the manifest (.yaml, .yml, .toml or .json)
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Output file (overrides the manifest's `output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the result instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Sink that prints rendered content to standard output.
struct StdoutSink;

impl RobotsSink for StdoutSink {
    fn persist(&self, content: &str) -> PersistenceResult<()> {
        println!("{}", content);
        Ok(())
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}

pub fn execute(args: BuildArgs) -> Result<()> {
    info!("Building robots file from {:?}", args.manifest);

    let manifest = RobotsManifest::load(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;

    if args.stdout {
        publish(&manifest, &StdoutSink)?;
        return Ok(());
    }

    let target = resolve_output(args.output, &manifest);
    let sink = FileSink::new(&target);
    let robots = publish(&manifest, &sink)?;

    println!("✅ Wrote {}", target.display());
    println!(
        "   {} global rules, {} crawler groups, {} sitemaps",
        robots.global_rules().len(),
        robots.groups().count(),
        robots.sitemap_rules().len()
    );

    Ok(())
}

/// Build the manifest and hand the rendered text to `sink`.
pub fn publish(manifest: &RobotsManifest, sink: &dyn RobotsSink) -> Result<RobotsTxt> {
    let robots = manifest.build().context("Manifest contains invalid rules")?;
    let content = robots.render();

    info!("Persisting {} bytes to {}", content.len(), sink.describe());
    sink.persist(&content)
        .with_context(|| format!("Failed to write robots file to {}", sink.describe()))?;

    Ok(robots)
}

/// `--output`, then the manifest's `output`, then `./robots.txt`.
fn resolve_output(cli: Option<PathBuf>, manifest: &RobotsManifest) -> PathBuf {
    cli.or_else(|| manifest.output.clone())
        .unwrap_or_else(|| PathBuf::from(FileSink::DEFAULT_FILE_NAME))
}

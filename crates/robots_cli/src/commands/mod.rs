//! CLI command definitions.
//!
//! Each subcommand maps to one way of driving the robots builder.

use clap::{Parser, Subcommand};

pub mod build;
pub mod check;
pub mod crawlers;

/// robots - build robots.txt files from manifests
#[derive(Parser)]
#[command(name = "robots")]
#[command(version, about = "Build robots.txt files from YAML, TOML or JSON manifests")]
#[command(long_about = r#"
Build robots.txt files from declarative manifests.

COMMANDS:
  build     → Render a manifest and write robots.txt
  check     → Validate a manifest without writing anything
  crawlers  → List the known crawlers and their User-agent strings

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or manifest
  3 - Validation failure
  4 - Persistence failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a manifest and write the robots file
    Build(build::BuildArgs),

    /// Validate a manifest and summarize its groups
    Check(check::CheckArgs),

    /// List known crawlers
    Crawlers(crawlers::CrawlersArgs),
}

//! Crawlers command - list the known crawler catalog.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use robots_core::{Crawler, CrawlerCategory};

#[derive(Args)]
pub struct CrawlersArgs {
    /// Only list crawlers in this category (e.g. search_engine, seo)
    #[arg(short, long)]
    pub category: Option<CrawlerCategory>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Row in the crawler listing.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct CrawlerEntry {
    name: &'static str,
    agent: &'static str,
    category: CrawlerCategory,
}

impl From<Crawler> for CrawlerEntry {
    fn from(crawler: Crawler) -> Self {
        Self {
            name: crawler.name(),
            agent: crawler.agent(),
            category: crawler.category(),
        }
    }
}

pub fn execute(args: CrawlersArgs) -> Result<()> {
    let entries = collect(args.category);

    if args.json {
        let json = serde_json::to_string_pretty(&entries).context("Failed to serialize crawlers")?;
        println!("{}", json);
        return Ok(());
    }

    println!("📋 Known crawlers ({})", entries.len());
    println!();
    for entry in &entries {
        println!("  {:<20} {:<28} {}", entry.name, entry.agent, entry.category);
    }

    Ok(())
}

fn collect(category: Option<CrawlerCategory>) -> Vec<CrawlerEntry> {
    match category {
        Some(category) => Crawler::in_category(category).map(CrawlerEntry::from).collect(),
        None => Crawler::ALL.iter().copied().map(CrawlerEntry::from).collect(),
    }
}

//! Robots manifest loading.
//!
//! A manifest describes one robots.txt file: global rules, per-crawler
//! groups and sitemaps. YAML, TOML and JSON are accepted, chosen by the
//! file extension.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use robots_core::{Crawler, RobotsTxt, ValidationError};

/// Errors that can occur while loading or applying a manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Unsupported manifest format: {0} (expected .yaml, .yml, .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to read manifest {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid rule #{index} in {group}: set exactly one of allow, disallow, crawl_delay")]
    InvalidRule { group: String, index: usize },

    #[error("Rule validation failed")]
    Validation(#[from] ValidationError),
}

/// Supported manifest encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Toml,
    Json,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ManifestError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// One rule line in a manifest. Exactly one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disallow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_delay: Option<i64>,
}

/// A rule entry after its shape has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RuleAction {
    Allow(String),
    Disallow(String),
    CrawlDelay(i64),
}

impl RuleEntry {
    fn action(&self, group: &str, index: usize) -> Result<RuleAction, ManifestError> {
        match (&self.allow, &self.disallow, self.crawl_delay) {
            (Some(path), None, None) => Ok(RuleAction::Allow(path.clone())),
            (None, Some(path), None) => Ok(RuleAction::Disallow(path.clone())),
            (None, None, Some(seconds)) => Ok(RuleAction::CrawlDelay(seconds)),
            _ => Err(ManifestError::InvalidRule {
                group: group.to_string(),
                index,
            }),
        }
    }
}

impl RuleAction {
    fn apply(&self, robots: &mut RobotsTxt) -> Result<(), ValidationError> {
        match self {
            RuleAction::Allow(path) => robots.allow(path.as_str())?,
            RuleAction::Disallow(path) => robots.disallow(path.as_str())?,
            RuleAction::CrawlDelay(seconds) => robots.crawl_delay(*seconds)?,
        };
        Ok(())
    }
}

/// Rules for the wildcard group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalSpec {
    #[serde(default)]
    pub disallow_all: bool,
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// Rules for a single crawler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentSpec {
    pub crawler: Crawler,
    #[serde(default)]
    pub disallow_all: bool,
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// A complete robots.txt description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RobotsManifest {
    /// Default output path, used when no `--output` is given.
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub global: GlobalSpec,
    #[serde(default)]
    pub agents: Vec<AgentSpec>,
    #[serde(default)]
    pub sitemaps: Vec<String>,
}

impl RobotsManifest {
    /// Load a manifest, choosing the parser from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let format = ManifestFormat::from_path(path)?;
        debug!("Loading {:?} manifest from {:?}", format, path);

        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, format)
    }

    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self, ManifestError> {
        let manifest: Self = match format {
            ManifestFormat::Yaml => serde_yaml::from_str(content)?,
            ManifestFormat::Toml => toml::from_str(content)?,
            ManifestFormat::Json => serde_json::from_str(content)?,
        };
        Ok(manifest)
    }

    /// Build the described robots file.
    ///
    /// Global rules come first, then each crawler group, then sitemaps. A
    /// group's `disallow_all` is applied after its rules.
    pub fn build(&self) -> Result<RobotsTxt, ManifestError> {
        let global = Self::actions("global", &self.global.rules)?;
        let agents = self
            .agents
            .iter()
            .map(|agent| {
                Self::actions(agent.crawler.agent(), &agent.rules)
                    .map(|actions| (agent, actions))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut robots = RobotsTxt::new();

        for action in &global {
            action.apply(&mut robots)?;
        }
        robots.disallow_all(self.global.disallow_all);

        for (agent, actions) in &agents {
            robots.for_user_agent(agent.crawler, |r| {
                for action in actions {
                    action.apply(r)?;
                }
                r.disallow_all(agent.disallow_all);
                Ok(())
            })?;
        }

        for url in &self.sitemaps {
            robots.sitemap(url.as_str())?;
        }

        debug!(
            "Built robots file: {} global rules, {} crawler groups, {} sitemaps",
            robots.global_rules().len(),
            robots.groups().count(),
            robots.sitemap_rules().len()
        );

        Ok(robots)
    }

    fn actions(group: &str, entries: &[RuleEntry]) -> Result<Vec<RuleAction>, ManifestError> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.action(group, index + 1))
            .collect()
    }
}

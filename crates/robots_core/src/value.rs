//! Validated directive values.
//!
//! Every value is checked when it is constructed, so a live instance always
//! satisfies its invariants. Values are immutable once built.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::crawler::Crawler;
use crate::error::{RobotsResult, ValidationError};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s").unwrap());

/// Capabilities shared by every directive value.
pub trait DirectiveValue {
    /// The raw payload type.
    type Raw;

    /// The raw payload.
    fn value(&self) -> Self::Raw;

    /// Canonical string form, written after the directive label.
    fn render(&self) -> String;

    /// Re-check the invariants. Always `Ok` for a constructed value.
    fn validate(&self) -> RobotsResult<()>;
}

/// A URL path such as `/admin` or `/*.php`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathValue(String);

impl PathValue {
    pub fn new(path: impl Into<String>) -> RobotsResult<Self> {
        let value = Self(path.into());
        value.validate()?;
        Ok(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl DirectiveValue for PathValue {
    type Raw = String;

    fn value(&self) -> String {
        self.0.clone()
    }

    fn render(&self) -> String {
        self.0.clone()
    }

    fn validate(&self) -> RobotsResult<()> {
        let path = self.0.as_str();

        if path.is_empty() {
            return Err(ValidationError::EmptyPath);
        }
        if !path.starts_with('/') {
            return Err(ValidationError::MissingLeadingSlash);
        }
        if path.contains('?') {
            return Err(ValidationError::PathQuery);
        }
        if path.contains('#') {
            return Err(ValidationError::PathFragment);
        }
        if WHITESPACE.is_match(path) {
            return Err(ValidationError::PathWhitespace);
        }

        Ok(())
    }
}

/// Seconds a crawler should wait between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelayValue(i64);

impl DelayValue {
    pub fn new(seconds: i64) -> RobotsResult<Self> {
        let value = Self(seconds);
        value.validate()?;
        Ok(value)
    }

    pub fn seconds(&self) -> i64 {
        self.0
    }
}

impl DirectiveValue for DelayValue {
    type Raw = i64;

    fn value(&self) -> i64 {
        self.0
    }

    fn render(&self) -> String {
        self.0.to_string()
    }

    fn validate(&self) -> RobotsResult<()> {
        if self.0 < 0 {
            return Err(ValidationError::NegativeCrawlDelay);
        }
        Ok(())
    }
}

/// A crawler identity. The catalog is closed, so there is nothing to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgentValue(Crawler);

impl AgentValue {
    pub fn new(crawler: Crawler) -> Self {
        Self(crawler)
    }

    pub fn crawler(&self) -> Crawler {
        self.0
    }
}

impl DirectiveValue for AgentValue {
    type Raw = Crawler;

    fn value(&self) -> Crawler {
        self.0
    }

    fn render(&self) -> String {
        self.0.agent().to_string()
    }

    fn validate(&self) -> RobotsResult<()> {
        Ok(())
    }
}

/// Absolute http(s) URL of an XML sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SitemapValue(String);

impl SitemapValue {
    pub fn new(url: impl Into<String>) -> RobotsResult<Self> {
        let value = Self(url.into());
        value.validate()?;
        Ok(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `raw` is an absolute URL with an authority and a host.
    ///
    /// The `url` crate silently strips or encodes whitespace and control
    /// characters and maps non-ASCII hosts through IDNA, so only plain
    /// printable ASCII gets as far as the parser.
    fn is_syntactically_valid(raw: &str) -> bool {
        if !raw.is_ascii() || raw.chars().any(|c| c.is_ascii_whitespace() || c.is_ascii_control()) {
            return false;
        }

        let Ok(parsed) = Url::parse(raw) else {
            return false;
        };

        let has_authority = raw
            .get(parsed.scheme().len()..)
            .is_some_and(|rest| rest.starts_with("://"));

        has_authority && parsed.host_str().is_some_and(|host| !host.is_empty())
    }
}

impl DirectiveValue for SitemapValue {
    type Raw = String;

    fn value(&self) -> String {
        self.0.clone()
    }

    fn render(&self) -> String {
        self.0.clone()
    }

    fn validate(&self) -> RobotsResult<()> {
        let raw = self.0.as_str();

        if raw.is_empty() {
            return Err(ValidationError::EmptySitemapUrl);
        }
        if !Self::is_syntactically_valid(raw) {
            return Err(ValidationError::InvalidSitemapUrl);
        }

        // Compare the scheme as written; Url::parse would lowercase it.
        let scheme = raw.split_once("://").map(|(scheme, _)| scheme);
        if !matches!(scheme, Some("http" | "https")) {
            return Err(ValidationError::SitemapScheme);
        }

        if !raw.ends_with(".xml") {
            return Err(ValidationError::SitemapExtension);
        }

        Ok(())
    }
}

/// The payload of a rule: one of the four value kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Path(PathValue),
    Delay(DelayValue),
    Agent(AgentValue),
    Sitemap(SitemapValue),
}

impl Value {
    pub fn render(&self) -> String {
        match self {
            Value::Path(v) => v.render(),
            Value::Delay(v) => v.render(),
            Value::Agent(v) => v.render(),
            Value::Sitemap(v) => v.render(),
        }
    }

    pub fn validate(&self) -> RobotsResult<()> {
        match self {
            Value::Path(v) => v.validate(),
            Value::Delay(v) => v.validate(),
            Value::Agent(v) => v.validate(),
            Value::Sitemap(v) => v.validate(),
        }
    }

    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Path(_) => "path",
            Value::Delay(_) => "delay",
            Value::Agent(_) => "agent",
            Value::Sitemap(_) => "sitemap",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<PathValue> for Value {
    fn from(v: PathValue) -> Self {
        Value::Path(v)
    }
}

impl From<DelayValue> for Value {
    fn from(v: DelayValue) -> Self {
        Value::Delay(v)
    }
}

impl From<AgentValue> for Value {
    fn from(v: AgentValue) -> Self {
        Value::Agent(v)
    }
}

impl From<SitemapValue> for Value {
    fn from(v: SitemapValue) -> Self {
        Value::Sitemap(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_path() {
        let path = PathValue::new("/valid/path").unwrap();
        assert_eq!(path.render(), "/valid/path");
        assert_eq!(path.value(), "/valid/path");
    }

    #[test]
    fn test_path_wildcards_are_allowed() {
        for raw in ["/public/*", "/*.php", "/private/$", "/"] {
            assert!(PathValue::new(raw).is_ok(), "{} rejected", raw);
        }
    }

    #[test]
    fn test_path_errors() {
        assert_eq!(PathValue::new("").unwrap_err(), ValidationError::EmptyPath);
        assert_eq!(PathValue::new("invalid/path").unwrap_err(), ValidationError::MissingLeadingSlash);
        assert_eq!(PathValue::new("/path?query=value").unwrap_err(), ValidationError::PathQuery);
        assert_eq!(PathValue::new("/path#fragment").unwrap_err(), ValidationError::PathFragment);
        assert_eq!(PathValue::new("/path with space").unwrap_err(), ValidationError::PathWhitespace);
        assert_eq!(PathValue::new("/tab\there").unwrap_err(), ValidationError::PathWhitespace);
    }

    #[test]
    fn test_path_check_order() {
        // Leading slash is checked before query and whitespace.
        assert_eq!(PathValue::new("a?b c").unwrap_err(), ValidationError::MissingLeadingSlash);
        // Query before fragment.
        assert_eq!(PathValue::new("/a#b?c").unwrap_err(), ValidationError::PathQuery);
        // Fragment before whitespace.
        assert_eq!(PathValue::new("/a b#c").unwrap_err(), ValidationError::PathFragment);
    }

    #[test]
    fn test_path_messages() {
        assert_eq!(PathValue::new("").unwrap_err().to_string(), "Path cannot be empty");
        assert_eq!(
            PathValue::new("x").unwrap_err().to_string(),
            "Path must start with forward slash (/)"
        );
    }

    #[test]
    fn test_path_equality() {
        let a = PathValue::new("/path").unwrap();
        let b = PathValue::new("/path").unwrap();
        let c = PathValue::new("/other").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_delay() {
        assert_eq!(DelayValue::new(0).unwrap().render(), "0");
        assert_eq!(DelayValue::new(10).unwrap().value(), 10);
        let err = DelayValue::new(-1).unwrap_err();
        assert_eq!(err, ValidationError::NegativeCrawlDelay);
        assert_eq!(err.to_string(), "Crawl delay cannot be negative");
    }

    #[test]
    fn test_agent_value() {
        let agent = AgentValue::new(Crawler::GoogleNews);
        assert_eq!(agent.render(), "Googlebot-News");
        assert_eq!(agent.value(), Crawler::GoogleNews);
        assert!(agent.validate().is_ok());
        assert_eq!(AgentValue::new(Crawler::Google), AgentValue::new(Crawler::Google));
        assert_ne!(AgentValue::new(Crawler::Google), AgentValue::new(Crawler::Bing));
    }

    #[test]
    fn test_valid_sitemaps() {
        for raw in [
            "https://example.com/sitemap.xml",
            "http://example.com/sitemap.xml",
            "https://example.com/a/b/news-sitemap.xml",
            "https://example.com:8443/sitemap.xml",
        ] {
            let sitemap = SitemapValue::new(raw).unwrap();
            assert_eq!(sitemap.render(), raw);
        }
    }

    #[test]
    fn test_sitemap_errors() {
        assert_eq!(SitemapValue::new("").unwrap_err(), ValidationError::EmptySitemapUrl);
        assert_eq!(SitemapValue::new("invalid-url").unwrap_err(), ValidationError::InvalidSitemapUrl);
        assert_eq!(SitemapValue::new("not-a-url").unwrap_err(), ValidationError::InvalidSitemapUrl);
        assert_eq!(
            SitemapValue::new("https://example.com/site map.xml").unwrap_err(),
            ValidationError::InvalidSitemapUrl
        );
        assert_eq!(SitemapValue::new("http:example.xml").unwrap_err(), ValidationError::InvalidSitemapUrl);
        assert_eq!(
            SitemapValue::new("https://exämple.com/sitemap.xml").unwrap_err(),
            ValidationError::InvalidSitemapUrl
        );
        assert_eq!(
            SitemapValue::new("https://example.com/sitemäp.xml").unwrap_err(),
            ValidationError::InvalidSitemapUrl
        );
        assert_eq!(
            SitemapValue::new("HTTPS://example.com/sitemap.xml").unwrap_err(),
            ValidationError::SitemapScheme
        );
        assert_eq!(
            SitemapValue::new("Http://example.com/sitemap.xml").unwrap_err(),
            ValidationError::SitemapScheme
        );
        assert_eq!(
            SitemapValue::new("ftp://example.com/sitemap.xml").unwrap_err(),
            ValidationError::SitemapScheme
        );
        assert_eq!(
            SitemapValue::new("https://example.com/sitemap.html").unwrap_err(),
            ValidationError::SitemapExtension
        );
        assert_eq!(
            SitemapValue::new("https://example.com/sitemap.xml?page=2").unwrap_err(),
            ValidationError::SitemapExtension
        );
    }

    #[test]
    fn test_sitemap_messages() {
        assert_eq!(SitemapValue::new("").unwrap_err().to_string(), "Sitemap URL cannot be empty");
        assert_eq!(SitemapValue::new("nope").unwrap_err().to_string(), "Invalid sitemap URL format");
        assert_eq!(
            SitemapValue::new("ftp://example.com/sitemap.xml").unwrap_err().to_string(),
            "Sitemap URL must use HTTP(S) protocol"
        );
        assert_eq!(
            SitemapValue::new("https://example.com/sitemap.txt").unwrap_err().to_string(),
            "Sitemap URL must be in .xml format"
        );
    }

    #[test]
    fn test_sitemap_equality() {
        let a = SitemapValue::new("https://example.com/sitemap.xml").unwrap();
        let b = SitemapValue::new("https://example.com/sitemap.xml").unwrap();
        let c = SitemapValue::new("https://example.com/other-sitemap.xml").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_value_equality_requires_same_kind() {
        let path: Value = PathValue::new("/10").unwrap().into();
        let delay: Value = DelayValue::new(10).unwrap().into();
        assert_ne!(path, delay);
        assert_eq!(path.kind(), "path");
        assert_eq!(delay.to_string(), "10");
    }
}

//! Error types for directive validation.

use thiserror::Error;

use crate::directive::Directive;

/// Result type alias for builder and value operations.
pub type RobotsResult<T> = Result<T, ValidationError>;

/// Errors raised when a directive value violates its invariants.
///
/// The display text of each variant is stable; callers and tests match on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Path cannot be empty")]
    EmptyPath,

    #[error("Path must start with forward slash (/)")]
    MissingLeadingSlash,

    #[error("Path cannot contain query parameters")]
    PathQuery,

    #[error("Path cannot contain fragments")]
    PathFragment,

    #[error("Path cannot contain whitespace")]
    PathWhitespace,

    #[error("Crawl delay cannot be negative")]
    NegativeCrawlDelay,

    #[error("Sitemap URL cannot be empty")]
    EmptySitemapUrl,

    #[error("Invalid sitemap URL format")]
    InvalidSitemapUrl,

    #[error("Sitemap URL must use HTTP(S) protocol")]
    SitemapScheme,

    #[error("Sitemap URL must be in .xml format")]
    SitemapExtension,

    #[error("{directive} directive cannot carry a {found} value")]
    IncompatibleValue {
        directive: Directive,
        found: &'static str,
    },

    #[error("Unknown crawler: {0}")]
    UnknownCrawler(String),
}

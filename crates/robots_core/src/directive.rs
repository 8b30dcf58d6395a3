//! The closed set of directive kinds understood by crawlers.

use std::fmt;

/// A robots.txt directive.
///
/// Each kind is bound to exactly one label, written verbatim in front of the
/// colon on every output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Allow,
    Disallow,
    UserAgent,
    CrawlDelay,
    Sitemap,
}

impl Directive {
    /// All directive kinds, in declaration order.
    pub const ALL: [Directive; 5] = [
        Directive::Allow,
        Directive::Disallow,
        Directive::UserAgent,
        Directive::CrawlDelay,
        Directive::Sitemap,
    ];

    /// The output label for this directive.
    pub fn label(&self) -> &'static str {
        match self {
            Directive::Allow => "Allow",
            Directive::Disallow => "Disallow",
            Directive::UserAgent => "User-agent",
            Directive::CrawlDelay => "Crawl-delay",
            Directive::Sitemap => "Sitemap",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

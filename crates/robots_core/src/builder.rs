//! The robots.txt builder.

use std::fmt;

use tracing::debug;

use crate::crawler::Crawler;
use crate::error::RobotsResult;
use crate::render;
use crate::rule::Rule;
use crate::value::{DelayValue, PathValue, SitemapValue};

/// Path used by [`RobotsTxt::disallow_all`].
pub const DISALLOW_ALL_PATH: &str = "/*";

/// Rules that apply to a single crawler.
///
/// The first rule is always the `User-agent` seed for that crawler.
#[derive(Debug, Clone)]
struct ScopeGroup {
    crawler: Crawler,
    rules: Vec<Rule>,
}

/// Accumulates directives and renders them as a robots.txt file.
///
/// Rules are routed to the current crawler scope, or to the global `*` group
/// when no scope is active. Sitemaps are kept apart and always render last.
///
/// ```
/// use robots_core::{Crawler, RobotsTxt};
///
/// let mut robots = RobotsTxt::new();
/// robots
///     .disallow("/admin")?
///     .user_agent(Crawler::Google)
///     .allow("/public")?
///     .sitemap("https://example.com/sitemap.xml")?;
///
/// assert_eq!(
///     robots.render(),
///     "User-agent: *\nDisallow: /admin\n\nUser-agent: Googlebot\nAllow: /public\n\nSitemap: https://example.com/sitemap.xml"
/// );
/// # Ok::<(), robots_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RobotsTxt {
    global_rules: Vec<Rule>,
    scoped_rules: Vec<ScopeGroup>,
    sitemap_rules: Vec<Rule>,
    current_scope: Option<Crawler>,
}

impl RobotsTxt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow access to a path in the current scope.
    pub fn allow(&mut self, path: impl Into<String>) -> RobotsResult<&mut Self> {
        let rule = Rule::allow(PathValue::new(path)?);
        Ok(self.add_rule(rule))
    }

    /// Disallow access to a path in the current scope.
    pub fn disallow(&mut self, path: impl Into<String>) -> RobotsResult<&mut Self> {
        let rule = Rule::disallow(PathValue::new(path)?);
        Ok(self.add_rule(rule))
    }

    /// Set the crawl delay for the current scope.
    pub fn crawl_delay(&mut self, seconds: i64) -> RobotsResult<&mut Self> {
        let rule = Rule::crawl_delay(DelayValue::new(seconds)?);
        Ok(self.add_rule(rule))
    }

    /// Make `crawler` the current scope.
    ///
    /// The first time a crawler is seen its group is created and seeded with
    /// the `User-agent` line. Repeat calls only switch the scope.
    pub fn user_agent(&mut self, crawler: Crawler) -> &mut Self {
        self.current_scope = Some(crawler);

        if self.group_index(crawler).is_none() {
            debug!("Opening scope for {}", crawler.agent());
            self.scoped_rules.push(ScopeGroup {
                crawler,
                rules: vec![Rule::user_agent(crawler)],
            });
        }

        self
    }

    /// Run `body` with `crawler` as the current scope, then restore the
    /// previous scope.
    ///
    /// The previous scope is restored even when `body` fails; the error is
    /// returned afterwards. Rules added before the failure are kept.
    pub fn for_user_agent<F>(&mut self, crawler: Crawler, body: F) -> RobotsResult<&mut Self>
    where
        F: FnOnce(&mut Self) -> RobotsResult<()>,
    {
        let previous = self.current_scope;
        self.user_agent(crawler);

        let outcome = body(self);
        self.current_scope = previous;

        outcome.map(|()| self)
    }

    /// Add a sitemap reference. Sitemaps are never scoped.
    pub fn sitemap(&mut self, url: impl Into<String>) -> RobotsResult<&mut Self> {
        let rule = Rule::sitemap(SitemapValue::new(url)?);
        self.sitemap_rules.push(rule);
        Ok(self)
    }

    /// Replace every rule in the current scope with `Disallow: /*`.
    ///
    /// A crawler scope keeps its `User-agent` seed. Other scopes and sitemaps
    /// are untouched. Does nothing when `disallow` is false.
    pub fn disallow_all(&mut self, disallow: bool) -> &mut Self {
        if !disallow {
            return self;
        }

        let rule = Rule::disallow(disallow_all_path());

        match self.current_scope.and_then(|c| self.group_index(c)) {
            Some(index) => {
                let group = &mut self.scoped_rules[index];
                debug!("Disallowing everything for {}", group.crawler.agent());
                group.rules.truncate(1);
                group.rules.push(rule);
            }
            None => {
                debug!("Disallowing everything for all crawlers");
                self.global_rules.clear();
                self.global_rules.push(rule);
            }
        }

        self
    }

    /// Shorthand for `disallow_all(true)`.
    pub fn disallow_all_paths(&mut self) -> &mut Self {
        self.disallow_all(true)
    }

    /// The crawler new rules are routed to, or `None` for the global group.
    pub fn current_scope(&self) -> Option<Crawler> {
        self.current_scope
    }

    pub fn global_rules(&self) -> &[Rule] {
        &self.global_rules
    }

    /// Crawler groups in first-seen order, each starting with its seed rule.
    pub fn groups(&self) -> impl Iterator<Item = (Crawler, &[Rule])> + '_ {
        self.scoped_rules
            .iter()
            .map(|group| (group.crawler, group.rules.as_slice()))
    }

    /// Rules for one crawler, if it has been scoped.
    pub fn rules_for(&self, crawler: Crawler) -> Option<&[Rule]> {
        self.group_index(crawler)
            .map(|index| self.scoped_rules[index].rules.as_slice())
    }

    pub fn sitemap_rules(&self) -> &[Rule] {
        &self.sitemap_rules
    }

    pub fn is_empty(&self) -> bool {
        self.global_rules.is_empty() && self.scoped_rules.is_empty() && self.sitemap_rules.is_empty()
    }

    /// Render the accumulated rules as robots.txt text.
    pub fn render(&self) -> String {
        render::render(self)
    }

    fn add_rule(&mut self, rule: Rule) -> &mut Self {
        match self.current_scope.and_then(|c| self.group_index(c)) {
            Some(index) => self.scoped_rules[index].rules.push(rule),
            None => self.global_rules.push(rule),
        }
        self
    }

    fn group_index(&self, crawler: Crawler) -> Option<usize> {
        self.scoped_rules.iter().position(|g| g.crawler == crawler)
    }
}

impl fmt::Display for RobotsTxt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn disallow_all_path() -> PathValue {
    // DISALLOW_ALL_PATH is a constant that satisfies every path invariant.
    match PathValue::new(DISALLOW_ALL_PATH) {
        Ok(path) => path,
        Err(e) => unreachable!("{} is a valid path: {}", DISALLOW_ALL_PATH, e),
    }
}

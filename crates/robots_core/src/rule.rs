//! A single directive line.

use std::fmt;

use crate::crawler::Crawler;
use crate::directive::Directive;
use crate::error::{RobotsResult, ValidationError};
use crate::value::{AgentValue, DelayValue, PathValue, SitemapValue, Value};

/// A directive paired with a compatible value.
///
/// Renders as `"{label}: {value}"`. Two rules compare equal when their
/// rendered lines are identical, regardless of how they were built.
#[derive(Debug, Clone)]
pub struct Rule {
    directive: Directive,
    value: Value,
}

impl Rule {
    /// Pair a directive with a value, checking that the value kind fits.
    pub fn new(directive: Directive, value: Value) -> RobotsResult<Self> {
        let compatible = matches!(
            (directive, &value),
            (Directive::Allow | Directive::Disallow, Value::Path(_))
                | (Directive::CrawlDelay, Value::Delay(_))
                | (Directive::UserAgent, Value::Agent(_))
                | (Directive::Sitemap, Value::Sitemap(_))
        );

        if !compatible {
            return Err(ValidationError::IncompatibleValue {
                directive,
                found: value.kind(),
            });
        }

        Ok(Self { directive, value })
    }

    pub fn allow(path: PathValue) -> Self {
        Self {
            directive: Directive::Allow,
            value: Value::Path(path),
        }
    }

    pub fn disallow(path: PathValue) -> Self {
        Self {
            directive: Directive::Disallow,
            value: Value::Path(path),
        }
    }

    pub fn crawl_delay(delay: DelayValue) -> Self {
        Self {
            directive: Directive::CrawlDelay,
            value: Value::Delay(delay),
        }
    }

    pub fn user_agent(crawler: Crawler) -> Self {
        Self {
            directive: Directive::UserAgent,
            value: Value::Agent(AgentValue::new(crawler)),
        }
    }

    pub fn sitemap(url: SitemapValue) -> Self {
        Self {
            directive: Directive::Sitemap,
            value: Value::Sitemap(url),
        }
    }

    pub fn directive(&self) -> Directive {
        self.directive
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The full output line, without a trailing newline.
    pub fn render(&self) -> String {
        format!("{}: {}", self.directive.label(), self.value.render())
    }

    pub fn validate(&self) -> RobotsResult<()> {
        self.value.validate()
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.render() == other.render()
    }
}

impl Eq for Rule {}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.directive.label(), self.value)
    }
}

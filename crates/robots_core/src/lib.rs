//! # robots_core
//!
//! Builder and serializer for robots.txt files.
//!
//! Directives are validated when they are added, grouped by crawler scope in
//! the order they were written, and rendered to the canonical text format.
//! This crate performs no I/O; persisting the rendered text is left to
//! `robots_writer`.
//!
//! ## Output layout
//!
//! 1. Global rules under `User-agent: *`
//! 2. One group per crawler, in first-seen order
//! 3. Sitemap references
//!
//! ## Example
//!
//! ```rust
//! use robots_core::{Crawler, RobotsTxt};
//!
//! let mut robots = RobotsTxt::new();
//! robots.disallow("/admin")?;
//! robots.for_user_agent(Crawler::Google, |r| {
//!     r.allow("/public")?.crawl_delay(10)?;
//!     Ok(())
//! })?;
//! robots.sitemap("https://example.com/sitemap.xml")?;
//!
//! println!("{}", robots);
//! # Ok::<(), robots_core::ValidationError>(())
//! ```

pub mod builder;
pub mod crawler;
pub mod directive;
pub mod error;
pub mod render;
pub mod rule;
pub mod value;

pub use builder::{RobotsTxt, DISALLOW_ALL_PATH};
pub use crawler::{Crawler, CrawlerCategory};
pub use directive::Directive;
pub use error::{RobotsResult, ValidationError};
pub use render::GLOBAL_HEADER;
pub use rule::Rule;
pub use value::{AgentValue, DelayValue, DirectiveValue, PathValue, SitemapValue, Value};

//! Text rendering for [`RobotsTxt`].
//!
//! Output order is fixed: the global `*` group, then crawler groups in the
//! order they were first scoped, then sitemaps. Groups are separated by one
//! blank line and the result has no leading or trailing newline.

use crate::builder::RobotsTxt;
use crate::rule::Rule;

/// Header line for rules that apply to every crawler.
pub const GLOBAL_HEADER: &str = "User-agent: *";

/// Render a builder's state. An empty builder renders to `""`.
pub fn render(robots: &RobotsTxt) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !robots.global_rules().is_empty() {
        lines.push(GLOBAL_HEADER.to_string());
        push_group(&mut lines, robots.global_rules());
    }

    for (_, rules) in robots.groups() {
        push_group(&mut lines, rules);
    }

    if !robots.sitemap_rules().is_empty() {
        push_group(&mut lines, robots.sitemap_rules());
    }

    lines.join("\n").trim_matches('\n').to_string()
}

fn push_group(lines: &mut Vec<String>, rules: &[Rule]) {
    lines.extend(rules.iter().map(Rule::render));
    lines.push(String::new());
}

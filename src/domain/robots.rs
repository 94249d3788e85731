//! robots.txt merge: generator-owned directives are rewritten, user lines kept.

use crate::domain::canonical::BaseUrl;

/// Output file name, relative to the site root.
pub const ROBOTS_FILE: &str = "robots.txt";

/// Directive set the generator owns inside robots.txt.
#[derive(Debug, Clone)]
pub struct RobotsPolicy<'a> {
    base: &'a BaseUrl,
    disallow: &'a [String],
}

impl<'a> RobotsPolicy<'a> {
    pub fn new(base: &'a BaseUrl, disallow: &'a [String]) -> Self {
        Self { base, disallow }
    }

    /// Merge with the previous artifact, if any, and return the new content.
    ///
    /// User-authored lines keep their text and relative order; blank-line runs
    /// among them collapse to one so repeated merges reach a fixed point.
    pub fn merge(&self, existing: Option<&str>) -> String {
        let user_lines = existing.map(|content| self.user_lines(content)).unwrap_or_default();

        let mut lines: Vec<String> = Vec::new();
        if !user_lines.is_empty() {
            lines.extend(user_lines.into_iter().map(String::from));
            lines.push(String::new());
        }
        lines.extend(self.owned_block());

        let mut content = lines.join("\n");
        content.push('\n');
        content
    }

    fn owned_block(&self) -> Vec<String> {
        let mut block = vec!["User-agent: *".to_string(), "Allow: /".to_string()];
        if !self.disallow.is_empty() {
            block.push(String::new());
            block.extend(self.disallow.iter().map(|prefix| format!("Disallow: {}", prefix)));
        }
        block.push(String::new());
        block.push(format!("Sitemap: {}", self.base.sitemap_url()));
        block
    }

    fn user_lines<'c>(&self, content: &'c str) -> Vec<&'c str> {
        let mut kept: Vec<&str> = Vec::new();
        for line in content.lines() {
            if self.is_owned(line) {
                continue;
            }
            let blank = line.trim().is_empty();
            if blank && kept.last().is_none_or(|prev| prev.trim().is_empty()) {
                continue;
            }
            kept.push(line);
        }
        while kept.last().is_some_and(|line| line.trim().is_empty()) {
            kept.pop();
        }
        kept
    }

    /// User directives that sat in a `User-agent: *` group the merge removes.
    ///
    /// After the merge they join whichever group precedes them.
    pub fn regrouped_directives<'c>(&self, content: &'c str) -> Vec<&'c str> {
        let mut regrouped = Vec::new();
        let mut wildcard_dropped = false;
        let mut in_agent_run = false;

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let owned = self.is_owned(line);
            if directive(line).is_some_and(|(key, _)| key == "user-agent") {
                if !in_agent_run {
                    wildcard_dropped = false;
                }
                wildcard_dropped |= owned;
                in_agent_run = true;
                continue;
            }
            in_agent_run = false;
            if wildcard_dropped && !owned {
                regrouped.push(line);
            }
        }
        regrouped
    }

    fn is_owned(&self, line: &str) -> bool {
        let Some((key, value)) = directive(line) else {
            return false;
        };

        match key.as_str() {
            "sitemap" => true,
            "user-agent" => value == "*",
            "allow" => value == "/",
            "disallow" => self.disallow.iter().any(|prefix| prefix.eq_ignore_ascii_case(value)),
            _ => false,
        }
    }
}

/// Lowercased key and trimmed value of a `key: value` line.
fn directive(line: &str) -> Option<(String, &str)> {
    let (key, value) = line.trim().split_once(':')?;
    Some((key.trim().to_ascii_lowercase(), value.trim()))
}

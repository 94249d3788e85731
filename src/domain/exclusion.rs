//! Exclusion rules applied to every candidate page path.

use serde::Deserialize;

/// Static rule set deciding which HTML files never reach the sitemap.
///
/// Every rule is evaluated independently against a POSIX-style relative path,
/// so the outcome does not depend on rule order or on how often it is applied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExclusionPolicy {
    /// Directory names excluded wherever they appear in the path.
    #[serde(default = "default_dirs")]
    pub dirs: Vec<String>,
    /// Exact file names that are never published.
    #[serde(default = "default_files")]
    pub files: Vec<String>,
    /// Case-insensitive substrings marking non-production file names.
    #[serde(default = "default_name_contains")]
    pub name_contains: Vec<String>,
    /// Skip any path with a component starting with `.`.
    #[serde(default = "default_true")]
    pub hidden: bool,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self {
            dirs: default_dirs(),
            files: default_files(),
            name_contains: default_name_contains(),
            hidden: default_true(),
        }
    }
}

impl ExclusionPolicy {
    /// Whether a directory with this name should be pruned from the walk.
    pub fn excludes_dir(&self, name: &str) -> bool {
        (self.hidden && name.starts_with('.')) || self.dirs.iter().any(|d| d == name)
    }

    /// Whether a relative path (POSIX separators) is excluded by any rule.
    pub fn excludes(&self, relative_path: &str) -> bool {
        let mut components: Vec<&str> =
            relative_path.split('/').filter(|part| !part.is_empty()).collect();
        let Some(file_name) = components.pop() else {
            return true;
        };

        if components.iter().any(|dir| self.excludes_dir(dir)) {
            return true;
        }

        if self.files.iter().any(|f| f == file_name) {
            return true;
        }

        let lowered = file_name.to_lowercase();
        if self.name_contains.iter().any(|term| lowered.contains(&term.to_lowercase())) {
            return true;
        }

        self.hidden && file_name.starts_with('.')
    }
}

fn default_dirs() -> Vec<String> {
    [
        ".git",
        ".github",
        "node_modules",
        "content_pipeline",
        "seo_audit",
        "analytics_report",
        "scripts",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_files() -> Vec<String> {
    vec!["404.html".to_string(), "index2.html".to_string()]
}

fn default_name_contains() -> Vec<String> {
    ["test", "teste", "draft", "rascunho", "tmp", "backup", "old"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excluded_directory_anywhere_in_path() {
        let policy = ExclusionPolicy::default();
        assert!(policy.excludes("content_pipeline/templates/article.html"));
        assert!(policy.excludes("artigos/content_pipeline/page.html"));
        assert!(policy.excludes("node_modules/pkg/readme.html"));
        assert!(!policy.excludes("artigos/sono.html"));
    }

    #[test]
    fn exact_file_names_are_excluded() {
        let policy = ExclusionPolicy::default();
        assert!(policy.excludes("404.html"));
        assert!(policy.excludes("artigos/index2.html"));
        assert!(!policy.excludes("index.html"));
    }

    #[test]
    fn name_substrings_match_case_insensitively() {
        let policy = ExclusionPolicy::default();
        assert!(policy.excludes("artigos/Rascunho-cha.html"));
        assert!(policy.excludes("page-BACKUP.html"));
        assert!(policy.excludes("teste.html"));
        assert!(!policy.excludes("artigos/magnesio.html"));
    }

    #[test]
    fn substring_rules_apply_to_file_name_only() {
        let policy = ExclusionPolicy::default();
        // "testimonials" directory does not trigger the "test" name rule.
        assert!(!policy.excludes("testimonials/clientes.html"));
    }

    #[test]
    fn hidden_components_follow_the_switch() {
        let mut policy = ExclusionPolicy::default();
        assert!(policy.excludes(".cache/page.html"));
        assert!(policy.excludes("artigos/.preview.html"));

        policy.hidden = false;
        assert!(!policy.excludes("artigos/.preview.html"));
        assert!(!policy.excludes(".well-known/page.html"));
        assert!(policy.excludes(".git/page.html"));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let policy = ExclusionPolicy::default();
        let paths = ["index.html", "scripts/x.html", "a/draft.html", "a/b.html"];
        let first: Vec<bool> = paths.iter().map(|p| policy.excludes(p)).collect();
        let second: Vec<bool> = paths.iter().map(|p| policy.excludes(p)).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![false, true, true, false]);
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let policy: ExclusionPolicy = toml::from_str("dirs = [\"assets\"]").unwrap();
        assert_eq!(policy.dirs, vec!["assets".to_string()]);
        assert_eq!(policy.files, default_files());
        assert!(policy.hidden);
    }
}

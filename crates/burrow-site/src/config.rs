//! Configuration for the static export build.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "Site.toml";

/// Environment variable overriding [`SiteConfig::out_dir`]
pub const ENV_OUT_DIR: &str = "BURROW_OUT_DIR";

/// Environment variable overriding [`SiteConfig::base_url`]
pub const ENV_BASE_URL: &str = "BURROW_BASE_URL";

/// Where and how the pre-rendered page is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory receiving `index.html`.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Public path the site is served under, e.g. "/" or "/repo-name/".
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Remove existing contents of `out_dir` before writing.
    #[serde(default = "default_empty_out_dir")]
    pub empty_out_dir: bool,

    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Stylesheet path relative to `base_url`.
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_base_url() -> String {
    "/".to_string()
}

const fn default_empty_out_dir() -> bool {
    true
}

fn default_title() -> String {
    crate::models::content::BRAND.to_string()
}

fn default_stylesheet() -> String {
    "tailwind.css".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            base_url: default_base_url(),
            empty_out_dir: default_empty_out_dir(),
            title: default_title(),
            stylesheet: default_stylesheet(),
        }
    }
}

impl SiteConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SiteError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| SiteError::io("read", path, e))?;
        Self::from_toml_str(&text)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a config file exists but cannot be read or parsed.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply overrides from the process environment.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` in place of the environment.
    #[must_use]
    pub fn with_env_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(ENV_OUT_DIR).filter(|v| !v.is_empty()) {
            self.out_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
        self
    }

    /// Check the settings against the process working directory.
    ///
    /// # Errors
    ///
    /// Returns error if the working directory cannot be determined, or see
    /// [`SiteConfig::validate_in`].
    pub fn validate(&self) -> Result<()> {
        let cwd = std::env::current_dir().map_err(|e| SiteError::io("resolve", ".", e))?;
        self.validate_in(&cwd)
    }

    /// Check the settings before anything touches the filesystem, resolving
    /// a relative `out_dir` against `cwd`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidOutDir`] for an empty output directory or
    /// one that is `cwd` or any of its ancestors, [`SiteError::InvalidBaseUrl`]
    /// for a base URL not wrapped in slashes.
    pub fn validate_in(&self, cwd: &Path) -> Result<()> {
        if self.out_dir.as_os_str().is_empty() {
            return Err(SiteError::InvalidOutDir(self.out_dir.clone()));
        }
        let cwd = resolve_dir(cwd, Path::new("."));
        let out_dir = resolve_dir(&cwd, &self.out_dir);
        if cwd.starts_with(&out_dir) {
            return Err(SiteError::InvalidOutDir(self.out_dir.clone()));
        }
        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(SiteError::InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(())
    }

    /// Public URL of the stylesheet.
    pub fn stylesheet_href(&self) -> String {
        format!("{}{}", self.base_url, self.stylesheet.trim_start_matches('/'))
    }
}

/// Absolute form of `dir` relative to `base`
///
/// Existing paths are canonicalized so symlinks resolve; anything else is
/// normalized lexically.
pub fn resolve_dir(base: &Path, dir: &Path) -> PathBuf {
    let joined = base.join(dir);
    if let Ok(canonical) = joined.canonicalize() {
        return canonical;
    }
    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_bundler_settings() {
        let config = SiteConfig::default();
        assert_eq!(config.out_dir, PathBuf::from("docs"));
        assert_eq!(config.base_url, "/");
        assert!(config.empty_out_dir);
        assert_eq!(config.title, "Bit Burrow Co");
    }

    #[test]
    fn test_empty_toml_gives_defaults() -> Result<()> {
        assert_eq!(SiteConfig::from_toml_str("")?, SiteConfig::default());
        Ok(())
    }

    #[test]
    fn test_toml_overrides() -> Result<()> {
        let config = SiteConfig::from_toml_str(
            r#"
            out_dir = "public"
            base_url = "/burrow/"
            empty_out_dir = false
            "#,
        )?;
        assert_eq!(config.out_dir, PathBuf::from("public"));
        assert_eq!(config.base_url, "/burrow/");
        assert!(!config.empty_out_dir);
        assert_eq!(config.stylesheet, "tailwind.css");
        Ok(())
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = SiteConfig::from_toml_str("outdir = \"x\"");
        assert!(matches!(result, Err(SiteError::Config(_))));
    }

    #[test]
    fn test_env_overrides() {
        let config = SiteConfig::default().with_env_lookup(|key| match key {
            ENV_OUT_DIR => Some("dist".to_string()),
            ENV_BASE_URL => Some("/site/".to_string()),
            _ => None,
        });
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert_eq!(config.base_url, "/site/");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = SiteConfig::default().with_env_lookup(|_| Some(String::new()));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = SiteConfig {
            base_url: "burrow".to_string(),
            ..SiteConfig::default()
        };
        let result = config.validate_in(Path::new("/srv/site"));
        assert!(matches!(result, Err(SiteError::InvalidBaseUrl(_))));
    }

    fn with_out_dir(dir: impl Into<PathBuf>) -> SiteConfig {
        SiteConfig {
            out_dir: dir.into(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_validate_rejects_root_and_empty_out_dir() {
        let cwd = Path::new("/srv/site");
        for dir in ["", "/"] {
            let result = with_out_dir(dir).validate_in(cwd);
            assert!(matches!(result, Err(SiteError::InvalidOutDir(_))), "{dir:?}");
        }
    }

    #[test]
    fn test_validate_rejects_working_directory_and_parents() -> Result<()> {
        let temp = tempfile::tempdir().map_err(|e| SiteError::io("create", "tempdir", e))?;
        let cwd = temp.path().join("project");
        std::fs::create_dir(&cwd).map_err(|e| SiteError::io("create", &cwd, e))?;

        let ancestor = temp.path().to_path_buf();
        for dir in [PathBuf::from("."), PathBuf::from(".."), PathBuf::from("docs/../.."), ancestor] {
            let result = with_out_dir(dir.clone()).validate_in(&cwd);
            assert!(matches!(result, Err(SiteError::InvalidOutDir(_))), "{}", dir.display());
        }
        Ok(())
    }

    #[test]
    fn test_validate_accepts_child_and_sibling_directories() {
        let cwd = Path::new("/srv/site/project");
        for dir in ["docs", "./docs", "../public", "/srv/other"] {
            assert!(with_out_dir(dir).validate_in(cwd).is_ok(), "{dir}");
        }
    }

    #[test]
    fn test_resolve_dir_normalizes_missing_paths() {
        let resolved = resolve_dir(Path::new("/no/such/base"), Path::new("./a/../b"));
        assert_eq!(resolved, PathBuf::from("/no/such/base/b"));
    }

    #[test]
    fn test_stylesheet_href() {
        let config = SiteConfig {
            base_url: "/burrow/".to_string(),
            stylesheet: "/tailwind.css".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.stylesheet_href(), "/burrow/tailwind.css");
    }

    #[test]
    fn test_discover_explicit_missing_file_fails() {
        let result = SiteConfig::discover(Some(Path::new("does/not/exist.toml")));
        assert!(matches!(result, Err(SiteError::Io { .. })));
    }
}

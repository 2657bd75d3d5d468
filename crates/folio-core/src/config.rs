//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    navigation::{ACTIVATION_MARGIN, MatchPolicy, ScrollSpy},
    theme::{DEFAULT_STORAGE_KEY, ThemePreference},
};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Theme settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Navigation bar and scroll tracking settings.
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Preview server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Path prefix the exported site is served under (e.g., "/portfolio").
    #[serde(default)]
    pub base_path: String,

    /// Document language code.
    #[serde(default = "default_language")]
    pub language: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// `localStorage` key holding the preference.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Preference used when nothing is persisted.
    #[serde(default)]
    pub default: ThemePreference,
}

/// Navigation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Offset subtracted from each section top, matching the header height.
    #[serde(default = "default_activation_margin")]
    pub activation_margin: f64,

    /// Tie-break when section ranges overlap.
    #[serde(default)]
    pub match_policy: MatchPolicy,

    /// Links shown in the navigation bar, in order.
    #[serde(default = "default_links")]
    pub links: Vec<NavEntry>,
}

/// A navigation bar entry pointing at a page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display label.
    pub label: String,

    /// Section id, without the leading `#`.
    pub target: String,
}

impl NavEntry {
    /// Create a new entry.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }

    /// In-page `href` for this entry.
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// Preview server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind.
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Directory holding the exported site.
    #[serde(default = "default_site_root")]
    pub site_root: String,
}

// Default value functions
fn default_language() -> String {
    "en".to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_activation_margin() -> f64 {
    ACTIVATION_MARGIN
}

fn default_links() -> Vec<NavEntry> {
    vec![
        NavEntry::new("About", "about"),
        NavEntry::new("Experience", "experience"),
        NavEntry::new("Projects", "projects"),
        NavEntry::new("Contact", "contact"),
    ]
}

fn default_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_site_root() -> String {
    "target/site".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default: ThemePreference::default(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            activation_margin: default_activation_margin(),
            match_policy: MatchPolicy::default(),
            links: default_links(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            site_root: default_site_root(),
        }
    }
}

impl NavigationConfig {
    /// Scroll spy configured with this margin and policy.
    pub fn scroll_spy(&self) -> ScrollSpy {
        ScrollSpy::new()
            .with_margin(self.activation_margin)
            .with_policy(self.match_policy)
    }
}

impl Config {
    /// Load configuration from a TOML file, layering `FOLIO__*` environment
    /// variables over it.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()
            .map_err(|e| {
                CoreError::config_with_source(
                    format!("Failed to read config file: {}", path.display()),
                    e,
                )
            })?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text, e.g. a file embedded at compile time.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        let base = &self.site.base_path;
        if !base.is_empty() && (!base.starts_with('/') || base.ends_with('/')) {
            return Err(CoreError::config(
                "site.base_path must start with '/' and not end with '/'",
            ));
        }

        let margin = self.navigation.activation_margin;
        if !margin.is_finite() || margin < 0.0 {
            return Err(CoreError::config(
                "navigation.activation_margin must be a finite, non-negative number",
            ));
        }

        if let Some(entry) = self
            .navigation
            .links
            .iter()
            .find(|entry| entry.target.is_empty() || entry.target.starts_with('#'))
        {
            return Err(CoreError::config(format!(
                "navigation link '{}' needs a section id without '#'",
                entry.label
            )));
        }

        if self.theme.storage_key.is_empty() {
            tracing::warn!("theme.storage_key is empty; falling back to \"{DEFAULT_STORAGE_KEY}\"");
        }

        Ok(())
    }

    /// Storage key for the theme preference.
    pub fn storage_key(&self) -> &str {
        if self.theme.storage_key.is_empty() {
            DEFAULT_STORAGE_KEY
        } else {
            &self.theme.storage_key
        }
    }

    /// Get the site URL for a path under the base path.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.site.base_path, path)
    }
}

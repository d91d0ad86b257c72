//! Site configuration management for `blogmeta.toml`.
//!
//! # Sections
//!
//! | Section              | Purpose                                         |
//! |----------------------|-------------------------------------------------|
//! | `[site]`             | Site identity (name, descriptions, host)        |
//! | `[seo]`              | Title, description and pagination rules         |
//! | `[social]`           | Open Graph / Twitter / Facebook identifiers     |
//! | `[structured_data]`  | Organization logo for the JSON-LD graph         |
//!
//! Every field has a default, so a missing config file yields a usable site.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "My Blog"
//! short_description = "Notes on programming"
//! host = "https://example.com"
//!
//! [seo]
//! page_label = "Page {n}"
//! pagination_segment = "page"
//!
//! [social]
//! twitter_site = "@example"
//! ```

pub mod defaults;
mod error;
mod seo;
mod site;

pub use error::ConfigError;
pub use seo::{SeoConfig, SocialConfig, StructuredDataConfig};
pub use site::SiteInfo;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing blogmeta.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Path to the config file (set after loading, may not exist)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity
    #[serde(default)]
    pub site: SiteInfo,

    /// Title and link rules
    #[serde(default)]
    pub seo: SeoConfig,

    /// Social platform identifiers
    #[serde(default)]
    pub social: SocialConfig,

    /// JSON-LD organization data
    #[serde(default)]
    pub structured_data: StructuredDataConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load configuration for the CLI invocation.
    ///
    /// Falls back to defaults when the config file does not exist.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.config_path = config_path;
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.site.host, cli.host.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate values the synthesizer relies on.
    pub fn validate(&self) -> Result<()> {
        Self::validate_host(&self.site.host)?;

        if self.seo.separator.trim().is_empty() {
            bail!(ConfigError::Validation("[seo.separator] must not be blank".into()));
        }

        if !self.seo.page_label.contains("{n}") {
            bail!(ConfigError::Validation(
                "[seo.page_label] must contain the `{n}` placeholder".into()
            ));
        }

        if self.seo.pagination_segment.is_empty() || self.seo.pagination_segment.contains('/') {
            bail!(ConfigError::Validation(
                "[seo.pagination_segment] must be a single non-empty path segment".into()
            ));
        }

        Ok(())
    }

    /// `host` must be an absolute http(s) URL without a trailing slash.
    fn validate_host(host: &str) -> Result<()> {
        let parsed = url::Url::parse(host).map_err(|err| {
            ConfigError::Validation(format!("[site.host] is not a valid URL: {err}"))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(ConfigError::Validation(format!(
                "[site.host] scheme '{}' not supported, must be http or https",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            bail!(ConfigError::Validation("[site.host] must have a valid host".into()));
        }
        if host.ends_with('/') {
            bail!(ConfigError::Validation(
                "[site.host] must not end with `/`, e.g.: \"https://example.com\"".into()
            ));
        }
        Ok(())
    }
}

//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[site]`     | Site metadata and listing sizes                |
//! | `[build]`    | Content directory, default avatar              |
//! | `[[nav]]`    | Header navigation links                        |
//! | `[[social]]` | Social links shown in the footer               |
//! | `[icons]`    | Label to icon name map                         |
//! | `[[tech]]`   | Tech stack entries                             |
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Jane Doe"
//! href = "https://jane.dev"
//! posts_per_page = 5
//!
//! [build]
//! content = "src/content"
//!
//! [[social]]
//! href = "https://github.com/jane"
//! label = "GitHub"
//!
//! [icons]
//! GitHub = "lucide:github"
//! ```

mod build;
pub mod defaults;
mod error;
mod links;
mod site;

pub use error::ConfigError;
pub use links::{Link, Tech};

use build::BuildConfig;
use site::SiteSection;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteSection,

    /// Content settings
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default = "defaults::links::nav")]
    #[educe(Default = defaults::links::nav())]
    pub nav: Vec<Link>,

    #[serde(default)]
    pub social: Vec<Link>,

    #[serde(default)]
    pub icons: BTreeMap<String, String>,

    #[serde(default)]
    pub tech: Vec<Tech>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.content, cli.content.as_ref());

        let root = Self::normalize_path(&root);
        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.set_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.site.href.starts_with("http") {
            bail!(ConfigError::Validation(
                "[site.href] must start with http:// or https://".into()
            ));
        }

        if self.site.posts_per_page == 0 {
            bail!(ConfigError::Validation(
                "[site.posts_per_page] must be at least 1".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

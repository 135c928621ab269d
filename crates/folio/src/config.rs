//! Configuration management for folio.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "folio";

/// Default output directory for `folio build`.
const DEFAULT_OUTPUT_DIR: &str = "public";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FOLIO_`, sections split on `__`)
/// 2. TOML config file at `~/.config/folio/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site content configuration.
    pub site: SiteConfig,
    /// Contact form configuration.
    pub contact: ContactConfig,
}

/// Site-wide content and layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title shown in the browser tab of every page.
    pub title: String,
    /// Paragraphs of the About page.
    pub about_paragraphs: Vec<String>,
    /// JSON file with project entries.
    /// Uses the built-in sample projects when unset.
    pub projects_path: Option<PathBuf>,
    /// Directory that `folio build` writes into.
    /// Defaults to `./public`.
    pub output_dir: Option<PathBuf>,
}

/// Contact form messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Shown after a successful submission.
    pub success_message: String,
    /// Shown as the form-level error when delivery fails.
    pub failure_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            about_paragraphs: default_about_paragraphs(),
            projects_path: None,
            output_dir: None,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            success_message: "Message sent successfully!".to_string(),
            failure_message: "Failed to send message. Please try again later.".to_string(),
        }
    }
}

/// Default About page text.
fn default_about_paragraphs() -> Vec<String> {
    vec![
        "Hello! I'm a passionate web developer with expertise in React and modern \
         JavaScript. I enjoy building responsive and accessible web applications that \
         provide excellent user experiences."
            .to_string(),
        "This portfolio showcases some of my personal projects and skills. Feel free to \
         explore and contact me for collaboration opportunities."
            .to_string(),
    ]
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("FOLIO_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(Error::config_validation("site.title must not be empty"));
        }

        if self.contact.success_message.trim().is_empty() {
            return Err(Error::config_validation(
                "contact.success_message must not be empty",
            ));
        }

        if self.contact.failure_message.trim().is_empty() {
            return Err(Error::config_validation(
                "contact.failure_message must not be empty",
            ));
        }

        if let Some(path) = &self.site.projects_path {
            let is_json = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if !is_json {
                return Err(Error::config_validation(format!(
                    "site.projects_path must be a .json file: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Get the build output directory, resolving defaults if not set.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.site
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

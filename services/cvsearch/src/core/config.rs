//! Configuration management for cvsearch.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! The search declaration and layout default to the built-in
//! transcription interface and can be replaced from the config file.

use crate::core::builder::SearchDeclaration;
use crate::core::error::{CvSearchError, Result};
use crate::core::layout::LayoutDeclaration;
use crate::core::schema::{IndexSettings, CV_INDEX_NAME};
use crate::core::xdg::XdgDirs;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

// Lowercase, no spaces or path characters, must not start with - _ +
static INDEX_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9._-]*$").unwrap());

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub connector: ConnectorConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub index: IndexSettings,
    #[serde(default)]
    pub declaration: SearchDeclaration,
    #[serde(default)]
    pub layout: LayoutDeclaration,
}

/// Connection settings handed to the search UI connector
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectorConfig {
    /// Base URL of the search backend
    #[serde(default = "default_host")]
    pub host: String,

    /// Index queried by the interface
    #[serde(default = "default_index")]
    pub index: String,
}

/// Search interface tunables
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Run an empty search when the page loads
    #[serde(default = "default_true")]
    pub always_search_on_initial_load: bool,

    /// Characters typed before the search box queries for completions
    #[serde(default = "default_autocomplete_min_chars")]
    pub autocomplete_minimum_characters: u32,

    /// Number of suggestions in the search box dropdown
    #[serde(default = "default_suggestion_size")]
    pub autocomplete_suggestion_size: u32,

    /// Delay before a keystroke triggers a query
    #[serde(default)]
    pub debounce_length_ms: u64,

    /// Label of the sort selector
    #[serde(default = "default_sort_label")]
    pub sort_label: String,

    /// Page sizes offered by the results-per-page selector
    #[serde(default = "default_results_per_page")]
    pub results_per_page_options: Vec<u32>,
}

// Default value functions
fn default_host() -> String {
    "http://localhost:9200".to_string()
}

fn default_index() -> String {
    CV_INDEX_NAME.to_string()
}

fn default_true() -> bool {
    true
}

fn default_autocomplete_min_chars() -> u32 {
    3
}

fn default_suggestion_size() -> u32 {
    5
}

fn default_sort_label() -> String {
    "Sort by".to_string()
}

fn default_results_per_page() -> Vec<u32> {
    vec![20, 40, 60]
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            index: default_index(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            always_search_on_initial_load: true,
            autocomplete_minimum_characters: default_autocomplete_min_chars(),
            autocomplete_suggestion_size: default_suggestion_size(),
            debounce_length_ms: 0,
            sort_label: default_sort_label(),
            results_per_page_options: default_results_per_page(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CvSearchError::ConfigurationError(format!("Failed to read config file: {e}"))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg, None)
    }

    /// Load config with explicit XDG directories and an optional file
    ///
    /// Priority order:
    /// 1. `explicit` path (the `--config` flag)
    /// 2. CVSEARCH_CONFIG env var
    /// 3. XDG config file (~/.config/cvsearch/config.toml, or CVSEARCH_CONFIG_FILE)
    /// 4. Legacy ./cvsearch.toml
    /// 5. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs, explicit: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit {
            Self::from_file(path)?
        } else if let Ok(config_path) = env::var("CVSEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("cvsearch.toml").exists() {
                Self::from_file("cvsearch.toml")?
            } else {
                tracing::debug!("No config file found, using defaults");
                Self::default()
            }
        };

        // Override with environment variables
        config.merge_env()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// A variable that is set but does not parse is an error.
    pub fn merge_env(&mut self) -> Result<()> {
        // Connector configuration
        if let Ok(host) = env::var("CVSEARCH_HOST") {
            self.connector.host = host;
        }
        if let Ok(index) = env::var("CVSEARCH_INDEX") {
            self.connector.index = index;
        }

        // UI configuration
        if let Ok(min_chars) = env::var("CVSEARCH_AUTOCOMPLETE_MIN_CHARS") {
            self.ui.autocomplete_minimum_characters =
                parse_env_number("CVSEARCH_AUTOCOMPLETE_MIN_CHARS", &min_chars)?;
        }
        if let Ok(debounce) = env::var("CVSEARCH_DEBOUNCE_MS") {
            self.ui.debounce_length_ms = parse_env_number("CVSEARCH_DEBOUNCE_MS", &debounce)?;
        }

        Ok(())
    }

    /// Validate configuration values
    ///
    /// The declaration and layout are checked when the services are built,
    /// since their checks need the built search configuration.
    pub fn validate(&self) -> Result<()> {
        // Validate connector config
        let host = &self.connector.host;
        if !(host.starts_with("http://") || host.starts_with("https://")) {
            return Err(CvSearchError::config(format!(
                "Connector host must be an http(s) URL, got '{host}'"
            )));
        }

        if !INDEX_NAME_PATTERN.is_match(&self.connector.index) {
            return Err(CvSearchError::config(format!(
                "Invalid index name '{}'",
                self.connector.index
            )));
        }

        // Validate UI config
        if self.ui.autocomplete_suggestion_size == 0 {
            return Err(CvSearchError::config(
                "Autocomplete suggestion size must be non-zero",
            ));
        }

        if self.ui.sort_label.trim().is_empty() {
            return Err(CvSearchError::config("Sort label must not be empty"));
        }

        if self.ui.results_per_page_options.is_empty()
            || self.ui.results_per_page_options.contains(&0)
        {
            return Err(CvSearchError::config(
                "Results per page options must be non-empty and non-zero",
            ));
        }

        // Validate index settings
        if self.index.number_of_shards == 0 {
            return Err(CvSearchError::config(
                "Number of shards must be non-zero",
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Host: {}", self.connector.host);
        tracing::info!("  Index: {}", self.connector.index);
        tracing::info!(
            "  Autocomplete min chars: {}",
            self.ui.autocomplete_minimum_characters
        );
        tracing::info!("  Debounce: {}ms", self.ui.debounce_length_ms);
        tracing::info!(
            "  Search fields: {}",
            self.declaration.search_fields.len()
        );
        tracing::info!("  Facets: {}", self.declaration.facets.len());
        tracing::info!("  Sort fields: {}", self.declaration.sort_fields.len());
    }
}

fn parse_env_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CvSearchError::config(format!(
            "{name} must be a non-negative integer, got '{value}'"
        ))
    })
}

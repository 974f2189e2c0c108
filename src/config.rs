//! Configuration for locale data generation
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (exemplars.toml)
//! - Environment variables (EXEMPLARS__*)
//!
//! ## Example config file (exemplars.toml):
//! ```toml
//! [output]
//! dir = "docs"
//! api_version = "v1"
//!
//! [schema]
//! path = "schema.json"
//!
//! [provider]
//! supplement = "data/cldr-supplement.json"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExemplarsConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub schema: SchemaConfig,

    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Where artifacts are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root output directory
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Versioned subdirectory under `dir`
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

/// Schema used to gate output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default = "default_schema_path")]
    pub path: PathBuf,
}

/// Locale data source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// CLDR data the ICU4X compiled data lacks (locale list, currencies, symbols)
    #[serde(default = "default_supplement_path")]
    pub supplement: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_api_version() -> String {
    "v1".to_string()
}

fn default_schema_path() -> PathBuf {
    PathBuf::from("schema.json")
}

fn default_supplement_path() -> PathBuf {
    PathBuf::from("data/cldr-supplement.json")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            api_version: default_api_version(),
        }
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            path: default_schema_path(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            supplement: default_supplement_path(),
        }
    }
}

impl ExemplarsConfig {
    /// Load configuration from default locations, adding a required file when one is given
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["exemplars.toml", ".exemplars.toml", "config/exemplars.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("org", "locale-exemplars", "exemplars") {
            let xdg_config = config_dir.config_dir().join("exemplars.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // EXEMPLARS__OUTPUT__DIR=out
        builder = builder.add_source(
            Environment::with_prefix("EXEMPLARS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Write the effective configuration as TOML
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

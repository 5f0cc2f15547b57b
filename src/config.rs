use crate::errors::{ComponentError, Result};
use crate::options::Theme;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

static CONFIGURATION: OnceLock<Configuration> = OnceLock::new();

/// CSS framework the class tables target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssFramework {
    #[default]
    Tailwind,
}

/// Process-wide component configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Theme used when a render call does not pass one
    pub default_theme: Theme,

    /// Informational; the class tables are Tailwind utilities
    pub css_framework: CssFramework,

    /// Caller-defined theme names mapped to class strings (not consumed yet)
    pub custom_themes: IndexMap<String, String>,

    /// Accessibility extras toggle (not consumed yet)
    pub accessibility: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            default_theme: Theme::Primary,
            css_framework: CssFramework::Tailwind,
            custom_themes: IndexMap::new(),
            accessibility: true,
        }
    }
}

impl Configuration {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ComponentError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_yaml::from_str(&content)
            .map_err(|e| ComponentError::ConfigError {
                message: format!("Failed to parse YAML config: {}", e),
            })
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ComponentError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_json::from_str(&content)
            .map_err(|e| ComponentError::ConfigError {
                message: format!("Failed to parse JSON config: {}", e),
            })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(ComponentError::ConfigError {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Merge with another configuration; `other` wins on every field
    pub fn merge(mut self, other: Self) -> Self {
        self.default_theme = other.default_theme;
        self.css_framework = other.css_framework;
        self.accessibility = other.accessibility;
        self.custom_themes.extend(other.custom_themes);
        self
    }
}

/// Install the process-wide configuration. May only be called once.
pub fn configure(config: Configuration) -> Result<()> {
    CONFIGURATION
        .set(config)
        .map_err(|_| ComponentError::ConfigError {
            message: "configuration has already been set".to_string(),
        })
}

/// The process-wide configuration, or the defaults if none was installed
pub fn configuration() -> &'static Configuration {
    CONFIGURATION.get_or_init(Configuration::default)
}

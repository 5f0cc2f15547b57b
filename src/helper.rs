//! Host-side entry point that applies the deployment error policy.
//!
//! In production, unknown kinds and invalid options are logged and render
//! as empty markup so one bad component does not break a page. Everywhere
//! else they propagate to the caller unchanged.

use crate::config::{configuration, Configuration};
use crate::errors::{ComponentError, Result};
use crate::markup::Markup;
use crate::options::ComponentOptions;
use crate::registry::{render_with, ComponentKind};
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Environment variable read by [`Environment::from_env`]
pub const ENVIRONMENT_VAR: &str = "COMPONENT_READY_ENV";

/// Deployment mode of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Environment {
    #[default]
    #[value(alias = "dev")]
    Development,
    Test,
    #[value(alias = "prod")]
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    /// Read the mode from `COMPONENT_READY_ENV`, defaulting to development
    pub fn from_env() -> Self {
        std::env::var(ENVIRONMENT_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ComponentError::ConfigError {
                message: format!("Unknown environment: {}", other),
            }),
        }
    }
}

/// Renders components on behalf of a view layer
#[derive(Debug, Clone)]
pub struct ComponentHelper {
    environment: Environment,
    config: Configuration,
}

impl Default for ComponentHelper {
    fn default() -> Self {
        Self::new(Environment::from_env(), configuration().clone())
    }
}

impl ComponentHelper {
    pub fn new(environment: Environment, config: Configuration) -> Self {
        Self { environment, config }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Render a component, applying the environment's error policy
    pub fn component_ready(&self, kind: &str, options: &ComponentOptions) -> Result<Markup> {
        match render_with(kind, options, &self.config) {
            Ok(markup) => Ok(markup),
            Err(e) if e.is_component_error() && self.environment.is_production() => {
                tracing::error!(error = %e, "ComponentReady Error");
                tracing::error!(kind, options = ?options, "Component render suppressed");
                Ok(Markup::empty())
            }
            Err(e) => Err(e),
        }
    }

    /// Registered kind names
    pub fn available_components(&self) -> Vec<&'static str> {
        ComponentKind::names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("Prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
        assert!("staging".parse::<Environment>().is_err());
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }

    #[test]
    fn test_value_enum_accepts_short_names() {
        assert_eq!(<Environment as ValueEnum>::from_str("prod", true).unwrap(), Environment::Production);
        assert_eq!(<Environment as ValueEnum>::from_str("dev", true).unwrap(), Environment::Development);
        assert_eq!(<Environment as ValueEnum>::from_str("PRODUCTION", true).unwrap(), Environment::Production);
        assert!(<Environment as ValueEnum>::from_str("staging", true).is_err());
    }

    #[test]
    fn test_available_components() {
        let helper = ComponentHelper::new(Environment::Test, Configuration::default());
        assert_eq!(
            helper.available_components(),
            vec!["button", "slider", "footer", "pricing", "login", "banner"]
        );
    }

    #[test]
    fn test_production_suppresses_component_errors() {
        let helper = ComponentHelper::new(Environment::Production, Configuration::default());
        let options = ComponentOptions::new().with("text", "Test");

        let markup = helper.component_ready("unknown_component", &options).unwrap();
        assert!(markup.is_empty());

        let markup = helper
            .component_ready("button", &ComponentOptions::new())
            .unwrap();
        assert_eq!(markup.as_str(), "");
    }

    #[test]
    fn test_development_propagates_errors() {
        let helper = ComponentHelper::new(Environment::Development, Configuration::default());
        let err = helper
            .component_ready("unknown_component", &ComponentOptions::new())
            .unwrap_err();
        assert!(err.to_string().contains("No component registered"));
    }
}

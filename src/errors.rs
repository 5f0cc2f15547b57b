use thiserror::Error;

/// Main error type for the component-ready crate
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("No component registered for :{requested}. Available components: {}", .available.join(", "))]
    UnknownComponent {
        requested: String,
        available: Vec<&'static str>,
    },

    #[error("{message}")]
    InvalidOptions {
        field: String,
        value: Option<String>,
        message: String,
    },

    #[error("Template not found: {path}")]
    TemplateNotFound { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ComponentError {
    /// Build an InvalidOptions error for a value outside its allow-list
    pub fn invalid_option(field: &str, value: impl Into<String>, allowed: &[&str]) -> Self {
        let value = value.into();
        Self::InvalidOptions {
            message: format!(
                "Invalid {}: {}. Valid options: {}",
                field,
                value,
                allowed.join(", ")
            ),
            field: field.to_string(),
            value: Some(value),
        }
    }

    /// Build an InvalidOptions error for a required field that was not supplied
    pub fn missing_option(field: &str) -> Self {
        Self::InvalidOptions {
            field: field.to_string(),
            value: None,
            message: format!("{} parameter is required", field),
        }
    }

    /// Build an InvalidOptions error with a free-form constraint description
    pub fn constraint(field: &str, value: Option<String>, message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            field: field.to_string(),
            value,
            message: message.into(),
        }
    }

    /// True for the two errors a host may downgrade to empty output
    pub fn is_component_error(&self) -> bool {
        matches!(self, Self::UnknownComponent { .. } | Self::InvalidOptions { .. })
    }

    /// The offending field for InvalidOptions errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidOptions { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ComponentError>;

//! Pre-styled Tailwind CSS UI components.
//!
//! A render call takes a component kind and a bag of options, validates
//! the options eagerly, composes the Tailwind class list and returns the
//! finished HTML.
//!
//! ```
//! use component_ready::{render_with, ComponentOptions, Configuration};
//!
//! let options = ComponentOptions::new().with("text", "Go").with("href", "https://example.com");
//! let html = render_with("button", &options, &Configuration::default()).unwrap();
//! assert!(html.as_str().starts_with("<a href=\"https://example.com\""));
//! ```

pub mod args;
pub mod classes;
pub mod components;
pub mod config;
pub mod errors;
pub mod helper;
pub mod markup;
pub mod options;
pub mod registry;
pub mod template;

pub use args::{Cli, Commands, RenderArgs};
pub use classes::{compose_classes, ClassComposer};
pub use components::{Banner, BannerType, Button, ButtonType, Component, Footer, Login, Pricing, Slide, Slider};
pub use config::{configuration, configure, Configuration, CssFramework};
pub use errors::{ComponentError, Result};
pub use helper::{ComponentHelper, Environment};
pub use markup::Markup;
pub use options::{Choice, ComponentOptions, Size, StyleOptions, StylingHooks, Theme, Variant};
pub use registry::{render, render_with, AnyComponent, ComponentKind};
pub use template::TemplateStore;

use std::path::Path;

/// Load component options from a JSON or YAML file
pub fn load_options(path: &Path) -> Result<ComponentOptions> {
    let content = std::fs::read_to_string(path)?;
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
        _ => Ok(serde_json::from_str(&content)?),
    }
}

/// Handle the render command: resolve options and config, render, apply the error policy
pub fn handle_render_command(args: &RenderArgs) -> Result<Markup> {
    args.validate()
        .map_err(|message| ComponentError::ConfigError { message })?;

    let config = match &args.config {
        Some(path) => Configuration::from_file(path)?,
        None => Configuration::default(),
    };

    let options = match (&args.options, &args.options_file) {
        (Some(json), _) => serde_json::from_str(json)?,
        (None, Some(path)) => load_options(path)?,
        (None, None) => ComponentOptions::new(),
    };

    tracing::debug!(kind = %args.kind, env = %args.env, options = options.len(), "Rendering component");
    ComponentHelper::new(args.env, config).component_ready(&args.kind, &options)
}

use crate::classes::ClassComposer;
use crate::components::{Banner, Button, Component, Footer, Login, Pricing, Slider};
use crate::config::{configuration, Configuration};
use crate::errors::{ComponentError, Result};
use crate::markup::Markup;
use crate::options::{ComponentOptions, StyleOptions};
use std::fmt;
use std::str::FromStr;

/// Every component kind that can be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Button,
    Slider,
    Footer,
    Pricing,
    Login,
    Banner,
}

impl ComponentKind {
    /// Registered kinds, in registration order
    pub const ALL: &'static [Self] = &[
        Self::Button,
        Self::Slider,
        Self::Footer,
        Self::Pricing,
        Self::Login,
        Self::Banner,
    ];

    /// Short snake_case name used by callers
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Slider => "slider",
            Self::Footer => "footer",
            Self::Pricing => "pricing",
            Self::Login => "login",
            Self::Banner => "banner",
        }
    }

    /// Canonical CamelCase identifier a requested name is normalised to
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Slider => "Slider",
            Self::Footer => "Footer",
            Self::Pricing => "Pricing",
            Self::Login => "Login",
            Self::Banner => "Banner",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.as_str()).collect()
    }

    /// Resolve a requested kind name.
    ///
    /// The name is camelized (`"button"` and `"Button"` both become
    /// `Button`) and compared against the registered identifiers.
    pub fn resolve(requested: &str) -> Result<Self> {
        let canonical = camelize(requested);
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.class_name() == canonical)
            .ok_or_else(|| ComponentError::UnknownComponent {
                requested: requested.strip_prefix(':').unwrap_or(requested).to_string(),
                available: Self::names(),
            })
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

/// `snake_case` to `CamelCase`; a leading `:` is dropped
fn camelize(name: &str) -> String {
    let name = name.trim().strip_prefix(':').unwrap_or(name.trim());
    name.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// A constructed component of any registered kind
#[derive(Debug, Clone)]
pub enum AnyComponent {
    Button(Button),
    Slider(Slider),
    Footer(Footer),
    Pricing(Pricing),
    Login(Login),
    Banner(Banner),
}

impl AnyComponent {
    /// Validate `options` for `kind` and construct the component
    pub fn build(kind: ComponentKind, options: &ComponentOptions, config: &Configuration) -> Result<Self> {
        Ok(match kind {
            ComponentKind::Button => Self::Button(Button::from_options(options, config)?),
            ComponentKind::Slider => Self::Slider(Slider::from_options(options, config)?),
            ComponentKind::Footer => Self::Footer(Footer::from_options(options, config)?),
            ComponentKind::Pricing => Self::Pricing(Pricing::from_options(options, config)?),
            ComponentKind::Login => Self::Login(Login::from_options(options, config)?),
            ComponentKind::Banner => Self::Banner(Banner::from_options(options, config)?),
        })
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Button(_) => ComponentKind::Button,
            Self::Slider(_) => ComponentKind::Slider,
            Self::Footer(_) => ComponentKind::Footer,
            Self::Pricing(_) => ComponentKind::Pricing,
            Self::Login(_) => ComponentKind::Login,
            Self::Banner(_) => ComponentKind::Banner,
        }
    }

    pub fn style(&self) -> &StyleOptions {
        match self {
            Self::Button(c) => c.style(),
            Self::Slider(c) => c.style(),
            Self::Footer(c) => c.style(),
            Self::Pricing(c) => c.style(),
            Self::Login(c) => c.style(),
            Self::Banner(c) => c.style(),
        }
    }

    pub fn render(&self) -> Markup {
        match self {
            Self::Button(c) => c.render(),
            Self::Slider(c) => c.render(),
            Self::Footer(c) => c.render(),
            Self::Pricing(c) => c.render(),
            Self::Login(c) => c.render(),
            Self::Banner(c) => c.render(),
        }
    }
}

/// Render `kind` with `options` using an explicit configuration
pub fn render_with(kind: &str, options: &ComponentOptions, config: &Configuration) -> Result<Markup> {
    let kind = ComponentKind::resolve(kind)?;
    let component = AnyComponent::build(kind, options, config)?;
    let markup = component.render();
    tracing::debug!(kind = %kind, bytes = markup.as_str().len(), "Rendered component");
    Ok(markup)
}

/// Render `kind` with `options` using the process-wide configuration
pub fn render(kind: &str, options: &ComponentOptions) -> Result<Markup> {
    render_with(kind, options, configuration())
}

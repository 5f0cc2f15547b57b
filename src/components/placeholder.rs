use crate::classes::ClassComposer;
use crate::components::Component;
use crate::config::Configuration;
use crate::errors::Result;
use crate::markup::Markup;
use crate::options::{ComponentOptions, StyleOptions, StylingHooks};

/// Shared state of the components that only render a "coming soon" marker
#[derive(Debug, Clone)]
pub struct Placeholder {
    style: StyleOptions,
    name: &'static str,
    title: &'static str,
}

impl Placeholder {
    fn build(name: &'static str, title: &'static str, options: &ComponentOptions, config: &Configuration) -> Result<Self> {
        Ok(Self {
            style: StyleOptions::resolve(options, config, StylingHooks::ALL)?,
            name,
            title,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn render(&self) -> Markup {
        Markup::new(format!(
            "<div class='{}'>{} component - Coming soon</div>",
            self.name, self.title
        ))
    }
}

macro_rules! placeholder_component {
    ($(#[$meta:meta])* $ty:ident, $name:literal, $title:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $ty(Placeholder);

        impl $ty {
            pub fn placeholder(&self) -> &Placeholder {
                &self.0
            }
        }

        impl ClassComposer for $ty {
            fn style(&self) -> &StyleOptions {
                &self.0.style
            }
        }

        impl Component for $ty {
            const HOOKS: StylingHooks = StylingHooks::ALL;

            fn from_options(options: &ComponentOptions, config: &Configuration) -> Result<Self> {
                Placeholder::build($name, $title, options, config).map(Self)
            }

            fn render(&self) -> Markup {
                self.0.render()
            }
        }
    };
}

placeholder_component!(
    /// Site footer, not designed yet
    Footer, "footer", "Footer"
);
placeholder_component!(
    /// Pricing table, not designed yet
    Pricing, "pricing", "Pricing"
);
placeholder_component!(
    /// Login form, not designed yet
    Login, "login", "Login"
);

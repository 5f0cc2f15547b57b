use crate::classes::ClassComposer;
use crate::components::Component;
use crate::config::Configuration;
use crate::errors::{ComponentError, Result};
use crate::markup::{escape, Markup};
use crate::options::{Choice, ComponentOptions, StyleOptions, StylingHooks, Theme};
use std::fmt;

const BANNER_CLASSES: &str = "rounded-md p-4 border-l-4";

const DISMISS_BUTTON: &str = concat!(
    r#"<div class="ml-auto pl-3"><div class="-mx-1.5 -my-1.5">"#,
    r#"<button type="button" class="inline-flex rounded-md p-1.5 hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-offset-2" data-dismiss="banner" aria-label="Dismiss">"#,
    r#"<svg class="h-5 w-5" fill="currentColor" viewBox="0 0 20 20">"#,
    r#"<path fill-rule="evenodd" d="M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z" clip-rule="evenodd"/>"#,
    "</svg></button></div></div>"
);

/// Alert type of a banner; drives its theme, colours and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerType {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Choice for BannerType {
    const FIELD: &'static str = "type";
    const ALL: &'static [Self] = &[Self::Info, Self::Success, Self::Warning, Self::Error];

    fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for BannerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BannerType {
    /// Generic theme implied by the alert type
    pub fn theme(self) -> Theme {
        match self {
            Self::Info => Theme::Primary,
            Self::Success => Theme::Success,
            Self::Warning => Theme::Warning,
            Self::Error => Theme::Danger,
        }
    }

    pub fn theme_classes(self) -> &'static str {
        match self {
            Self::Info => "bg-blue-50 border-blue-400 text-blue-800",
            Self::Success => "bg-green-50 border-green-400 text-green-800",
            Self::Warning => "bg-yellow-50 border-yellow-400 text-yellow-800",
            Self::Error => "bg-red-50 border-red-400 text-red-800",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Info => concat!(
                r#"<svg class="h-5 w-5 text-blue-400" fill="currentColor" viewBox="0 0 20 20">"#,
                r#"<path fill-rule="evenodd" d="M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z" clip-rule="evenodd"/>"#,
                "</svg>"
            ),
            Self::Success => concat!(
                r#"<svg class="h-5 w-5 text-green-400" fill="currentColor" viewBox="0 0 20 20">"#,
                r#"<path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z" clip-rule="evenodd"/>"#,
                "</svg>"
            ),
            Self::Warning => concat!(
                r#"<svg class="h-5 w-5 text-yellow-400" fill="currentColor" viewBox="0 0 20 20">"#,
                r#"<path fill-rule="evenodd" d="M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z" clip-rule="evenodd"/>"#,
                "</svg>"
            ),
            Self::Error => concat!(
                r#"<svg class="h-5 w-5 text-red-400" fill="currentColor" viewBox="0 0 20 20">"#,
                r#"<path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z" clip-rule="evenodd"/>"#,
                "</svg>"
            ),
        }
    }
}

/// An alert banner whose styling is fully determined by its type
#[derive(Debug, Clone)]
pub struct Banner {
    style: StyleOptions,
    message: String,
    kind: BannerType,
    dismissible: bool,
    action: Option<(String, String)>,
}

impl Banner {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn banner_type(&self) -> BannerType {
        self.kind
    }

    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    /// `(action_text, action_url)` when both were supplied
    pub fn action(&self) -> Option<(&str, &str)> {
        self.action
            .as_ref()
            .map(|(text, url)| (text.as_str(), url.as_str()))
    }

    fn render_action(&self) -> String {
        match self.action() {
            Some((text, url)) => format!(
                r#"<div class="mt-2"><a href="{}" class="text-sm font-medium underline hover:no-underline">{}</a></div>"#,
                escape(url),
                escape(text)
            ),
            None => String::new(),
        }
    }
}

impl ClassComposer for Banner {
    fn style(&self) -> &StyleOptions {
        &self.style
    }

    fn base_classes(&self) -> &str {
        ""
    }

    fn theme_classes(&self) -> &str {
        self.kind.theme_classes()
    }

    fn size_classes(&self) -> &str {
        ""
    }

    fn variant_classes(&self) -> &str {
        ""
    }
}

impl Component for Banner {
    const HOOKS: StylingHooks = StylingHooks::ALL;

    fn from_options(options: &ComponentOptions, config: &Configuration) -> Result<Self> {
        let message = options.require_str("message")?;
        let kind = match options.get(BannerType::FIELD) {
            Some(value) => BannerType::from_value(value)?,
            None => BannerType::default(),
        };
        let dismissible = options.flag("dismissible", true)?;

        let action = match (options.str_opt("action_text")?, options.str_opt("action_url")?) {
            (Some(text), Some(url)) => Some((text, url)),
            (None, None) => None,
            (text, _) => {
                let field = if text.is_some() { "action_url" } else { "action_text" };
                return Err(ComponentError::constraint(
                    field,
                    None,
                    "action_text and action_url must both be present or both absent",
                ));
            }
        };

        // The alert type decides the theme; a caller-supplied theme is ignored.
        let themed = options.clone().theme(kind.theme());
        let style = StyleOptions::resolve(&themed, config, Self::HOOKS)?;

        Ok(Self {
            style,
            message,
            kind,
            dismissible,
            action,
        })
    }

    fn render(&self) -> Markup {
        let dismiss = if self.dismissible { DISMISS_BUTTON } else { "" };
        Markup::new(format!(
            concat!(
                r#"<div class="{}" role="alert"><div class="flex">"#,
                r#"<div class="flex-shrink-0">{}</div>"#,
                r#"<div class="ml-3 flex-1"><p class="text-sm font-medium">{}</p>{}</div>"#,
                "{}</div></div>"
            ),
            self.css_classes(&[BANNER_CLASSES]),
            self.kind.icon(),
            escape(&self.message),
            self.render_action(),
            dismiss
        ))
    }
}

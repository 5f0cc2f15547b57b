use crate::classes::ClassComposer;
use crate::components::Component;
use crate::config::Configuration;
use crate::errors::{ComponentError, Result};
use crate::markup::{escape, Markup};
use crate::options::{ComponentOptions, StyleOptions, StylingHooks, Variant};

const BUTTON_BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-md border font-medium \
     focus:outline-none focus:ring-2 focus:ring-offset-2 transition-colors duration-200";

const DISABLED_CLASSES: &str = "opacity-50 cursor-not-allowed";

const SPINNER: &str = concat!(
    r#"<svg class="animate-spin -ml-1 mr-3 h-5 w-5 text-current" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">"#,
    r#"<circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>"#,
    r#"<path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>"#,
    "</svg>"
);

/// The `type` attribute of a rendered `<button>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    /// Derive the button type from a `form_action` value
    pub fn from_form_action(form_action: Option<&str>) -> Self {
        match form_action {
            Some("submit") => Self::Submit,
            Some("reset") => Self::Reset,
            _ => Self::Button,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// A button, or a link styled as one when `href` is given
#[derive(Debug, Clone)]
pub struct Button {
    style: StyleOptions,
    text: String,
    disabled: bool,
    loading: bool,
    icon: Option<String>,
    href: Option<String>,
    form_action: Option<String>,
}

impl Button {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn form_action(&self) -> Option<&str> {
        self.form_action.as_deref()
    }

    /// Loading implies disabled
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn button_type(&self) -> ButtonType {
        ButtonType::from_form_action(self.form_action.as_deref())
    }

    fn disabled_classes(&self) -> &'static str {
        if self.is_disabled() {
            DISABLED_CLASSES
        } else {
            ""
        }
    }

    fn content(&self) -> String {
        if self.loading {
            format!("{}Loading...", SPINNER)
        } else if let Some(icon) = &self.icon {
            // icon is trusted markup (usually an inline svg)
            format!(r#"<span class="mr-2">{}</span>{}"#, icon, escape(&self.text))
        } else {
            escape(&self.text)
        }
    }

    fn render_link(&self, href: &str) -> String {
        let mut attributes = format!(
            r#"href="{}" class="{}""#,
            escape(href),
            self.css_classes(&[self.disabled_classes()])
        );
        // anchors cannot be natively disabled
        if self.is_disabled() {
            attributes.push_str(r#" aria-disabled="true""#);
        }
        format!("<a {}>{}</a>", attributes, self.content())
    }

    fn render_button(&self) -> String {
        let mut attributes = format!(
            r#"type="{}" class="{}""#,
            self.button_type().as_str(),
            self.css_classes(&[self.disabled_classes()])
        );
        if self.is_disabled() {
            attributes.push_str(" disabled");
        }
        if self.loading {
            attributes.push_str(r#" aria-busy="true""#);
        }
        format!("<button {}>{}</button>", attributes, self.content())
    }
}

impl ClassComposer for Button {
    fn style(&self) -> &StyleOptions {
        &self.style
    }

    fn base_classes(&self) -> &str {
        BUTTON_BASE_CLASSES
    }

    fn variant_classes(&self) -> &str {
        match self.style.variant {
            Variant::Default => "",
            Variant::Outline => "bg-transparent border-2 hover:bg-gray-50",
            Variant::Ghost => "bg-transparent border-transparent hover:bg-gray-100",
            Variant::Link => "bg-transparent border-transparent underline-offset-4 hover:underline p-0",
        }
    }
}

impl Component for Button {
    const HOOKS: StylingHooks = StylingHooks::ALL;

    fn from_options(options: &ComponentOptions, config: &Configuration) -> Result<Self> {
        let text = options.require_str("text")?;
        let disabled = options.flag("disabled", false)?;
        let loading = options.flag("loading", false)?;
        let icon = options.str_opt("icon")?;
        let href = options.str_opt("href")?;
        let form_action = options.symbol_opt("form_action")?;

        if href.is_some() && form_action.is_some() {
            return Err(ComponentError::constraint(
                "href",
                href,
                "href and form_action are mutually exclusive",
            ));
        }

        let style = StyleOptions::resolve(options, config, Self::HOOKS)?;

        Ok(Self {
            style,
            text,
            disabled,
            loading,
            icon,
            href,
            form_action,
        })
    }

    fn render(&self) -> Markup {
        let html = match &self.href {
            Some(href) => self.render_link(href),
            None => self.render_button(),
        };
        Markup::new(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::BASE_CLASSES;
    use crate::options::{Size, Theme};

    fn build(options: ComponentOptions) -> Result<Button> {
        Button::from_options(&options, &Configuration::default())
    }

    fn button(text: &str) -> ComponentOptions {
        ComponentOptions::new().with("text", text)
    }

    #[test]
    fn test_requires_text() {
        let err = build(ComponentOptions::new()).unwrap_err();
        assert_eq!(err.field(), Some("text"));
        assert_eq!(err.to_string(), "text parameter is required");
    }

    #[test]
    fn test_accepts_valid_options() {
        let button = build(
            button("Click me")
                .theme(Theme::Primary)
                .size(Size::Lg)
                .with("disabled", true)
                .with("loading", true)
                .with("icon", "plus")
                .with("href", "https://example.com"),
        )
        .unwrap();

        assert_eq!(button.text(), "Click me");
        assert_eq!(button.style().theme, Theme::Primary);
        assert_eq!(button.style().size, Size::Lg);
        assert!(button.is_disabled());
        assert!(button.is_loading());
        assert_eq!(button.icon(), Some("plus"));
        assert_eq!(button.href(), Some("https://example.com"));
    }

    #[test]
    fn test_href_and_form_action_are_mutually_exclusive() {
        let err = build(
            button("Submit")
                .with("href", "https://example.com")
                .with("form_action", "submit"),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "href and form_action are mutually exclusive");
    }

    #[test]
    fn test_mutual_exclusion_checked_before_theme() {
        let err = build(
            button("Submit")
                .with("href", "/")
                .with("form_action", "submit")
                .with("theme", "bogus"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_renders_basic_button() {
        let html = build(button("Click me")).unwrap().render();
        assert!(html.as_str().starts_with(r#"<button type="button" class=""#));
        assert!(html.contains(">Click me</button>"));
        assert!(html.contains("bg-blue-600"));
        assert!(html.contains("transition-colors duration-200"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_renders_link_when_href_given() {
        let html = build(button("Go").with("href", "https://example.com")).unwrap().render();
        assert!(html.as_str().starts_with("<a "));
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(">Go</a>"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_disabled_button() {
        let html = build(button("Disabled").with("disabled", true)).unwrap().render();
        assert!(html.contains(" disabled>"));
        assert!(html.contains("opacity-50 cursor-not-allowed"));
        assert!(!html.contains("aria-busy"));
    }

    #[test]
    fn test_disabled_link_uses_aria() {
        let html = build(button("Nope").with("href", "/x").with("disabled", true))
            .unwrap()
            .render();
        assert!(html.contains(r#"aria-disabled="true""#));
        assert!(html.contains("opacity-50"));
        assert!(!html.contains(" disabled"));
    }

    #[test]
    fn test_loading_overrides_content_and_disables() {
        let html = build(button("Save").with("loading", true)).unwrap().render();
        assert!(html.contains("Loading..."));
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("Save"));
        assert!(html.contains(" disabled"));
        assert!(html.contains(r#"aria-busy="true""#));
        assert!(html.contains("opacity-50"));
    }

    #[test]
    fn test_icon_precedes_text() {
        let html = build(button("With Icon").with("icon", "plus")).unwrap().render();
        assert!(html.contains(r#"<span class="mr-2">plus</span>With Icon"#));
    }

    #[test]
    fn test_variant_and_custom_classes() {
        let html = build(button("Outline").variant(Variant::Outline).custom_classes("my-custom-class"))
            .unwrap()
            .render();
        assert!(html.contains("bg-transparent border-2 hover:bg-gray-50"));
        assert!(html.contains("my-custom-class"));
    }

    #[test]
    fn test_button_type_from_form_action() {
        assert_eq!(build(button("Basic")).unwrap().button_type(), ButtonType::Button);
        assert_eq!(
            build(button("Submit").with("form_action", "submit")).unwrap().button_type(),
            ButtonType::Submit
        );
        assert_eq!(
            build(button("Reset").with("form_action", ":reset")).unwrap().button_type(),
            ButtonType::Reset
        );
        assert_eq!(
            build(button("Other").with("form_action", "archive")).unwrap().button_type(),
            ButtonType::Button
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let html = build(button("<b>bold</b>")).unwrap().render();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_button_base_extends_generic_base() {
        for token in BASE_CLASSES.split_whitespace() {
            assert!(BUTTON_BASE_CLASSES.split_whitespace().any(|t| t == token));
        }
    }
}

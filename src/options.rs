use crate::config::Configuration;
use crate::errors::{ComponentError, Result};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

static CUSTOM_CLASSES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_[:space:]:-]*$").expect("custom class pattern is valid"));

/// A closed set of named values accepted by one option field.
///
/// Values are matched by name; a leading `:` is ignored so that
/// `":primary"` and `"primary"` select the same theme.
pub trait Choice: Copy + Sized + 'static {
    /// Option field this choice is read from
    const FIELD: &'static str;

    /// Every accepted value, in declaration order
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|choice| choice.as_str()).collect()
    }

    fn parse(name: &str) -> Option<Self> {
        let name = name.strip_prefix(':').unwrap_or(name);
        Self::ALL.iter().copied().find(|choice| choice.as_str() == name)
    }

    /// Parse an option value, failing with InvalidOptions naming the field
    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_str()
            .and_then(Self::parse)
            .ok_or_else(|| ComponentError::invalid_option(Self::FIELD, display_value(value), &Self::names()))
    }
}

/// Semantic colour intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Neutral,
}

impl Choice for Theme {
    const FIELD: &'static str = "theme";
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Neutral,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Choice for Size {
    const FIELD: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

/// Structural style modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Outline,
    Ghost,
    Link,
}

impl Choice for Variant {
    const FIELD: &'static str = "variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Outline, Self::Ghost, Self::Link];

    fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }
}

macro_rules! impl_display_for_choice {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_for_choice!(Theme, Size, Variant);

/// Render an option value the way it appears in error messages
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Caller-supplied options for one render call, in insertion order.
///
/// A `null` value is treated the same as an absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentOptions(IndexMap<String, Value>);

impl ComponentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.to_string(), value.into())
    }

    pub fn theme(self, theme: Theme) -> Self {
        self.with("theme", theme.as_str())
    }

    pub fn size(self, size: Size) -> Self {
        self.with("size", size.as_str())
    }

    pub fn variant(self, variant: Variant) -> Self {
        self.with("variant", variant.as_str())
    }

    pub fn custom_classes(self, classes: &str) -> Self {
        self.with("custom_classes", classes)
    }

    /// Look up a field, skipping explicit nulls
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Read a text field. Strings are taken as-is and numbers are rendered.
    pub fn str_opt(&self, field: &str) -> Result<Option<String>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(ComponentError::constraint(
                field,
                Some(display_value(other)),
                format!("Invalid {}: {}. Must be a string", field, other),
            )),
        }
    }

    pub fn require_str(&self, field: &str) -> Result<String> {
        self.str_opt(field)?
            .ok_or_else(|| ComponentError::missing_option(field))
    }

    /// Read a symbolic field such as `form_action` or banner `type`
    pub fn symbol_opt(&self, field: &str) -> Result<Option<String>> {
        Ok(self
            .str_opt(field)?
            .map(|s| s.strip_prefix(':').map(str::to_string).unwrap_or(s)))
    }

    /// Read a boolean flag, falling back to `default` when absent
    pub fn flag(&self, field: &str, default: bool) -> Result<bool> {
        match self.get(field) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(ComponentError::constraint(
                field,
                Some(display_value(other)),
                format!("Invalid {}: {}. Must be true or false", field, other),
            )),
        }
    }
}

impl From<IndexMap<String, Value>> for ComponentOptions {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ComponentOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Which generic styling tables a component kind uses.
///
/// Size and variant are only validated when the matching table is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylingHooks {
    pub size: bool,
    pub variant: bool,
}

impl StylingHooks {
    pub const ALL: Self = Self { size: true, variant: true };
    pub const NONE: Self = Self { size: false, variant: false };
}

/// The validated styling fields shared by every component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOptions {
    pub theme: Theme,
    pub size: Size,
    pub variant: Variant,
    pub custom_classes: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            size: Size::default(),
            variant: Variant::default(),
            custom_classes: String::new(),
        }
    }
}

impl StyleOptions {
    /// Validate theme, size, variant and custom classes, in that order,
    /// failing on the first violation.
    pub fn resolve(options: &ComponentOptions, config: &Configuration, hooks: StylingHooks) -> Result<Self> {
        let theme = match options.get(Theme::FIELD) {
            Some(value) => Theme::from_value(value)?,
            None => config.default_theme,
        };

        let size = match options.get(Size::FIELD) {
            Some(value) if hooks.size => Size::from_value(value)?,
            _ => Size::default(),
        };

        let variant = match options.get(Variant::FIELD) {
            Some(value) if hooks.variant => Variant::from_value(value)?,
            _ => Variant::default(),
        };

        let custom_classes = match options.get("custom_classes") {
            None => String::new(),
            Some(Value::String(s)) if CUSTOM_CLASSES_PATTERN.is_match(s) => s.clone(),
            Some(other) => {
                return Err(ComponentError::constraint(
                    "custom_classes",
                    Some(display_value(other)),
                    "Invalid custom_classes format. Must be a string with valid CSS class names",
                ))
            }
        };

        Ok(Self {
            theme,
            size,
            variant,
            custom_classes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve(options: ComponentOptions) -> Result<StyleOptions> {
        StyleOptions::resolve(&options, &Configuration::default(), StylingHooks::ALL)
    }

    #[test]
    fn test_defaults() {
        let style = resolve(ComponentOptions::new()).unwrap();
        assert_eq!(style, StyleOptions::default());
        assert_eq!(style.theme, Theme::Primary);
        assert_eq!(style.size, Size::Md);
        assert_eq!(style.variant, Variant::Default);
        assert_eq!(style.custom_classes, "");
    }

    #[test]
    fn test_accepts_custom_values() {
        let style = resolve(
            ComponentOptions::new()
                .theme(Theme::Secondary)
                .size(Size::Lg)
                .variant(Variant::Outline)
                .custom_classes("my-class"),
        )
        .unwrap();
        assert_eq!(style.theme, Theme::Secondary);
        assert_eq!(style.size, Size::Lg);
        assert_eq!(style.variant, Variant::Outline);
        assert_eq!(style.custom_classes, "my-class");
    }

    #[test]
    fn test_symbol_style_names() {
        let style = resolve(ComponentOptions::new().with("theme", ":danger")).unwrap();
        assert_eq!(style.theme, Theme::Danger);
    }

    #[test]
    fn test_default_theme_comes_from_configuration() {
        let config = Configuration {
            default_theme: Theme::Neutral,
            ..Configuration::default()
        };
        let style = StyleOptions::resolve(&ComponentOptions::new(), &config, StylingHooks::ALL).unwrap();
        assert_eq!(style.theme, Theme::Neutral);
    }

    #[test]
    fn test_invalid_theme() {
        let err = resolve(ComponentOptions::new().with("theme", "invalid_theme")).unwrap_err();
        assert_eq!(err.field(), Some("theme"));
        let message = err.to_string();
        assert!(message.starts_with("Invalid theme: invalid_theme"));
        assert!(message.contains("primary, secondary, success, warning, danger, neutral"));
    }

    #[test]
    fn test_invalid_size_and_variant() {
        let err = resolve(ComponentOptions::new().with("size", "huge")).unwrap_err();
        assert_eq!(err.field(), Some("size"));
        assert!(err.to_string().contains("Invalid size"));

        let err = resolve(ComponentOptions::new().with("variant", "fancy")).unwrap_err();
        assert_eq!(err.field(), Some("variant"));
        assert!(err.to_string().contains("Invalid variant"));
    }

    #[test]
    fn test_theme_checked_before_size() {
        let err = resolve(ComponentOptions::new().with("size", "huge").with("theme", "nope")).unwrap_err();
        assert_eq!(err.field(), Some("theme"));
    }

    #[test]
    fn test_inactive_hooks_skip_size_and_variant() {
        let options = ComponentOptions::new().with("size", "huge").with("variant", "fancy");
        let style = StyleOptions::resolve(&options, &Configuration::default(), StylingHooks::NONE).unwrap();
        assert_eq!(style.size, Size::Md);
        assert_eq!(style.variant, Variant::Default);
    }

    #[test]
    fn test_custom_classes_charset() {
        assert!(resolve(ComponentOptions::new().custom_classes("hover:bg-red-500 px_2\tmd:flex")).is_ok());

        for bad in ["invalid@class!", "w-1/2", "a.b", "<script>"] {
            let err = resolve(ComponentOptions::new().custom_classes(bad)).unwrap_err();
            assert_eq!(err.field(), Some("custom_classes"), "{bad} should be rejected");
            assert!(err.to_string().contains("Invalid custom_classes format"));
        }
    }

    #[test]
    fn test_custom_classes_reject_non_ascii_whitespace() {
        for bad in ["a\u{00A0}b", "a\u{3000}b", "a\u{2003}b"] {
            let err = resolve(ComponentOptions::new().custom_classes(bad)).unwrap_err();
            assert_eq!(err.field(), Some("custom_classes"));
        }
        assert!(resolve(ComponentOptions::new().custom_classes("a\r\nb\x0Cc")).is_ok());
    }

    #[test]
    fn test_non_string_custom_classes() {
        let err = resolve(ComponentOptions::new().with("custom_classes", json!(["a"]))).unwrap_err();
        assert_eq!(err.field(), Some("custom_classes"));
    }

    #[test]
    fn test_null_counts_as_absent() {
        let options = ComponentOptions::new().with("href", Value::Null);
        assert!(!options.contains("href"));
        assert_eq!(options.str_opt("href").unwrap(), None);
    }

    #[test]
    fn test_flag_accessor() {
        let options = ComponentOptions::new().with("disabled", true).with("loading", "yes");
        assert!(options.flag("disabled", false).unwrap());
        assert!(options.flag("missing", true).unwrap());
        assert_eq!(options.flag("loading", false).unwrap_err().field(), Some("loading"));
    }

    #[test]
    fn test_require_str_reports_missing_field() {
        let err = ComponentOptions::new().require_str("text").unwrap_err();
        assert_eq!(err.to_string(), "text parameter is required");
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let options: ComponentOptions =
            serde_json::from_str(r#"{"text": "Go", "size": "lg", "disabled": true}"#).unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options.require_str("text").unwrap(), "Go");
        let keys: Vec<&String> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["text", "size", "disabled"]);
    }
}

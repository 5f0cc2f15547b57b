use crate::options::{Size, StyleOptions, Theme, Variant};
use indexmap::IndexSet;

/// Structural classes shared by button-like components
pub const BASE_CLASSES: &str =
    "inline-flex items-center justify-center rounded-md border font-medium focus:outline-none focus:ring-2 focus:ring-offset-2";

pub fn theme_classes(theme: Theme) -> &'static str {
    match theme {
        Theme::Primary => "bg-blue-600 text-white border-blue-600 hover:bg-blue-700",
        Theme::Secondary => "bg-gray-600 text-white border-gray-600 hover:bg-gray-700",
        Theme::Success => "bg-green-600 text-white border-green-600 hover:bg-green-700",
        Theme::Warning => "bg-yellow-500 text-black border-yellow-500 hover:bg-yellow-600",
        Theme::Danger => "bg-red-600 text-white border-red-600 hover:bg-red-700",
        Theme::Neutral => "bg-gray-200 text-gray-900 border-gray-200 hover:bg-gray-300",
    }
}

pub fn size_classes(size: Size) -> &'static str {
    match size {
        Size::Xs => "px-2 py-1 text-xs",
        Size::Sm => "px-3 py-2 text-sm",
        Size::Md => "px-4 py-2 text-base",
        Size::Lg => "px-6 py-3 text-lg",
        Size::Xl => "px-8 py-4 text-xl",
    }
}

pub fn variant_classes(variant: Variant) -> &'static str {
    match variant {
        Variant::Default => "",
        Variant::Outline => "bg-transparent border-2",
        Variant::Ghost => "bg-transparent border-transparent hover:bg-gray-100",
        Variant::Link => "bg-transparent border-transparent underline-offset-4 hover:underline",
    }
}

/// Join class segments into one class attribute value.
///
/// Empty segments are dropped, every segment is split on ASCII whitespace, and
/// repeated tokens are removed keeping the first occurrence.
pub fn compose_classes(segments: &[&str]) -> String {
    let tokens: IndexSet<&str> = segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .flat_map(|segment| segment.split_ascii_whitespace())
        .collect();

    tokens.into_iter().collect::<Vec<_>>().join(" ")
}

/// Styling hooks a component exposes to the class composer.
///
/// Every table defaults to the generic lookup keyed by the component's
/// validated [`StyleOptions`]; a component overrides a hook to restyle it
/// or returns `""` to suppress it.
pub trait ClassComposer {
    fn style(&self) -> &StyleOptions;

    fn base_classes(&self) -> &str {
        BASE_CLASSES
    }

    fn theme_classes(&self) -> &str {
        theme_classes(self.style().theme)
    }

    fn size_classes(&self) -> &str {
        size_classes(self.style().size)
    }

    fn variant_classes(&self) -> &str {
        variant_classes(self.style().variant)
    }

    /// Base, theme, size, variant, custom and then `additional` classes
    fn css_classes(&self, additional: &[&str]) -> String {
        let mut segments = vec![
            self.base_classes(),
            self.theme_classes(),
            self.size_classes(),
            self.variant_classes(),
            self.style().custom_classes.as_str(),
        ];
        segments.extend_from_slice(additional);
        compose_classes(&segments)
    }
}

use crate::classes::ClassComposer;
use crate::components::Component;
use crate::config::Configuration;
use crate::errors::{ComponentError, Result};
use crate::markup::{escape, Markup};
use crate::options::{display_value, ComponentOptions, StyleOptions, StylingHooks};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SLIDER_CLASSES: &str = "slider relative w-full max-w-4xl mx-auto";

const NAVIGATION: &str = concat!(
    r#"<div class="slider-navigation absolute inset-y-0 left-0 right-0 flex items-center justify-between px-4">"#,
    r#"<button class="nav-prev bg-white/80 hover:bg-white rounded-full p-2 shadow-lg transition-all duration-200 transform hover:scale-110" aria-label="Previous slide">"#,
    r#"<svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7"></path></svg>"#,
    "</button>",
    r#"<button class="nav-next bg-white/80 hover:bg-white rounded-full p-2 shadow-lg transition-all duration-200 transform hover:scale-110" aria-label="Next slide">"#,
    r#"<svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7"></path></svg>"#,
    "</button></div>"
);

/// One image in a slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub url: String,
    pub alt: String,
}

impl Slide {
    fn from_value(index: usize, value: &Value) -> Result<Self> {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
        match (field("url"), field("alt")) {
            (Some(url), Some(alt)) => Ok(Self { url, alt }),
            _ => Err(ComponentError::constraint(
                "images",
                Some(display_value(value)),
                format!("Image at index {} must have :url and :alt attributes", index),
            )),
        }
    }
}

/// An image carousel
#[derive(Debug, Clone)]
pub struct Slider {
    style: StyleOptions,
    images: Vec<Slide>,
    autoplay: bool,
    navigation: bool,
    pagination: bool,
    looping: bool,
}

impl Slider {
    pub fn images(&self) -> &[Slide] {
        &self.images
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn has_navigation(&self) -> bool {
        self.navigation
    }

    pub fn has_pagination(&self) -> bool {
        self.pagination
    }

    pub fn is_loop(&self) -> bool {
        self.looping
    }

    fn data_attributes(&self) -> String {
        let mut attributes = Vec::with_capacity(3);
        if self.autoplay {
            attributes.push(r#"data-autoplay="true""#.to_string());
        }
        if self.looping {
            attributes.push(r#"data-loop="true""#.to_string());
        }
        attributes.push(format!(r#"data-slides-count="{}""#, self.images.len()));
        attributes.join(" ")
    }

    fn render_slides(&self) -> String {
        self.images
            .iter()
            .enumerate()
            .map(|(index, slide)| {
                format!(
                    r#"<div class="slide w-full flex-none"><img src="{}" alt="{}" class="w-full h-64 md:h-96 object-cover" loading="{}"></div>"#,
                    escape(&slide.url),
                    escape(&slide.alt),
                    if index == 0 { "eager" } else { "lazy" }
                )
            })
            .collect()
    }

    fn render_pagination(&self) -> String {
        let dots: String = (0..self.images.len())
            .map(|index| {
                let active = if index == 0 { " bg-white" } else { "" };
                format!(
                    r#"<button class="pagination-dot w-3 h-3 rounded-full bg-white/50 hover:bg-white/80 transition-colors duration-200{}" data-slide="{}" aria-label="Go to slide {}"></button>"#,
                    active,
                    index,
                    index + 1
                )
            })
            .collect();
        format!(r#"<div class="pagination flex justify-center space-x-2 mt-4">{}</div>"#, dots)
    }
}

impl ClassComposer for Slider {
    fn style(&self) -> &StyleOptions {
        &self.style
    }

    fn base_classes(&self) -> &str {
        ""
    }

    fn theme_classes(&self) -> &str {
        ""
    }

    fn size_classes(&self) -> &str {
        ""
    }

    fn variant_classes(&self) -> &str {
        ""
    }
}

impl Component for Slider {
    const HOOKS: StylingHooks = StylingHooks::ALL;

    fn from_options(options: &ComponentOptions, config: &Configuration) -> Result<Self> {
        let images = options
            .get("images")
            .ok_or_else(|| ComponentError::missing_option("images"))?;
        let autoplay = options.flag("autoplay", false)?;
        let navigation = options.flag("navigation", true)?;
        let pagination = options.flag("pagination", true)?;
        let looping = options.flag("loop", true)?;

        let entries = images.as_array().ok_or_else(|| {
            ComponentError::constraint(
                "images",
                Some(display_value(images)),
                "images must be a list of images",
            )
        })?;
        if entries.is_empty() {
            return Err(ComponentError::constraint(
                "images",
                Some("[]".to_string()),
                "images must contain at least 1 image",
            ));
        }
        let images = entries
            .iter()
            .enumerate()
            .map(|(index, value)| Slide::from_value(index, value))
            .collect::<Result<Vec<_>>>()?;

        let style = StyleOptions::resolve(options, config, Self::HOOKS)?;

        Ok(Self {
            style,
            images,
            autoplay,
            navigation,
            pagination,
            looping,
        })
    }

    fn render(&self) -> Markup {
        let navigation = if self.navigation { NAVIGATION } else { "" };
        let pagination = if self.pagination {
            self.render_pagination()
        } else {
            String::new()
        };

        Markup::new(format!(
            concat!(
                r#"<div class="{}" {}>"#,
                r#"<div class="slider-container overflow-hidden rounded-lg">"#,
                r#"<div class="slider-track flex transition-transform duration-300 ease-in-out">{}</div>"#,
                "</div>{}{}</div>"
            ),
            self.css_classes(&[SLIDER_CLASSES]),
            self.data_attributes(),
            self.render_slides(),
            navigation,
            pagination
        ))
    }
}

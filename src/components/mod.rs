//! The renderable component kinds.
//!
//! Each kind validates its own fields while being built from
//! [`ComponentOptions`], declares which generic styling tables it uses,
//! and renders itself to [`Markup`].

pub mod banner;
pub mod button;
pub mod placeholder;
pub mod slider;

pub use banner::{Banner, BannerType};
pub use button::{Button, ButtonType};
pub use placeholder::{Footer, Login, Placeholder, Pricing};
pub use slider::{Slide, Slider};

use crate::classes::ClassComposer;
use crate::config::Configuration;
use crate::errors::Result;
use crate::markup::Markup;
use crate::options::{ComponentOptions, StylingHooks};

/// Shared capability set of every component kind
pub trait Component: ClassComposer + Sized {
    /// Generic styling tables this kind uses; size and variant are only
    /// validated when their table is active.
    const HOOKS: StylingHooks;

    /// Validate `options` and build the component. Fails before any
    /// markup is produced.
    fn from_options(options: &ComponentOptions, config: &Configuration) -> Result<Self>;

    fn render(&self) -> Markup;
}

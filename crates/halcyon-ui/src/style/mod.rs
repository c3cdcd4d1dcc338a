//! Style resolution.
//!
//! A [`GuiSkin`] maps widget type names (e.g. `"Toggle"`) to immutable
//! [`GuiElementStyle`] bundles. Widgets resolve their style once at
//! construction and again when told the skin changed.

mod element_style;
mod layout_options;
mod skin;

pub use element_style::{ElementState, GuiElementStyle, GuiStateStyle};
pub use layout_options::GuiLayoutOptions;
pub use skin::GuiSkin;

//! Halcyon UI: retained GUI elements drawn as batched sprite quads.
//!
//! Widgets resolve a [`GuiElementStyle`](style::GuiElementStyle) from a
//! [`GuiSkin`](style::GuiSkin) by type name, take pointer events already
//! routed to them, and expose their geometry as render elements that a
//! [`RenderQueue`](render_queue::RenderQueue) collects for the renderer.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use halcyon_ui::prelude::*;
//!
//! let mut toggle = GuiToggle::new(&skin, "Snap");
//! toggle.on_toggled.connect(|on: &bool| log::info!("snap: {on}"));
//!
//! let size = toggle.measure(Constraints::loose(viewport.size));
//! toggle.layout(Rect::from_origin_size(viewport.origin, size), viewport, 0);
//! toggle.on_mouse_event(&GuiMouseEvent::new(MouseEventType::Down, cursor));
//!
//! let mut queue = RenderQueue::new();
//! queue.collect(&mut toggle);
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) and keep an
//! [`ElementBase`](widget::ElementBase) for style, layout and the dirty
//! flag. Composite widgets own their children and forward to them; see
//! [`locate_render_element`](widget::locate_render_element).

pub mod constraints;
pub mod event;
pub mod render_queue;
pub mod signal;
pub mod style;
pub mod widget;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_support;

/// Everything needed to build and extend UI.
pub mod prelude {
    pub use crate::constraints::Constraints;
    pub use crate::event::{EventResult, GuiCommand, GuiMouseEvent, MouseEventType};
    pub use crate::render_queue::{DrawBatch, RenderQueue, SortKey};
    pub use crate::signal::{Event, Subscription};
    pub use crate::style::{ElementState, GuiElementStyle, GuiLayoutOptions, GuiSkin, GuiStateStyle};
    pub use crate::widget::{locate_render_element, ElementBase, Widget};
    pub use crate::widgets::{GuiInputBox, GuiLabel, GuiToggle, InteractionState};

    // Re-export the engine primitives everyone needs.
    pub use halcyon_engine::coords::{Rect, RectOffset, Vec2};
    pub use halcyon_engine::paint::Color;
    pub use halcyon_engine::resources::{HSpriteTexture, SpriteMaterial, SpriteTexture};
    pub use halcyon_engine::sprite::{QuadBufferSet, QuadBuffers};
    pub use halcyon_engine::text::HFont;
}

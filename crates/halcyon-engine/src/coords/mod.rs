//! Geometry types shared by sprites and widgets.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down

mod offset;
mod rect;
mod vec2;

pub use offset::RectOffset;
pub use rect::Rect;
pub use vec2::Vec2;

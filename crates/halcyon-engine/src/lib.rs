//! Halcyon engine crate.
//!
//! Owns the sprite-level pieces the GUI layer renders through: geometry,
//! colors, texture/material handles, bitmap fonts and the image/text sprites
//! that turn descriptors into quad buffers for an external renderer.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod resources;
pub mod sprite;
pub mod text;

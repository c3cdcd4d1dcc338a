//! Color model shared between widgets and sprites.
//!
//! Tints are multiplicative: a sprite's final color is its texture sample
//! times the material tint. White leaves the texture unchanged.

mod color;

pub use color::Color;

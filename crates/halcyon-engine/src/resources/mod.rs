//! Shared rendering resources.
//!
//! Textures and sprite textures are reference counted (`Rc`) and immutable
//! once created. Widgets hold handles and only ever swap which handle is
//! selected; they never modify the resource behind it.

mod material;
mod sprite_texture;
mod texture;

pub use material::{MaterialKind, SpriteMaterial};
pub use sprite_texture::{HSpriteTexture, SpriteTexture};
pub use texture::{HTexture, Texture, TextureError, TextureId};

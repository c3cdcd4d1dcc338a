pub mod input_box;
pub mod label;
mod layers;
pub mod toggle;

pub use input_box::GuiInputBox;
pub use label::GuiLabel;
pub use toggle::{select_texture, toggle_element_state, GuiToggle, InteractionState};

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::GuiElementStyle;

/// Name-keyed collection of element styles.
///
/// A lookup for a name the skin does not define is a configuration error
/// of the host application; it resolves to a shared default style (no
/// textures, no font) and is logged once per name.
#[derive(Debug, Default)]
pub struct GuiSkin {
    styles: HashMap<String, Rc<GuiElementStyle>>,
    default_style: Rc<GuiElementStyle>,
    reported_missing: RefCell<HashSet<String>>,
}

impl GuiSkin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the style for `name`.
    pub fn set_style(&mut self, name: impl Into<String>, style: GuiElementStyle) {
        self.styles.insert(name.into(), Rc::new(style));
    }

    /// Builder form of [`set_style`](Self::set_style).
    pub fn with_style(mut self, name: impl Into<String>, style: GuiElementStyle) -> Self {
        self.set_style(name, style);
        self
    }

    #[inline]
    pub fn has_style(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Resolves `name`, falling back to the default style.
    pub fn style(&self, name: &str) -> Rc<GuiElementStyle> {
        if let Some(style) = self.styles.get(name) {
            return Rc::clone(style);
        }
        if self.reported_missing.borrow_mut().insert(name.to_string()) {
            log::warn!("GUI skin has no style named {name:?}; using default style");
        }
        Rc::clone(&self.default_style)
    }
}

use halcyon_engine::coords::Vec2;

use super::GuiElementStyle;

/// Per-element sizing policy. Derived from the style unless the caller
/// provides explicit options.
///
/// ```rust,ignore
/// GuiToggle::with_layout(&skin, "Snap", GuiLayoutOptions::default().fixed_size(20.0, 20.0))
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GuiLayoutOptions {
    pub fixed_width: bool,
    pub width: f32,
    pub fixed_height: bool,
    pub height: f32,
    /// Zero means "no limit".
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl GuiLayoutOptions {
    pub fn from_style(style: &GuiElementStyle) -> Self {
        Self {
            fixed_width: style.fixed_width,
            width: style.width,
            fixed_height: style.fixed_height,
            height: style.height,
            min_width: style.min_width,
            max_width: style.max_width,
            min_height: style.min_height,
            max_height: style.max_height,
        }
    }

    pub fn fixed_width(mut self, w: f32) -> Self { self.fixed_width = true; self.width = w; self }
    pub fn fixed_height(mut self, h: f32) -> Self { self.fixed_height = true; self.height = h; self }
    pub fn fixed_size(self, w: f32, h: f32) -> Self { self.fixed_width(w).fixed_height(h) }
    pub fn flexible_width(mut self, min: f32, max: f32) -> Self {
        self.fixed_width = false;
        self.min_width = min;
        self.max_width = max;
        self
    }
    pub fn flexible_height(mut self, min: f32, max: f32) -> Self {
        self.fixed_height = false;
        self.min_height = min;
        self.max_height = max;
        self
    }

    /// Applies the policy to a widget's natural size.
    #[must_use]
    pub fn constrain(&self, optimal: Vec2) -> Vec2 {
        Vec2::new(
            axis(optimal.x, self.fixed_width, self.width, self.min_width, self.max_width),
            axis(optimal.y, self.fixed_height, self.height, self.min_height, self.max_height),
        )
    }
}

fn axis(optimal: f32, fixed: bool, size: f32, min: f32, max: f32) -> f32 {
    if fixed {
        return size;
    }
    let mut v = optimal;
    if min > 0.0 {
        v = v.max(min);
    }
    if max > 0.0 {
        v = v.min(max);
    }
    v
}

use halcyon_engine::coords::Vec2;

/// Discrete mouse transitions delivered by the input dispatcher.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseEventType {
    /// Cursor entered the element.
    Over,
    /// Cursor left the element.
    Out,
    /// Cursor moved while inside the element.
    Move,
    /// Primary button pressed over the element.
    Down,
    /// Primary button released over the element.
    Up,
}

/// A mouse event routed to one widget.
///
/// Leaf widgets only look at `kind`; composite widgets use `position` to pick
/// which child receives it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GuiMouseEvent {
    pub kind: MouseEventType,
    /// Cursor position in logical pixels, same space as widget layout.
    pub position: Vec2,
}

impl GuiMouseEvent {
    #[inline]
    pub const fn new(kind: MouseEventType, position: Vec2) -> Self {
        Self { kind, position }
    }

    /// Same position, different transition.
    #[inline]
    pub const fn with_kind(self, kind: MouseEventType) -> Self {
        Self { kind, position: self.position }
    }
}

/// Editing commands delivered to the widget holding input focus.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GuiCommand {
    Backspace,
    /// Commit the edit (Enter).
    Confirm,
    /// Abandon the edit (Escape).
    Cancel,
}

/// Result returned by widget input handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }

    /// `Consumed` if either side consumed.
    #[inline]
    #[must_use]
    pub fn or(self, other: EventResult) -> EventResult {
        if self.is_consumed() || other.is_consumed() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

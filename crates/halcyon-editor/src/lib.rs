//! Editor fields built from `halcyon-ui` widgets.
//!
//! Every field is a label column followed by one or more input widgets.
//! Composite fields own their children and report a single value.

pub mod field;
pub mod float_field;
pub mod vector2_field;

#[cfg(test)]
pub(crate) mod test_support;

pub use field::FieldBase;
pub use float_field::GuiFloatField;
pub use vector2_field::GuiVector2Field;

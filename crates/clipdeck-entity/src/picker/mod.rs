//! Value objects produced by the material picker.

pub mod selection;

pub use selection::{MoveTarget, PickerSelection};

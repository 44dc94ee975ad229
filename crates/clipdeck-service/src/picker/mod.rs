//! Material picker state and orchestration.

pub mod service;
pub mod state;

pub use service::{PickerService, PickerView};
pub use state::PickerState;

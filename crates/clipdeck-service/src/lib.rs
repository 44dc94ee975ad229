//! # clipdeck-service
//!
//! Folder picker logic for the ClipDeck material library. The tree
//! functions in [`folder`] are synchronous and never fail;
//! [`picker::PickerService`] wires them to the folder/material sources.
//! Services receive their sources at construction time as `Arc` trait
//! objects.

pub mod folder;
pub mod picker;

pub use folder::{
    DEFAULT_RECENT_LIMIT, breadcrumbs, build, build_with_counts, filter, move_targets, recent,
};
pub use picker::{PickerService, PickerState, PickerView};

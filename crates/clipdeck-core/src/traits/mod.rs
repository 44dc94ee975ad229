//! Core traits defined in `clipdeck-core` and implemented by other crates.

pub mod source;

pub use source::{FolderSource, MaterialSource};

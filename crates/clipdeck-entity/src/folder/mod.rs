//! Folder domain entities.

pub mod kind;
pub mod model;
pub mod tree;

pub use kind::infer_type;
pub use model::FolderRecord;
pub use tree::{FolderForest, FolderNode, PreOrder};

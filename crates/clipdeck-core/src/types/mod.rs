//! Shared value types.

pub mod id;
pub mod media;

pub use id::{FolderId, MaterialId, OwnerId};
pub use media::MaterialType;

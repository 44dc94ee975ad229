//! Folder and material source implementations.

pub mod folder;
pub mod material;
pub mod snapshot;

pub use folder::PgFolderRepository;
pub use material::PgMaterialRepository;
pub use snapshot::{LibrarySnapshot, SnapshotSource};

//! # clipdeck-database
//!
//! PostgreSQL connection management and the concrete folder/material
//! sources consumed by the picker: the hosted database and an offline
//! JSON snapshot.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{PgFolderRepository, PgMaterialRepository, SnapshotSource};

//! Offline folder/material source backed by a JSON export.
//!
//! The snapshot holds one owner's library, so the `owner` argument of the
//! source traits is accepted but not used for filtering.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use clipdeck_core::error::{AppError, ErrorKind};
use clipdeck_core::result::AppResult;
use clipdeck_core::traits::{FolderSource, MaterialSource};
use clipdeck_core::types::{FolderId, OwnerId};
use clipdeck_entity::folder::FolderRecord;
use clipdeck_entity::material::Material;

/// On-disk layout of a library export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    /// Flat folder list in backend order.
    #[serde(default)]
    pub folders: Vec<FolderRecord>,
    /// Every material in the library.
    #[serde(default)]
    pub materials: Vec<Material>,
}

/// Serves folders and materials from an in-memory [`LibrarySnapshot`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    snapshot: LibrarySnapshot,
}

impl SnapshotSource {
    /// Wrap an already-parsed snapshot.
    pub fn new(snapshot: LibrarySnapshot) -> Self {
        Self { snapshot }
    }

    /// Read and parse a snapshot file.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read snapshot {}", path.display()),
                e,
            )
        })?;

        let snapshot: LibrarySnapshot = serde_json::from_str(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Invalid snapshot {}: {e}", path.display()),
                e,
            )
        })?;

        debug!(
            path = %path.display(),
            folders = snapshot.folders.len(),
            materials = snapshot.materials.len(),
            "Loaded library snapshot"
        );
        Ok(Self::new(snapshot))
    }

    /// The wrapped snapshot.
    pub fn snapshot(&self) -> &LibrarySnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl FolderSource<FolderRecord> for SnapshotSource {
    async fn list_folders(&self, _owner: OwnerId) -> AppResult<Vec<FolderRecord>> {
        Ok(self.snapshot.folders.clone())
    }
}

#[async_trait]
impl MaterialSource<Material> for SnapshotSource {
    async fn list_materials(&self, _owner: OwnerId, folder: &FolderId) -> AppResult<Vec<Material>> {
        Ok(self
            .snapshot
            .materials
            .iter()
            .filter(|m| m.folder_id.as_ref() == Some(folder))
            .cloned()
            .collect())
    }

    async fn count_by_folder(&self, _owner: OwnerId) -> AppResult<HashMap<FolderId, u64>> {
        let mut counts = HashMap::new();
        for folder_id in self.snapshot.materials.iter().filter_map(|m| m.folder_id.as_ref()) {
            *counts.entry(folder_id.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

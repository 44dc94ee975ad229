//! Folder entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use clipdeck_core::types::FolderId;

/// A material folder as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FolderRecord {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Display name. Also drives content type inference.
    pub name: String,
    /// Parent folder ID (null for root folders).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
}

impl FolderRecord {
    /// Create a folder record.
    pub fn new(
        id: impl Into<FolderId>,
        name: impl Into<String>,
        parent_id: Option<FolderId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id,
        }
    }

    /// Check if this record declares no parent.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

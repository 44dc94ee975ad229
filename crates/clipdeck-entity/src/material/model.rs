//! Material entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use clipdeck_core::types::{FolderId, MaterialId, MaterialType};

/// A video, image or audio file in the material library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Material {
    /// Unique material identifier.
    pub id: MaterialId,
    /// Display name.
    pub name: String,
    /// File type as recorded at upload (`"video"`, `"image"`, `"audio"` or a MIME type).
    pub file_type: String,
    /// Top-level category label.
    #[serde(default)]
    pub category: Option<String>,
    /// Second-level category label.
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Duration in seconds (absent for images).
    #[serde(default)]
    pub duration: Option<f64>,
    /// Folder holding this material.
    #[serde(default)]
    pub folder_id: Option<FolderId>,
    /// When the material was uploaded.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Material {
    /// Content category derived from `file_type`, accepting bare names or MIME prefixes.
    pub fn material_type(&self) -> Option<MaterialType> {
        let head = self.file_type.split('/').next().unwrap_or_default();
        head.parse().ok()
    }
}

//! Picker outputs.

use serde::{Deserialize, Serialize};

use clipdeck_core::types::{FolderId, MaterialId, MaterialType};

/// Emitted when the user confirms the picker, e.g. to attach a file to a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerSelection {
    /// Selected folder.
    pub folder_id: FolderId,
    /// Selected folder's display name.
    pub folder_name: String,
    /// Selected file, if the user drilled into the folder.
    pub file_id: Option<MaterialId>,
    /// Selected file's display name.
    pub file_name: Option<String>,
}

/// A folder that a batch of folders may be moved into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTarget {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Depth below its root (roots are 0).
    pub depth: usize,
    /// Resolved content type.
    pub kind: Option<MaterialType>,
}

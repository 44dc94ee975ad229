//! Expansion and selection state of the folder picker.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use clipdeck_core::types::{FolderId, MaterialId};
use clipdeck_entity::folder::FolderForest;
use clipdeck_entity::picker::PickerSelection;

/// Which folders are expanded and what is selected.
///
/// Expansion and selection are independent: toggling a folder never
/// changes the selection. Only one folder, and at most one file inside
/// it, can be selected at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerState {
    expanded: BTreeSet<FolderId>,
    selected_folder: Option<(FolderId, String)>,
    selected_file: Option<(MaterialId, String)>,
}

impl PickerState {
    /// Creates a state with nothing expanded or selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets for a fresh picker session: every folder in `forest` is
    /// expanded and the selection is cleared.
    pub fn open(&mut self, forest: &FolderForest) {
        self.expanded = forest.pre_order().map(|node| node.id.clone()).collect();
        self.clear_selection();
    }

    /// Flips the expansion of `id`.
    pub fn toggle_expanded(&mut self, id: &FolderId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    /// Returns whether `id` is expanded.
    pub fn is_expanded(&self, id: &FolderId) -> bool {
        self.expanded.contains(id)
    }

    /// Expanded folder IDs.
    pub fn expanded(&self) -> &BTreeSet<FolderId> {
        &self.expanded
    }

    /// Collapses every folder.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Selects a folder and drops any file selection.
    pub fn select_folder(&mut self, id: FolderId, name: impl Into<String>) {
        self.selected_folder = Some((id, name.into()));
        self.selected_file = None;
    }

    /// Selects a file together with the folder that holds it.
    pub fn select_file(
        &mut self,
        folder_id: FolderId,
        folder_name: impl Into<String>,
        file_id: MaterialId,
        file_name: impl Into<String>,
    ) {
        self.selected_folder = Some((folder_id, folder_name.into()));
        self.selected_file = Some((file_id, file_name.into()));
    }

    /// Clears folder and file selection.
    pub fn clear_selection(&mut self) {
        self.selected_folder = None;
        self.selected_file = None;
    }

    /// Currently selected folder ID.
    pub fn selected_folder(&self) -> Option<&FolderId> {
        self.selected_folder.as_ref().map(|(id, _)| id)
    }

    /// Currently selected file ID.
    pub fn selected_file(&self) -> Option<&MaterialId> {
        self.selected_file.as_ref().map(|(id, _)| id)
    }

    /// The selection to hand back to the caller, if a folder is selected.
    pub fn confirm(&self) -> Option<PickerSelection> {
        let (folder_id, folder_name) = self.selected_folder.clone()?;
        let (file_id, file_name) = match self.selected_file.clone() {
            Some((id, name)) => (Some(id), Some(name)),
            None => (None, None),
        };
        Some(PickerSelection {
            folder_id,
            folder_name,
            file_id,
            file_name,
        })
    }
}

//! Loads folder listings and prepares picker sessions.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use clipdeck_core::config::picker::PickerConfig;
use clipdeck_core::error::AppError;
use clipdeck_core::traits::{FolderSource, MaterialSource};
use clipdeck_core::types::{FolderId, MaterialType, OwnerId};
use clipdeck_entity::folder::{FolderForest, FolderNode, FolderRecord};
use clipdeck_entity::material::Material;

use crate::folder::{build_with_counts, filter, recent};

use super::state::PickerState;

/// One opened picker: the filtered forest plus its fresh state.
#[derive(Debug, Clone)]
pub struct PickerView {
    /// Folders offered by the picker.
    pub forest: FolderForest,
    /// Expansion and selection state, reset on open.
    pub state: PickerState,
    /// Length of the recent-folders list.
    pub recent_limit: usize,
}

impl PickerView {
    /// Recently added folders within the offered forest.
    pub fn recent(&self) -> Vec<&FolderNode> {
        recent(&self.forest, self.recent_limit)
    }

    /// Opens the view again, discarding prior expansion and selection.
    pub fn reopen(&mut self) {
        self.state.open(&self.forest);
    }
}

/// Builds folder forests from the configured sources.
#[derive(Clone)]
pub struct PickerService {
    /// Folder listing source.
    folders: Arc<dyn FolderSource<FolderRecord>>,
    /// Material listing source.
    materials: Arc<dyn MaterialSource<Material>>,
    /// Picker defaults.
    config: PickerConfig,
}

impl std::fmt::Debug for PickerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PickerService {
    /// Creates a new picker service.
    pub fn new(
        folders: Arc<dyn FolderSource<FolderRecord>>,
        materials: Arc<dyn MaterialSource<Material>>,
        config: PickerConfig,
    ) -> Self {
        Self {
            folders,
            materials,
            config,
        }
    }

    /// Builds the owner's complete, unfiltered folder forest with material counts.
    pub async fn forest(&self, owner: OwnerId) -> Result<FolderForest, AppError> {
        let records = self.folders.list_folders(owner).await?;
        let counts = self.materials.count_by_folder(owner).await?;
        Ok(build_with_counts(&records, &counts))
    }

    /// Opens a picker offering folders of `wanted` types, or the configured
    /// default types when `wanted` is `None`.
    pub async fn open(
        &self,
        owner: OwnerId,
        wanted: Option<&[MaterialType]>,
    ) -> Result<PickerView, AppError> {
        let wanted: HashSet<MaterialType> = wanted
            .unwrap_or(self.config.wanted_types.as_slice())
            .iter()
            .copied()
            .collect();

        let full = self.forest(owner).await?;
        let forest = filter(&full, &wanted);

        info!(
            owner = %owner,
            folders = full.len(),
            offered = forest.len(),
            "Opened material picker"
        );

        let mut state = PickerState::new();
        state.open(&forest);

        Ok(PickerView {
            forest,
            state,
            recent_limit: self.config.recent_limit,
        })
    }

    /// Lists the materials of one folder for the picker's file column.
    pub async fn files(
        &self,
        owner: OwnerId,
        folder: &FolderId,
    ) -> Result<Vec<Material>, AppError> {
        self.materials.list_materials(owner, folder).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use clipdeck_core::result::AppResult;
    use clipdeck_core::types::MaterialId;

    struct Library {
        folders: Vec<FolderRecord>,
        materials: Vec<Material>,
    }

    #[async_trait]
    impl FolderSource<FolderRecord> for Library {
        async fn list_folders(&self, _owner: OwnerId) -> AppResult<Vec<FolderRecord>> {
            Ok(self.folders.clone())
        }
    }

    #[async_trait]
    impl MaterialSource<Material> for Library {
        async fn list_materials(
            &self,
            _owner: OwnerId,
            folder: &FolderId,
        ) -> AppResult<Vec<Material>> {
            Ok(self
                .materials
                .iter()
                .filter(|m| m.folder_id.as_ref() == Some(folder))
                .cloned()
                .collect())
        }

        async fn count_by_folder(&self, _owner: OwnerId) -> AppResult<HashMap<FolderId, u64>> {
            let mut counts = HashMap::new();
            for id in self.materials.iter().filter_map(|m| m.folder_id.clone()) {
                *counts.entry(id).or_insert(0) += 1;
            }
            Ok(counts)
        }
    }

    struct Offline;

    #[async_trait]
    impl FolderSource<FolderRecord> for Offline {
        async fn list_folders(&self, _owner: OwnerId) -> AppResult<Vec<FolderRecord>> {
            Err(AppError::database("connection refused"))
        }
    }

    fn material(id: &str, folder: &str) -> Material {
        Material {
            id: MaterialId::from(id),
            name: format!("{id}.mp4"),
            file_type: "video".to_string(),
            category: None,
            subcategory: None,
            duration: Some(4.0),
            folder_id: Some(FolderId::from(folder)),
            created_at: None,
        }
    }

    fn service() -> PickerService {
        let library = Arc::new(Library {
            folders: vec![
                FolderRecord::new("v", "视频", None),
                FolderRecord::new("v1", "开场", Some(FolderId::from("v"))),
                FolderRecord::new("a", "音频", None),
                FolderRecord::new("misc", "杂项", None),
                FolderRecord::new("img", "图片", Some(FolderId::from("misc"))),
            ],
            materials: vec![material("m1", "v1"), material("m2", "v1"), material("m3", "a")],
        });
        PickerService::new(library.clone(), library, PickerConfig::default())
    }

    fn owner() -> OwnerId {
        OwnerId::from(uuid::Uuid::nil())
    }

    #[tokio::test]
    async fn test_open_filters_to_default_types() {
        let view = service().open(owner(), None).await.expect("open");
        let ids: Vec<&str> = view.forest.pre_order().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["v", "v1", "misc", "img"]);
        assert!(view.state.is_expanded(&FolderId::from("misc")));
        assert!(view.state.selected_folder().is_none());
    }

    #[tokio::test]
    async fn test_open_with_explicit_types() {
        let view = service()
            .open(owner(), Some([MaterialType::Audio].as_slice()))
            .await
            .expect("open");
        let ids: Vec<&str> = view.forest.pre_order().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["a"]);
        assert_eq!(view.forest.roots[0].count, 1);
    }

    #[tokio::test]
    async fn test_forest_carries_counts() {
        let forest = service().forest(owner()).await.expect("forest");
        assert_eq!(forest.len(), 5);
        assert_eq!(forest.find(&FolderId::from("v1")).map(|n| n.count), Some(2));
        assert_eq!(forest.find(&FolderId::from("v")).map(|n| n.count), Some(0));
    }

    #[tokio::test]
    async fn test_reopen_resets_state() {
        let mut view = service().open(owner(), None).await.expect("open");
        view.state.toggle_expanded(&FolderId::from("v"));
        view.state.select_folder(FolderId::from("v1"), "开场");

        view.reopen();
        assert!(view.state.is_expanded(&FolderId::from("v")));
        assert!(view.state.confirm().is_none());
    }

    #[tokio::test]
    async fn test_recent_uses_configured_limit() {
        let mut view = service().open(owner(), None).await.expect("open");
        view.recent_limit = 2;
        let ids: Vec<&str> = view.recent().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["misc", "img"]);
    }

    #[tokio::test]
    async fn test_files_pass_through() {
        let files = service()
            .files(owner(), &FolderId::from("v1"))
            .await
            .expect("files");
        let ids: Vec<&str> = files.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_source_errors_propagate() {
        let library = Arc::new(Library {
            folders: Vec::new(),
            materials: Vec::new(),
        });
        let svc = PickerService::new(Arc::new(Offline), library, PickerConfig::default());
        let err = svc.open(owner(), None).await.expect_err("offline");
        assert_eq!(err.kind, clipdeck_core::error::ErrorKind::Database);
    }
}

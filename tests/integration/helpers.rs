//! Shared test helpers for integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use clipdeck_core::config::AppConfig;
use clipdeck_core::types::OwnerId;
use clipdeck_database::SnapshotSource;
use clipdeck_entity::folder::FolderForest;
use clipdeck_service::PickerService;

/// Path of the sample library export.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/library.json")
}

/// The owner used for snapshot-backed tests.
pub fn owner() -> OwnerId {
    OwnerId::from(uuid::Uuid::nil())
}

/// A picker service over the sample library with default settings.
pub async fn picker() -> PickerService {
    let source = Arc::new(
        SnapshotSource::load(fixture_path())
            .await
            .expect("Failed to load fixture snapshot"),
    );
    let config = AppConfig::from_toml_str("").expect("default config");
    PickerService::new(source.clone(), source, config.picker)
}

/// IDs in pre-order.
pub fn ids(forest: &FolderForest) -> Vec<&str> {
    forest.pre_order().map(|n| n.id.as_str()).collect()
}

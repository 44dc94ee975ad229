//! Folder forest construction over the sample library.

use clipdeck_core::types::{FolderId, MaterialType};
use clipdeck_database::SnapshotSource;
use clipdeck_service::{breadcrumbs, build, move_targets};

use crate::helpers::{fixture_path, ids, owner, picker};

#[tokio::test]
async fn test_full_forest_contains_every_folder_once() {
    let forest = picker().await.forest(owner()).await.expect("forest");

    assert_eq!(
        ids(&forest),
        [
            "f-video",
            "f-open",
            "f-open-kids",
            "f-product",
            "f-brand",
            "f-cover",
            "f-logo",
            "f-sfx",
            "f-whoosh",
            "f-orphan",
            "f-loop-a",
            "f-loop-b",
        ]
    );
}

#[tokio::test]
async fn test_dangling_and_cyclic_folders_become_roots() {
    let forest = picker().await.forest(owner()).await.expect("forest");
    let roots: Vec<&str> = forest.roots.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(roots, ["f-video", "f-brand", "f-sfx", "f-orphan", "f-loop-a"]);
    assert_eq!(forest.roots[4].children[0].id.as_str(), "f-loop-b");
}

#[tokio::test]
async fn test_types_are_inferred_and_inherited() {
    let forest = picker().await.forest(owner()).await.expect("forest");
    let kind = |id: &str| forest.find(&FolderId::from(id)).and_then(|n| n.kind);

    assert_eq!(kind("f-open-kids"), Some(MaterialType::Video));
    assert_eq!(kind("f-product"), Some(MaterialType::Video));
    assert_eq!(kind("f-cover"), Some(MaterialType::Image));
    assert_eq!(kind("f-logo"), None);
    assert_eq!(kind("f-whoosh"), Some(MaterialType::Audio));
    assert_eq!(kind("f-orphan"), Some(MaterialType::Video));
}

#[tokio::test]
async fn test_counts_come_from_materials() {
    let forest = picker().await.forest(owner()).await.expect("forest");
    let count = |id: &str| forest.find(&FolderId::from(id)).map(|n| n.count);

    assert_eq!(count("f-open"), Some(2));
    assert_eq!(count("f-open-kids"), Some(1));
    assert_eq!(count("f-video"), Some(0));
}

#[tokio::test]
async fn test_rebuild_is_structurally_equal() {
    let source = SnapshotSource::load(fixture_path()).await.expect("fixture");
    let folders = &source.snapshot().folders;
    assert_eq!(build(folders), build(folders));
}

#[tokio::test]
async fn test_move_targets_and_breadcrumbs() {
    let forest = picker().await.forest(owner()).await.expect("forest");

    let targets = move_targets(&forest, &[FolderId::from("f-open")]);
    let target_ids: Vec<&str> = targets.iter().map(|t| t.id.as_str()).collect();
    assert!(target_ids.contains(&"f-video"));
    assert!(!target_ids.contains(&"f-open"));
    assert!(!target_ids.contains(&"f-open-kids"));
    assert_eq!(targets.len(), 10);

    let trail: Vec<&str> = breadcrumbs(&forest, &FolderId::from("f-open-kids"))
        .iter()
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(trail, ["视频素材", "开场", "儿童"]);
}

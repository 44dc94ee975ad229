//! Picker sessions over the sample library.

use clipdeck_core::types::{FolderId, MaterialId, MaterialType};

use crate::helpers::{ids, owner, picker};

#[tokio::test]
async fn test_default_picker_offers_video_and_image_folders() {
    let view = picker().await.open(owner(), None).await.expect("open");

    assert_eq!(
        ids(&view.forest),
        [
            "f-video",
            "f-open",
            "f-open-kids",
            "f-product",
            "f-brand",
            "f-cover",
            "f-orphan",
        ]
    );
    // f-brand has no type of its own but leads to an image folder.
    let brand = &view.forest.roots[1];
    assert_eq!(brand.kind, None);
    assert_eq!(brand.children.len(), 1);
}

#[tokio::test]
async fn test_audio_only_picker() {
    let view = picker()
        .await
        .open(owner(), Some([MaterialType::Audio].as_slice()))
        .await
        .expect("open");
    assert_eq!(ids(&view.forest), ["f-sfx", "f-whoosh"]);
}

#[tokio::test]
async fn test_recent_shortcuts_are_last_five_offered() {
    let view = picker().await.open(owner(), None).await.expect("open");
    let recent: Vec<&str> = view.recent().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        recent,
        ["f-open-kids", "f-product", "f-brand", "f-cover", "f-orphan"]
    );
}

#[tokio::test]
async fn test_open_expands_everything_offered() {
    let view = picker().await.open(owner(), None).await.expect("open");
    for id in view.forest.all_ids() {
        assert!(view.state.is_expanded(&id), "{id} should be expanded");
    }
    assert!(!view.state.is_expanded(&FolderId::from("f-sfx")));
    assert!(view.state.confirm().is_none());
}

#[tokio::test]
async fn test_select_file_then_confirm() {
    let svc = picker().await;
    let mut view = svc.open(owner(), None).await.expect("open");
    let folder = FolderId::from("f-open");

    let files = svc.files(owner(), &folder).await.expect("files");
    let names: Vec<&str> = files.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["intro.mp4", "intro-alt.mp4"]);

    view.state
        .select_file(folder.clone(), "开场", files[0].id.clone(), files[0].name.clone());
    let selection = view.state.confirm().expect("selection");
    assert_eq!(selection.folder_id, folder);
    assert_eq!(selection.file_id, Some(MaterialId::from("m-01")));
    assert_eq!(selection.file_name.as_deref(), Some("intro.mp4"));

    // Picking another folder drops the file.
    view.state.select_folder(FolderId::from("f-cover"), "封面图片");
    let selection = view.state.confirm().expect("selection");
    assert_eq!(selection.folder_name, "封面图片");
    assert!(selection.file_id.is_none());
}

#[tokio::test]
async fn test_reopen_after_partial_session() {
    let mut view = picker().await.open(owner(), None).await.expect("open");
    view.state.toggle_expanded(&FolderId::from("f-video"));
    view.state.toggle_expanded(&FolderId::from("f-brand"));
    view.state.select_folder(FolderId::from("f-product"), "产品展示");

    view.reopen();

    assert!(view.state.is_expanded(&FolderId::from("f-video")));
    assert!(view.state.is_expanded(&FolderId::from("f-brand")));
    assert!(view.state.selected_folder().is_none());
}

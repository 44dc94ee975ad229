//! Content type inference from folder names.

use clipdeck_core::types::MaterialType;

const VIDEO_MARKERS: &[&str] = &["视频"];
const IMAGE_MARKERS: &[&str] = &["图片"];
const AUDIO_MARKERS: &[&str] = &["音频", "音效"];

/// Infers a folder's content type from substrings of its name.
///
/// Video wins over image, image over audio, when a name carries several
/// markers.
pub fn infer_type(name: &str) -> Option<MaterialType> {
    let has = |markers: &[&str]| markers.iter().any(|m| name.contains(m));

    if has(VIDEO_MARKERS) {
        Some(MaterialType::Video)
    } else if has(IMAGE_MARKERS) {
        Some(MaterialType::Image)
    } else if has(AUDIO_MARKERS) {
        Some(MaterialType::Audio)
    } else {
        None
    }
}

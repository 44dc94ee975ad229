//! "Recently added" shortcut list.
//!
//! Folders carry no timestamps, so position in the pre-order traversal
//! stands in for recency: the last folders visited are the shortcuts.

use clipdeck_entity::folder::{FolderForest, FolderNode};

/// Number of shortcuts shown by default.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Returns the trailing `limit` folders of the forest's pre-order traversal.
pub fn recent(forest: &FolderForest, limit: usize) -> Vec<&FolderNode> {
    let flat: Vec<&FolderNode> = forest.pre_order().collect();
    let skip = flat.len().saturating_sub(limit);
    flat.into_iter().skip(skip).collect()
}

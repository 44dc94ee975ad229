//! Path and move-target queries used by the sidebar and batch-move dialog.

use std::collections::HashSet;

use clipdeck_core::types::FolderId;
use clipdeck_entity::folder::{FolderForest, FolderNode};
use clipdeck_entity::picker::MoveTarget;

/// Lists folders that the `moving` folders may be moved into, in pre-order.
///
/// The moving folders and everything below them are excluded, since
/// moving a folder into its own subtree would create a cycle.
pub fn move_targets(forest: &FolderForest, moving: &[FolderId]) -> Vec<MoveTarget> {
    let moving: HashSet<&FolderId> = moving.iter().collect();
    let mut targets = Vec::new();
    let mut skip_below: Option<usize> = None;

    for (depth, node) in forest.walk() {
        match skip_below {
            Some(d) if depth > d => continue,
            _ => skip_below = None,
        }
        if moving.contains(&node.id) {
            skip_below = Some(depth);
            continue;
        }
        targets.push(MoveTarget {
            id: node.id.clone(),
            name: node.name.clone(),
            depth,
            kind: node.kind,
        });
    }

    targets
}

/// Root-to-folder path ending at `id`; empty when `id` is not in the forest.
pub fn breadcrumbs<'a>(forest: &'a FolderForest, id: &FolderId) -> Vec<&'a FolderNode> {
    let mut path: Vec<&FolderNode> = Vec::new();
    for (depth, node) in forest.walk() {
        path.truncate(depth);
        path.push(node);
        if &node.id == id {
            return path;
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folder::hierarchy::build;
    use clipdeck_entity::folder::FolderRecord;

    fn library() -> FolderForest {
        let rec = |id: &str, parent: Option<&str>| {
            FolderRecord::new(id, id.to_uppercase(), parent.map(FolderId::from))
        };
        build(&[
            rec("a", None),
            rec("a1", Some("a")),
            rec("a1x", Some("a1")),
            rec("a2", Some("a")),
            rec("b", None),
            rec("b1", Some("b")),
        ])
    }

    fn target_ids(targets: &[MoveTarget]) -> Vec<&str> {
        targets.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_move_targets_exclude_moving_subtrees() {
        let forest = library();
        let targets = move_targets(&forest, &[FolderId::from("a1")]);
        assert_eq!(target_ids(&targets), ["a", "a2", "b", "b1"]);
        assert_eq!(targets[1].depth, 1);
    }

    #[test]
    fn test_move_targets_with_several_folders() {
        let forest = library();
        let targets = move_targets(&forest, &[FolderId::from("b"), FolderId::from("a1x")]);
        assert_eq!(target_ids(&targets), ["a", "a1", "a2"]);
    }

    #[test]
    fn test_move_targets_without_moving_lists_all() {
        let forest = library();
        assert_eq!(move_targets(&forest, &[]).len(), 6);
    }

    #[test]
    fn test_breadcrumbs() {
        let forest = library();
        let names: Vec<&str> = breadcrumbs(&forest, &FolderId::from("a1x"))
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, ["A", "A1", "A1X"]);

        let names: Vec<&str> = breadcrumbs(&forest, &FolderId::from("b1"))
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, ["B", "B1"]);

        assert!(breadcrumbs(&forest, &FolderId::from("nope")).is_empty());
    }
}

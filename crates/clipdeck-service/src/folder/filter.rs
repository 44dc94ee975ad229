//! Pruning a folder forest down to the requested content types.

use std::collections::HashSet;

use clipdeck_core::types::MaterialType;
use clipdeck_entity::folder::{FolderForest, FolderNode};

/// Returns a pruned copy of `forest` keeping folders of the `wanted` types.
///
/// A folder survives when its own type is wanted or when any descendant
/// survives, so the ancestor chain down to every match is preserved.
/// Surviving folders carry only their surviving children.
pub fn filter(forest: &FolderForest, wanted: &HashSet<MaterialType>) -> FolderForest {
    FolderForest::new(
        forest
            .roots
            .iter()
            .filter_map(|root| prune(root, wanted))
            .collect(),
    )
}

/// A folder whose children are still being pruned.
struct Frame<'a> {
    node: &'a FolderNode,
    next: usize,
    kept: Vec<FolderNode>,
}

impl<'a> Frame<'a> {
    fn new(node: &'a FolderNode) -> Self {
        Self {
            node,
            next: 0,
            kept: Vec::new(),
        }
    }
}

/// Post-order walk with an explicit stack, so chain depth is bounded by
/// heap rather than call stack.
fn prune<'a>(root: &'a FolderNode, wanted: &HashSet<MaterialType>) -> Option<FolderNode> {
    let mut stack = vec![Frame::new(root)];

    while let Some(frame) = stack.last_mut() {
        let node: &'a FolderNode = frame.node;
        if let Some(child) = node.children.get(frame.next) {
            frame.next += 1;
            stack.push(Frame::new(child));
            continue;
        }

        let kept = std::mem::take(&mut frame.kept);
        stack.pop();

        let matches = node.kind.is_some_and(|kind| wanted.contains(&kind));
        let pruned = (matches || !kept.is_empty()).then(|| FolderNode {
            id: node.id.clone(),
            name: node.name.clone(),
            count: node.count,
            kind: node.kind,
            children: kept,
        });

        match stack.last_mut() {
            Some(parent) => parent.kept.extend(pruned),
            None => return pruned,
        }
    }

    None
}

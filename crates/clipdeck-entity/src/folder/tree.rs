//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use clipdeck_core::types::{FolderId, MaterialType};

/// A node in a folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Number of materials in this folder.
    pub count: u64,
    /// Resolved content type, if any.
    #[serde(rename = "type")]
    pub kind: Option<MaterialType>,
    /// Child folder nodes, in input order.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Create a leaf node.
    pub fn leaf(id: FolderId, name: impl Into<String>, kind: Option<MaterialType>) -> Self {
        Self {
            id,
            name: name.into(),
            count: 0,
            kind,
            children: Vec::new(),
        }
    }
}

/// Zero or more disjoint folder trees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderForest {
    /// The root node(s) of the forest.
    pub roots: Vec<FolderNode>,
}

impl FolderForest {
    /// Create an empty forest.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a forest from root nodes.
    pub fn new(roots: Vec<FolderNode>) -> Self {
        Self { roots }
    }

    /// Returns whether the forest has no nodes.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes across all trees.
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    /// Nodes in pre-order: each node, then its children in order, tree by tree.
    pub fn pre_order(&self) -> impl Iterator<Item = &FolderNode> {
        self.walk().map(|(_, node)| node)
    }

    /// Pre-order traversal that also yields each node's depth (roots are 0).
    pub fn walk(&self) -> PreOrder<'_> {
        PreOrder::new(&self.roots)
    }

    /// Locate a node by ID.
    pub fn find(&self, id: &FolderId) -> Option<&FolderNode> {
        self.pre_order().find(|node| &node.id == id)
    }

    /// Every node ID in pre-order.
    pub fn all_ids(&self) -> Vec<FolderId> {
        self.pre_order().map(|node| node.id.clone()).collect()
    }
}

impl Drop for FolderForest {
    // Flattens the trees first so dropping a long chain never recurses.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.roots);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Iterative pre-order traversal over a slice of trees.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a FolderNode)>,
}

impl<'a> PreOrder<'a> {
    fn new(roots: &'a [FolderNode]) -> Self {
        Self {
            stack: roots.iter().rev().map(|node| (0, node)).collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a FolderNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, children: Vec<FolderNode>) -> FolderNode {
        FolderNode {
            children,
            ..FolderNode::leaf(FolderId::from(id), id, None)
        }
    }

    fn sample() -> FolderForest {
        FolderForest::new(vec![
            node("a", vec![node("a1", vec![node("a1x", vec![])]), node("a2", vec![])]),
            node("b", vec![node("b1", vec![])]),
        ])
    }

    #[test]
    fn test_pre_order_visits_parent_before_children() {
        let forest = sample();
        let ids: Vec<&str> = forest.pre_order().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["a", "a1", "a1x", "a2", "b", "b1"]);
    }

    #[test]
    fn test_walk_reports_depth() {
        let forest = sample();
        let depths: Vec<(usize, &str)> = forest.walk().map(|(d, n)| (d, n.id.as_str())).collect();
        assert_eq!(
            depths,
            [(0, "a"), (1, "a1"), (2, "a1x"), (1, "a2"), (0, "b"), (1, "b1")]
        );
    }

    #[test]
    fn test_len_and_find() {
        let forest = sample();
        assert_eq!(forest.len(), 6);
        assert_eq!(
            forest.find(&FolderId::from("b1")).map(|n| n.name.as_str()),
            Some("b1")
        );
        assert!(forest.find(&FolderId::from("zzz")).is_none());
        assert!(FolderForest::empty().is_empty());
        assert_eq!(FolderForest::empty().len(), 0);
    }

    #[test]
    fn test_deep_chain_walks_and_drops() {
        let depth = 100_000;
        let mut chain = node("f0", vec![]);
        for i in 1..depth {
            chain = node(&format!("f{i}"), vec![chain]);
        }
        let forest = FolderForest::new(vec![chain]);

        assert_eq!(forest.len(), depth);
        let deepest = forest.walk().last().map(|(d, n)| (d, n.id.as_str()));
        assert_eq!(deepest, Some((depth - 1, "f0")));
        drop(forest);
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let leaf = FolderNode::leaf(FolderId::from("v"), "视频", Some(MaterialType::Video));
        let json = serde_json::to_value(&leaf).expect("serialize");
        assert_eq!(json["type"], "video");
        assert_eq!(json["count"], 0);
    }
}

//! Folder forest construction from the flat parent-pointer list.
//!
//! Construction runs in two passes. The first indexes records by ID and
//! links each one to its parent. The second walks breadth-first from the
//! roots with an explicit queue, so an untyped folder always inherits from
//! a parent whose type is already resolved, whatever the input order.
//!
//! Malformed input never fails the build:
//! - a parent ID that matches no record makes the folder a root;
//! - a folder naming itself as parent is a root;
//! - a parent cycle is cut at the member listed first in the input, which
//!   becomes a root;
//! - a repeated ID keeps the first record and drops the rest.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, warn};

use clipdeck_core::types::{FolderId, MaterialType};
use clipdeck_entity::folder::{FolderForest, FolderNode, FolderRecord, infer_type};

/// Builds the folder forest with every count left at zero.
pub fn build(records: &[FolderRecord]) -> FolderForest {
    build_with_counts(records, &HashMap::new())
}

/// Builds the folder forest, taking each node's material count from `counts`.
pub fn build_with_counts(
    records: &[FolderRecord],
    counts: &HashMap<FolderId, u64>,
) -> FolderForest {
    let mut links = Links::index(records);
    let order = links.traverse();

    let mut kinds: Vec<Option<MaterialType>> =
        links.records.iter().map(|r| infer_type(&r.name)).collect();
    for &i in &order {
        if kinds[i].is_none() {
            kinds[i] = links.parent[i].and_then(|p| kinds[p]);
        }
    }

    // Reverse BFS order finishes every child before its parent.
    let mut slots: Vec<Option<FolderNode>> = vec![None; links.records.len()];
    for &i in order.iter().rev() {
        let children = links.children[i]
            .iter()
            .filter_map(|&c| slots[c].take())
            .collect();
        let record = links.records[i];
        slots[i] = Some(FolderNode {
            id: record.id.clone(),
            name: record.name.clone(),
            count: counts.get(&record.id).copied().unwrap_or(0),
            kind: kinds[i],
            children,
        });
    }

    let roots: Vec<FolderNode> = links
        .roots
        .iter()
        .filter_map(|&r| slots[r].take())
        .collect();

    debug!(
        folders = links.records.len(),
        roots = roots.len(),
        cycles_broken = links.cycles_broken,
        "Built folder forest"
    );

    FolderForest::new(roots)
}

/// Index-based parent/child links over the deduplicated records.
struct Links<'a> {
    records: Vec<&'a FolderRecord>,
    parent: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    cycles_broken: usize,
}

impl<'a> Links<'a> {
    fn index(records: &'a [FolderRecord]) -> Self {
        let mut by_id: HashMap<&FolderId, usize> = HashMap::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());

        for record in records {
            if by_id.contains_key(&record.id) {
                warn!(folder_id = %record.id, "Duplicate folder id, keeping first record");
                continue;
            }
            by_id.insert(&record.id, kept.len());
            kept.push(record);
        }

        let mut parent = vec![None; kept.len()];
        let mut children = vec![Vec::new(); kept.len()];
        let mut roots = Vec::new();

        for (i, record) in kept.iter().enumerate() {
            let Some(parent_id) = record.parent_id.as_ref() else {
                roots.push(i);
                continue;
            };

            match by_id.get(parent_id).copied() {
                Some(p) if p != i => {
                    parent[i] = Some(p);
                    children[p].push(i);
                }
                Some(_) => {
                    warn!(folder_id = %record.id, "Folder is its own parent, treating as root");
                    roots.push(i);
                }
                None => {
                    warn!(
                        folder_id = %record.id,
                        parent_id = %parent_id,
                        "Parent folder not found, treating as root"
                    );
                    roots.push(i);
                }
            }
        }

        Self {
            records: kept,
            parent,
            children,
            roots,
            cycles_broken: 0,
        }
    }

    /// Visits every node exactly once, parents before children, cutting
    /// cycles as they are found. Returns the visitation order.
    fn traverse(&mut self) -> Vec<usize> {
        let n = self.records.len();
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);

        for i in 0..self.roots.len() {
            let root = self.roots[i];
            self.descend(root, &mut visited, &mut order);
        }

        // Anything still unvisited sits on a cycle or hangs below one.
        for start in 0..n {
            if visited[start] {
                continue;
            }
            let cut = self.cycle_head(start);
            self.detach(cut);
            self.roots.push(cut);
            self.descend(cut, &mut visited, &mut order);
        }

        // Indices follow input order, so this restores input order for cut roots.
        self.roots.sort_unstable();
        order
    }

    fn descend(&self, root: usize, visited: &mut [bool], order: &mut Vec<usize>) {
        let mut queue = VecDeque::from([root]);
        visited[root] = true;

        while let Some(i) = queue.pop_front() {
            order.push(i);
            for &child in &self.children[i] {
                if !visited[child] {
                    visited[child] = true;
                    queue.push_back(child);
                }
            }
        }
    }

    /// Follows parent links from `start` to the cycle it ends in and returns
    /// that cycle's earliest-listed member.
    fn cycle_head(&self, start: usize) -> usize {
        let mut seen = HashSet::new();
        let mut current = start;
        while seen.insert(current) {
            match self.parent[current] {
                Some(p) => current = p,
                None => return current,
            }
        }

        let entry = current;
        let mut head = entry;
        let mut member = entry;
        while let Some(p) = self.parent[member] {
            if p == entry {
                break;
            }
            head = head.min(p);
            member = p;
        }
        head
    }

    fn detach(&mut self, node: usize) {
        if let Some(p) = self.parent[node].take() {
            self.children[p].retain(|&c| c != node);
            self.cycles_broken += 1;
            warn!(
                folder_id = %self.records[node].id,
                parent_id = %self.records[p].id,
                "Folder parent chain forms a cycle, treating as root"
            );
        }
    }
}

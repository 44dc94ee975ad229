//! Folder and material source selection.

use serde::{Deserialize, Serialize};

/// Which backend supplies folder and material listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// The hosted PostgreSQL database.
    Postgres,
    /// A local JSON snapshot file.
    Snapshot,
}

/// Source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Backend kind.
    #[serde(default = "default_kind")]
    pub kind: SourceKind,
    /// Path to the JSON snapshot (used when `kind = "snapshot"`).
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_kind() -> SourceKind {
    SourceKind::Snapshot
}

fn default_snapshot_path() -> String {
    "data/library.json".to_string()
}

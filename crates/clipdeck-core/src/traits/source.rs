//! Narrow read-only interfaces over the persistence backend.
//!
//! The picker only ever needs to list an owner's folders and the
//! materials inside one folder. These traits are generic over the row
//! types so that this crate stays free of entity definitions.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{FolderId, OwnerId};

/// Supplies the flat folder list for one owner.
#[async_trait]
pub trait FolderSource<Record>: Send + Sync + 'static
where
    Record: Send + 'static,
{
    /// List every folder owned by `owner`, in backend order.
    async fn list_folders(&self, owner: OwnerId) -> AppResult<Vec<Record>>;
}

/// Supplies materials for the picker's file list.
#[async_trait]
pub trait MaterialSource<Item>: Send + Sync + 'static
where
    Item: Send + 'static,
{
    /// List the materials stored directly in `folder`.
    async fn list_materials(&self, owner: OwnerId, folder: &FolderId) -> AppResult<Vec<Item>>;

    /// Count materials per folder. Folders without materials may be absent.
    async fn count_by_folder(&self, owner: OwnerId) -> AppResult<HashMap<FolderId, u64>>;
}

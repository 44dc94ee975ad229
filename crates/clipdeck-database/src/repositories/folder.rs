//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use clipdeck_core::error::{AppError, ErrorKind};
use clipdeck_core::result::AppResult;
use clipdeck_core::traits::FolderSource;
use clipdeck_core::types::OwnerId;
use clipdeck_entity::folder::FolderRecord;

/// Reads material folders from the `material_folders` table.
#[derive(Debug, Clone)]
pub struct PgFolderRepository {
    pool: PgPool,
}

impl PgFolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderSource<FolderRecord> for PgFolderRepository {
    async fn list_folders(&self, owner: OwnerId) -> AppResult<Vec<FolderRecord>> {
        sqlx::query_as::<_, FolderRecord>(
            "SELECT id::text AS id, name, parent_id::text AS parent_id \
             FROM material_folders WHERE user_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }
}

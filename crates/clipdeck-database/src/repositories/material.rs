//! Material repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use clipdeck_core::error::{AppError, ErrorKind};
use clipdeck_core::result::AppResult;
use clipdeck_core::traits::MaterialSource;
use clipdeck_core::types::{FolderId, OwnerId};
use clipdeck_entity::material::Material;

/// Reads materials from the `materials` table.
#[derive(Debug, Clone)]
pub struct PgMaterialRepository {
    pool: PgPool,
}

impl PgMaterialRepository {
    /// Create a new material repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaterialSource<Material> for PgMaterialRepository {
    async fn list_materials(&self, owner: OwnerId, folder: &FolderId) -> AppResult<Vec<Material>> {
        sqlx::query_as::<_, Material>(
            "SELECT id::text AS id, name, file_type, category, subcategory, \
                    duration::float8 AS duration, folder_id::text AS folder_id, created_at \
             FROM materials WHERE user_id = $1 AND folder_id::text = $2 \
             ORDER BY created_at DESC",
        )
        .bind(owner.0)
        .bind(folder)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list materials", e))
    }

    async fn count_by_folder(&self, owner: OwnerId) -> AppResult<HashMap<FolderId, u64>> {
        let rows: Vec<(FolderId, i64)> = sqlx::query_as(
            "SELECT folder_id::text, COUNT(*) FROM materials \
             WHERE user_id = $1 AND folder_id IS NOT NULL GROUP BY folder_id",
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count materials", e)
        })?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (id, count.max(0) as u64))
            .collect())
    }
}

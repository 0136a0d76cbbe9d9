use async_trait::async_trait;

use super::models::CategoryRow;
use super::Db;
use crate::store::{Category, CategoryStore, StoreError};

#[async_trait]
impl CategoryStore for Db {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, type AS kind FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }
}

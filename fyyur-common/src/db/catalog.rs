//! Store-access handle for venues, artists and shows
//!
//! `CatalogRepository` is passed explicitly to every caller (it lives in the
//! web server's state); there is no process-wide session. Each write runs in
//! its own transaction: the transaction is committed once on success and
//! dropped, which rolls it back and returns the connection to the pool, on
//! every error path.

use sqlx::SqlitePool;

use crate::Result;

/// Database repository for the venue/artist/show catalog
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    /// Create new repository with database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// True when no venues and no artists have been stored
    pub async fn is_empty(&self) -> Result<bool> {
        let total: i64 = sqlx::query_scalar(
            "SELECT (SELECT COUNT(*) FROM venues) + (SELECT COUNT(*) FROM artists)",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total == 0)
    }
}

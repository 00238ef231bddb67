//! Row-level access to `shoppingentry`.

use crate::error::AppError;
use crate::model::{ListFilter, NewShoppingEntry, ShoppingEntry, UpdateEntryRequest};
use crate::sql;
use sqlx::SqlitePool;

pub struct EntryService;

impl EntryService {
    /// Every row (optionally only done / not done), ordered by id ascending.
    pub async fn list_all(pool: &SqlitePool, filter: &ListFilter) -> Result<Vec<ShoppingEntry>, AppError> {
        let mut qb = sql::select_list(filter);
        tracing::debug!(sql = %qb.sql(), done = ?filter.done, "query");
        let rows = qb.build_query_as::<ShoppingEntry>().fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one row by id. Returns None when no row matches.
    pub async fn get_one(pool: &SqlitePool, id: i64) -> Result<Option<ShoppingEntry>, AppError> {
        let q = sql::select_by_id();
        tracing::debug!(sql = %q, id, "query");
        let row = sqlx::query_as::<_, ShoppingEntry>(&q)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert one row; the store assigns the id. Returns the stored row.
    pub async fn insert(pool: &SqlitePool, entry: &NewShoppingEntry) -> Result<ShoppingEntry, AppError> {
        let q = sql::insert();
        tracing::debug!(sql = %q, "query");
        let row = sqlx::query_as::<_, ShoppingEntry>(&q)
            .bind(entry.created)
            .bind(&entry.user)
            .bind(entry.amount)
            .bind(&entry.name)
            .bind(&entry.market)
            .bind(entry.done)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Apply the present fields of `patch`. Returns the updated row, or None when no row matches.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &UpdateEntryRequest,
    ) -> Result<Option<ShoppingEntry>, AppError> {
        let Some(mut qb) = sql::update(id, patch) else {
            return Err(AppError::BadRequest("update needs at least one field".into()));
        };
        tracing::debug!(sql = %qb.sql(), id, "query");
        let row = qb.build_query_as::<ShoppingEntry>().fetch_optional(pool).await?;
        Ok(row)
    }

    pub async fn mark_done(pool: &SqlitePool, id: i64, done: bool) -> Result<Option<ShoppingEntry>, AppError> {
        Self::update(pool, id, &UpdateEntryRequest::done(done)).await
    }

    /// Delete one row by id. Returns rows removed (0 or 1); a missing id is not an error.
    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
        let q = sql::delete();
        tracing::debug!(sql = %q, id, "query");
        let result = sqlx::query(&q).bind(id).execute(pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, AppError> {
        let (n,): (i64,) = sqlx::query_as(&sql::count()).fetch_one(pool).await?;
        Ok(n)
    }
}

//! Database operations for the `books` table.
//!
//! Each harvest inserts a new batch stamped with `harvested_at`; the read
//! path reconstructs the in-memory `CatalogueItem` shape from stored rows.

use bookdash_core::CatalogueItem;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::DbError;

/// A row from the `books` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookRow {
    pub id: i64,
    pub title: String,
    pub price: f64,
    /// Constrained to `0..=5` by a table CHECK; stored as SMALLINT.
    pub rating: i16,
    pub availability: String,
    pub harvested_at: DateTime<Utc>,
}

impl BookRow {
    /// Reconstructs the harvested record shape from a stored row.
    #[must_use]
    pub fn into_item(self) -> CatalogueItem {
        CatalogueItem {
            title: self.title,
            price: self.price,
            availability: self.availability,
            // The CHECK constraint keeps ratings in 0..=5; anything outside
            // (legacy rows, manual inserts) degrades to the unrated bucket.
            rating: u8::try_from(self.rating).ok().filter(|r| *r <= 5).unwrap_or(0),
        }
    }
}

/// Inserts a harvested collection as one batch inside a transaction.
///
/// Returns the number of rows inserted. The batch is all-or-nothing: a
/// failure on any row rolls back the whole insert, so the store never holds
/// a partial harvest.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any insert or the commit fails.
pub async fn insert_items(pool: &PgPool, items: &[CatalogueItem]) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    for item in items {
        sqlx::query(
            "INSERT INTO books (title, price, rating, availability) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&item.title)
        .bind(item.price)
        .bind(i16::from(item.rating))
        .bind(&item.availability)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(items.len())
}

/// Deletes every stored record. Used by replace-mode harvests.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the delete fails.
pub async fn clear_items(pool: &PgPool) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM books").execute(pool).await?;
    Ok(result.rows_affected())
}

/// Fetches every stored record in insertion order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_items(pool: &PgPool) -> Result<Vec<BookRow>, DbError> {
    let rows = sqlx::query_as::<_, BookRow>(
        "SELECT id, title, price, rating, availability, harvested_at \
         FROM books ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Counts stored records.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_items(pool: &PgPool) -> Result<i64, DbError> {
    let count: i64 = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rating: i16) -> BookRow {
        BookRow {
            id: 1,
            title: "T".to_owned(),
            price: 9.99,
            rating,
            availability: "In stock".to_owned(),
            harvested_at: Utc::now(),
        }
    }

    #[test]
    fn into_item_preserves_valid_ratings() {
        assert_eq!(row(0).into_item().rating, 0);
        assert_eq!(row(5).into_item().rating, 5);
    }

    #[test]
    fn into_item_degrades_out_of_range_ratings_to_zero() {
        assert_eq!(row(-1).into_item().rating, 0);
        assert_eq!(row(6).into_item().rating, 0);
        assert_eq!(row(300).into_item().rating, 0);
    }
}

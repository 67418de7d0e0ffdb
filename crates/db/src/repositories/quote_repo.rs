//! Repository for the `quotes` table.
//!
//! Each function is one store primitive: list, insert, find-and-modify
//! (with upsert) and find-and-delete.

use quotes_core::types::DbId;
use sqlx::PgPool;

use crate::models::quote::{CreateQuote, Quote, UpdateQuote, UpsertOutcome};

/// Column list for `quotes` queries.
const QUOTE_COLUMNS: &str = "id, name, quote";

/// Provides the store primitives for the quote collection.
pub struct QuoteRepo;

impl QuoteRepo {
    /// List every quote in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Quote>, sqlx::Error> {
        let query = format!("SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY id");
        sqlx::query_as::<_, Quote>(&query).fetch_all(pool).await
    }

    /// Insert a new quote, returning the stored row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateQuote) -> Result<Quote, sqlx::Error> {
        let query = format!(
            "INSERT INTO quotes (name, quote) VALUES ($1, $2) RETURNING {QUOTE_COLUMNS}"
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(input.name.as_deref())
            .bind(input.quote.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Rewrite the highest-id quote named `target_name` with `input`, or
    /// insert `input` as a new quote when no row matches.
    ///
    /// The lookup and the write share one transaction and the matched row is
    /// locked, so concurrent calls never both rewrite the same record.
    pub async fn upsert_latest_by_name(
        pool: &PgPool,
        target_name: &str,
        input: &UpdateQuote,
    ) -> Result<UpsertOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes \
             WHERE name = $1 \
             ORDER BY id DESC \
             LIMIT 1 \
             FOR UPDATE"
        );
        let existing = sqlx::query_as::<_, Quote>(&select)
            .bind(target_name)
            .fetch_optional(&mut *tx)
            .await?;

        let outcome = match existing {
            Some(previous) => {
                sqlx::query("UPDATE quotes SET name = $2, quote = $3 WHERE id = $1")
                    .bind(previous.id)
                    .bind(input.name.as_deref())
                    .bind(input.quote.as_deref())
                    .execute(&mut *tx)
                    .await?;
                UpsertOutcome::updated(previous)
            }
            None => {
                let id = sqlx::query_scalar::<_, DbId>(
                    "INSERT INTO quotes (name, quote) VALUES ($1, $2) RETURNING id",
                )
                .bind(input.name.as_deref())
                .bind(input.quote.as_deref())
                .fetch_one(&mut *tx)
                .await?;
                UpsertOutcome::inserted(id)
            }
        };

        tx.commit().await?;
        Ok(outcome)
    }

    /// Delete the lowest-id quote named `name`. Returns the removed row, or
    /// `None` if nothing matched.
    ///
    /// Rows locked by a concurrent delete are skipped, so a call never comes
    /// back empty while an unlocked match remains.
    pub async fn delete_first_by_name(
        pool: &PgPool,
        name: Option<&str>,
    ) -> Result<Option<Quote>, sqlx::Error> {
        let query = format!(
            "DELETE FROM quotes \
             WHERE id = ( \
                 SELECT id FROM quotes \
                 WHERE name = $1 \
                 ORDER BY id \
                 LIMIT 1 \
                 FOR UPDATE SKIP LOCKED \
             ) \
             RETURNING {QUOTE_COLUMNS}"
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}

//! The quote store seam.
//!
//! Handlers talk to a [`QuoteStore`] trait object owned by the application
//! state. [`PgQuoteStore`] is the production backend on top of
//! [`QuoteRepo`]; [`InMemoryQuoteStore`] keeps the same semantics in a
//! vector and backs the HTTP and client tests.

use async_trait::async_trait;
use quotes_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::quote::{CreateQuote, Quote, UpdateQuote, UpsertOutcome};
use crate::repositories::QuoteRepo;
use crate::DbPool;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database rejected or failed the call.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A required column was absent from the written record.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// The four collection primitives the quote board relies on.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Every quote, in store-native (insertion) order.
    async fn list(&self) -> Result<Vec<Quote>, StoreError>;

    /// Insert a new quote and return it with its assigned id.
    async fn create(&self, input: &CreateQuote) -> Result<Quote, StoreError>;

    /// Find-and-modify the highest-id quote named `target_name`, inserting
    /// `input` when nothing matches.
    async fn upsert_latest_by_name(
        &self,
        target_name: &str,
        input: &UpdateQuote,
    ) -> Result<UpsertOutcome, StoreError>;

    /// Find-and-delete the first quote named `name`.
    async fn delete_first_by_name(&self, name: Option<&str>)
        -> Result<Option<Quote>, StoreError>;

    /// Confirm the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// [`QuoteStore`] backed by the `quotes` table.
#[derive(Clone)]
pub struct PgQuoteStore {
    pool: DbPool,
}

impl PgQuoteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteStore for PgQuoteStore {
    async fn list(&self) -> Result<Vec<Quote>, StoreError> {
        Ok(QuoteRepo::list_all(&self.pool).await?)
    }

    async fn create(&self, input: &CreateQuote) -> Result<Quote, StoreError> {
        Ok(QuoteRepo::create(&self.pool, input).await?)
    }

    async fn upsert_latest_by_name(
        &self,
        target_name: &str,
        input: &UpdateQuote,
    ) -> Result<UpsertOutcome, StoreError> {
        let outcome = QuoteRepo::upsert_latest_by_name(&self.pool, target_name, input).await?;
        tracing::debug!(
            target_name,
            updated_existing = outcome.last_error_object.updated_existing,
            "Quote upserted",
        );
        Ok(outcome)
    }

    async fn delete_first_by_name(
        &self,
        name: Option<&str>,
    ) -> Result<Option<Quote>, StoreError> {
        Ok(QuoteRepo::delete_first_by_name(&self.pool, name).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MemoryState {
    rows: Vec<Quote>,
    last_id: DbId,
}

impl MemoryState {
    fn insert(&mut self, name: String, quote: String) -> Quote {
        self.last_id += 1;
        let row = Quote {
            id: self.last_id,
            name,
            quote,
        };
        self.rows.push(row.clone());
        row
    }
}

/// [`QuoteStore`] holding rows in memory, with the same NOT NULL and
/// ordering rules as the `quotes` table.
#[derive(Default)]
pub struct InMemoryQuoteStore {
    state: RwLock<MemoryState>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `(name, quote)` rows, ids 1..=n.
    pub fn with_quotes<'a>(quotes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut state = MemoryState::default();
        for (name, quote) in quotes {
            state.insert(name.to_string(), quote.to_string());
        }
        Self {
            state: RwLock::new(state),
        }
    }
}

fn required(value: Option<&String>, field: &'static str) -> Result<String, StoreError> {
    value.cloned().ok_or(StoreError::MissingField(field))
}

#[async_trait]
impl QuoteStore for InMemoryQuoteStore {
    async fn list(&self) -> Result<Vec<Quote>, StoreError> {
        Ok(self.state.read().await.rows.clone())
    }

    async fn create(&self, input: &CreateQuote) -> Result<Quote, StoreError> {
        let name = required(input.name.as_ref(), "name")?;
        let quote = required(input.quote.as_ref(), "quote")?;
        Ok(self.state.write().await.insert(name, quote))
    }

    async fn upsert_latest_by_name(
        &self,
        target_name: &str,
        input: &UpdateQuote,
    ) -> Result<UpsertOutcome, StoreError> {
        let name = required(input.name.as_ref(), "name")?;
        let quote = required(input.quote.as_ref(), "quote")?;

        let mut state = self.state.write().await;
        let latest = state
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.name == target_name)
            .max_by_key(|(_, row)| row.id)
            .map(|(idx, _)| idx);

        match latest {
            Some(idx) => {
                let row = &mut state.rows[idx];
                let previous = row.clone();
                row.name = name;
                row.quote = quote;
                Ok(UpsertOutcome::updated(previous))
            }
            None => {
                let row = state.insert(name, quote);
                Ok(UpsertOutcome::inserted(row.id))
            }
        }
    }

    async fn delete_first_by_name(
        &self,
        name: Option<&str>,
    ) -> Result<Option<Quote>, StoreError> {
        let Some(name) = name else {
            return Ok(None);
        };
        let mut state = self.state.write().await;
        let position = state.rows.iter().position(|row| row.name == name);
        Ok(position.map(|idx| state.rows.remove(idx)))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

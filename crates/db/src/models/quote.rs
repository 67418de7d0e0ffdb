//! Quote model and request DTOs.

use quotes_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `quotes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Quote {
    pub id: DbId,
    pub name: String,
    pub quote: String,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------
//
// Fields are optional so that a body missing one reaches the store and fails
// on the NOT NULL constraint instead of in the extractor.

/// Form body for creating a quote.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuote {
    pub name: Option<String>,
    pub quote: Option<String>,
}

/// JSON body for the update (upsert) route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuote {
    pub name: Option<String>,
    pub quote: Option<String>,
}

/// JSON body for the delete route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteQuote {
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Find-and-modify result
// ---------------------------------------------------------------------------

/// Outcome of a find-and-modify call, serialized in the document-store
/// result shape (`lastErrorObject` / `value` / `ok`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertOutcome {
    #[serde(rename = "lastErrorObject")]
    pub last_error_object: LastErrorObject,
    /// The matched record as it was before the write; `None` on insert.
    pub value: Option<Quote>,
    pub ok: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastErrorObject {
    pub updated_existing: bool,
    pub n: u32,
    /// Id of the inserted record when no record matched.
    pub upserted: Option<DbId>,
}

impl UpsertOutcome {
    /// An existing record was rewritten; `previous` is its old state.
    pub fn updated(previous: Quote) -> Self {
        Self {
            last_error_object: LastErrorObject {
                updated_existing: true,
                n: 1,
                upserted: None,
            },
            value: Some(previous),
            ok: 1,
        }
    }

    /// Nothing matched and a new record with `id` was inserted.
    pub fn inserted(id: DbId) -> Self {
        Self {
            last_error_object: LastErrorObject {
                updated_existing: false,
                n: 1,
                upserted: Some(id),
            },
            value: None,
            ok: 1,
        }
    }
}

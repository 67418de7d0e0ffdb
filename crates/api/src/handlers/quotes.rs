//! Handlers for the quote board.
//!
//! Each handler makes exactly one store call. Store failures propagate as
//! [`AppError`] and become JSON error responses.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect};
use axum::{Form, Json};
use quotes_core::error::CoreError;
use quotes_core::quotes::{DELETE_CONFIRMATION, QUOTE_ENTITY, UPDATE_TARGET_NAME};
use quotes_db::models::quote::{CreateQuote, DeleteQuote, UpdateQuote};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// GET /
///
/// Render every stored quote as the board page.
pub async fn list_quotes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let quotes = state.store.list().await?;

    tracing::debug!(count = quotes.len(), "Quotes listed");

    Ok(Html(views::render_index(&quotes)))
}

/// POST /quotes
///
/// Insert the submitted form as a new quote and send the browser back to
/// the board.
pub async fn create_quote(
    State(state): State<AppState>,
    Form(input): Form<CreateQuote>,
) -> AppResult<impl IntoResponse> {
    let quote = state.store.create(&input).await?;

    tracing::info!(quote_id = quote.id, name = %quote.name, "Quote saved");

    Ok(Redirect::to("/"))
}

/// PUT /quotes
///
/// Rewrite the latest quote named [`UPDATE_TARGET_NAME`] with the body's
/// `name` and `quote`, inserting it if none exists. The body's `name` is
/// written, never matched.
pub async fn update_quote(
    State(state): State<AppState>,
    Json(input): Json<UpdateQuote>,
) -> AppResult<impl IntoResponse> {
    let outcome = state
        .store
        .upsert_latest_by_name(UPDATE_TARGET_NAME, &input)
        .await?;

    tracing::info!(
        target_name = UPDATE_TARGET_NAME,
        updated_existing = outcome.last_error_object.updated_existing,
        upserted = ?outcome.last_error_object.upserted,
        "Quote updated",
    );

    Ok(Json(outcome))
}

/// DELETE /quotes
///
/// Remove the first quote whose `name` matches the body's `name`.
pub async fn delete_quote(
    State(state): State<AppState>,
    Json(input): Json<DeleteQuote>,
) -> AppResult<impl IntoResponse> {
    let removed = state
        .store
        .delete_first_by_name(input.name.as_deref())
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: QUOTE_ENTITY,
                name: input.name.clone().unwrap_or_default(),
            })
        })?;

    tracing::info!(quote_id = removed.id, name = %removed.name, "Quote deleted");

    Ok(Json(DELETE_CONFIRMATION))
}

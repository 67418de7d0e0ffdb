//! Route definitions for the quote board.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::quotes;
use crate::state::AppState;

/// Quote board routes.
///
/// ```text
/// GET    /         -> list_quotes
/// POST   /quotes   -> create_quote
/// PUT    /quotes   -> update_quote
/// DELETE /quotes   -> delete_quote
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(quotes::list_quotes)).route(
        "/quotes",
        post(quotes::create_quote)
            .put(quotes::update_quote)
            .delete(quotes::delete_quote),
    )
}

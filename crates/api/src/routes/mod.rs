pub mod health;
pub mod quotes;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health                    service + store health
///
/// /                          list (rendered page)
/// /quotes                    create (form), update (JSON), delete (JSON)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(quotes::router())
}

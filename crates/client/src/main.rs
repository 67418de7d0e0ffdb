//! `quotes-client` -- press the board's update or delete button from a
//! terminal.
//!
//! # Usage
//!
//! ```text
//! quotes-client update
//! quotes-client delete
//! ```
//!
//! # Environment variables
//!
//! | Variable          | Required | Default                 | Description        |
//! |-------------------|----------|-------------------------|--------------------|
//! | `QUOTES_BASE_URL` | no       | `http://localhost:8000` | Board server root  |

use quotes_client::{HttpPageReload, QuoteClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotes_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let action = std::env::args().nth(1).unwrap_or_default();

    let base_url = std::env::var("QUOTES_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

    let client = QuoteClient::new(&base_url).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build HTTP client");
        std::process::exit(1);
    });
    let page = HttpPageReload::new(client.http().clone(), client.base_url());

    let result = match action.as_str() {
        "update" => client.trigger_update(&page).await,
        "delete" => client.trigger_delete(&page).await,
        other => {
            tracing::error!(action = other, "Expected `update` or `delete`");
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        tracing::error!(action = %action, error = %e, "Quote action failed");
        std::process::exit(1);
    }
}

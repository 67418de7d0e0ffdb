//! Integration tests for the scripted client against a live board server.
//!
//! Each test serves the real router over an in-memory store on an
//! ephemeral port and counts page reloads.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use quotes_api::config::ServerConfig;
use quotes_api::router::build_app_router;
use quotes_api::state::AppState;
use quotes_client::{ClientError, HttpPageReload, PageReload, QuoteClient};
use quotes_db::{InMemoryQuoteStore, QuoteStore};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Counts reloads instead of fetching anything.
#[derive(Default)]
struct CountingReload {
    count: AtomicUsize,
}

impl CountingReload {
    fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageReload for CountingReload {
    async fn reload(&self) -> Result<(), ClientError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Serve the board over `store` on 127.0.0.1 and return its base URL.
async fn spawn_board(store: Arc<InMemoryQuoteStore>) -> String {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: Vec::new(),
        request_timeout_secs: 30,
        public_dir: PathBuf::from("does-not-exist"),
    };
    let app = build_app_router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_success_reloads_once() {
    let store = Arc::new(InMemoryQuoteStore::with_quotes([("Yoda", "Do or do not.")]));
    let base_url = spawn_board(store.clone()).await;
    let client = QuoteClient::new(&base_url).unwrap();
    let page = CountingReload::default();

    let data = client.trigger_update(&page).await.unwrap();

    assert_eq!(page.count(), 1);
    let data = data.expect("success response should be parsed");
    assert_eq!(data["lastErrorObject"]["updatedExisting"], true);

    let quotes = store.list().await.unwrap();
    assert_eq!(quotes[0].name, "Darth Vadar");
    assert_eq!(quotes[0].quote, "I find you lack of faith disturbing.");
}

#[tokio::test]
async fn delete_success_reloads_once() {
    let store = Arc::new(InMemoryQuoteStore::with_quotes([
        ("Elmer", "You have to try harder!"),
        ("Elmer", "Again!"),
    ]));
    let base_url = spawn_board(store.clone()).await;
    let client = QuoteClient::new(&base_url).unwrap();
    let page = CountingReload::default();

    let data = client.trigger_delete(&page).await.unwrap();

    assert_eq!(page.count(), 1);
    assert_eq!(data, Some(json!("A darth vadar quote got deleted")));
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unsuccessful_status_skips_parsing_but_still_reloads() {
    let store = Arc::new(InMemoryQuoteStore::new());
    let base_url = spawn_board(store).await;
    let client = QuoteClient::new(&base_url).unwrap();
    let page = CountingReload::default();

    // No Elmer on the board: the server answers 404.
    let data = client.trigger_delete(&page).await.unwrap();

    assert!(data.is_none());
    assert_eq!(page.count(), 1);
}

#[tokio::test]
async fn transport_failure_does_not_reload() {
    // Bind and drop a listener to get a port nobody is serving.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = QuoteClient::new(&format!("http://{addr}")).unwrap();
    let page = CountingReload::default();

    let result = client.trigger_update(&page).await;

    assert_matches!(result, Err(ClientError::Request(_)));
    assert_eq!(page.count(), 0);
}

#[tokio::test]
async fn http_reload_fetches_board_page() {
    let store = Arc::new(InMemoryQuoteStore::with_quotes([("Yoda", "Do or do not.")]));
    let base_url = spawn_board(store.clone()).await;
    let client = QuoteClient::new(&base_url).unwrap();
    let page = HttpPageReload::new(client.http().clone(), client.base_url());

    client.trigger_update(&page).await.unwrap();

    assert_eq!(store.list().await.unwrap()[0].name, "Darth Vadar");
}

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quotes_api::config::ServerConfig;
use quotes_api::router::build_app_router;
use quotes_api::state::AppState;
use quotes_db::PgQuoteStore;

/// Log a fatal startup error and exit before serving.
macro_rules! fatal {
    ($($arg:tt)+) => {{
        tracing::error!($($arg)+);
        std::process::exit(1)
    }};
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotes_api=debug,quotes_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env()
        .unwrap_or_else(|e| fatal!(error = %e, "Invalid server configuration"));
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| fatal!("DATABASE_URL environment variable is required"));

    let pool = quotes_db::create_pool(&database_url)
        .await
        .unwrap_or_else(|e| fatal!(error = %e, "Failed to connect to database"));
    tracing::info!("Database connection pool created");

    quotes_db::health_check(&pool)
        .await
        .unwrap_or_else(|e| fatal!(error = %e, "Database health check failed"));
    tracing::info!("Database health check passed");

    quotes_db::run_migrations(&pool)
        .await
        .unwrap_or_else(|e| fatal!(error = %e, "Failed to run database migrations"));
    tracing::info!("Database migrations applied");

    // --- App state ---
    let addr = match config.host.parse() {
        Ok(ip) => SocketAddr::new(ip, config.port),
        Err(e) => fatal!(host = %config.host, error = %e, "Invalid HOST address"),
    };
    let state = AppState::new(Arc::new(PgQuoteStore::new(pool)), config);

    // --- Router ---
    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| fatal!(%addr, error = %e, "Failed to bind to address"));

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        fatal!(error = %e, "Server error");
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

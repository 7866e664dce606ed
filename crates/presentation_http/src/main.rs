//! Mail Triage HTTP server
//!
//! Main entry point for the web form.

use std::sync::Arc;

use application::ClassificationService;
use axum::extract::DefaultBodyLimit;
use infrastructure::{
    default_extractor, select_remote_classifier, AppConfig, FileAuditLog, UploadStore,
};
use presentation_http::{create_router, state::AppState, templates::PageTemplates};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "presentation_http=debug,infrastructure=debug,application=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Mail Triage v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        remote_configured = config.inference.is_configured(),
        "Configuration loaded"
    );

    // Wire adapters; the remote classifier is selected once, here
    let remote = select_remote_classifier(&config.inference);
    let audit = Arc::new(FileAuditLog::new(config.audit.path.clone()));
    let uploads = Arc::new(UploadStore::new(config.uploads.dir.clone()));
    uploads
        .ensure_dir()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create uploads directory: {e}"))?;

    let classifier = ClassificationService::new(remote, audit);
    let templates = PageTemplates::new()
        .map_err(|e| anyhow::anyhow!("Failed to compile templates: {e}"))?;

    let state = AppState {
        classifier: Arc::new(classifier),
        extractor: Arc::new(default_extractor()),
        uploads,
        templates: Arc::new(templates),
    };

    // Build router with middleware
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

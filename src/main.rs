use dotenv::dotenv;
use scaffold_backend::routes::make_app;
use scaffold_backend::Config;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scaffold_backend=info,tower_http=info".into()),
        )
        .init();

    let config = Config::init();
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = make_app(config)?;

    let listener = TcpListener::bind(addr).await?;
    info!("🚀 Server started successfully on {addr}");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    info!("Server shutdown complete");

    Ok(())
}

/// Resolves once the process receives Ctrl+C or SIGTERM. In-flight requests
/// are drained before the server exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down gracefully..."),
        () = terminate => info!("SIGTERM received. Shutting down gracefully..."),
    }
}

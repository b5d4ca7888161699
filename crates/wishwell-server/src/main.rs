use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use wishwell_api::payments::PaymentClient;
use wishwell_api::{AppState, AppStateInner};
use wishwell_gateway::dispatcher::Dispatcher;
use wishwell_store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wishwell=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("WISHWELL_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("WISHWELL_PORT")
        .unwrap_or_else(|_| "4000".into())
        .parse()?;
    let db_path: PathBuf = std::env::var("WISHWELL_DB_PATH")
        .unwrap_or_else(|_| "db.json".into())
        .into();
    let razorpay_url =
        std::env::var("RAZORPAY_URL").unwrap_or_else(|_| "https://api.razorpay.com".into());
    let razorpay_key_id = std::env::var("RAZORPAY_KEY_ID").unwrap_or_default();
    let razorpay_key_secret = std::env::var("RAZORPAY_KEY_SECRET").unwrap_or_default();

    // Init store and shared state
    let store = Store::open(&db_path)?;
    let state: AppState = Arc::new(AppStateInner {
        store,
        dispatcher: Dispatcher::new(),
        payments: PaymentClient::new(razorpay_url, razorpay_key_id, razorpay_key_secret),
    });

    let app = wishwell_server::app(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Wishwell server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}

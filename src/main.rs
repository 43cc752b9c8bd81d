use sea_orm::Database;
use tracing_subscriber::EnvFilter;

use campus_backend::config;
use campus_backend::routes::app_router;
use campus_backend::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::config().await;

    let db = Database::connect(config.db_url())
        .await
        .expect("Failed to connect to database");

    let state = AppState::new(db, config.jwt().clone());
    let app = app_router(state);

    let addr = format!("{}:{}", config.server_host(), config.server_port());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.expect("Server error");
}

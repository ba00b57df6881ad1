use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use movies_api::app;
use movies_api::config::settings::AppConfig;
use movies_api::infrastructure::db::pool;
use movies_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting server...");

    let config = AppConfig::new()?;

    let db = pool::connect_to_db(&config.database_url).await?;
    pool::run_migrations(&db).await?;

    let addr = format!("0.0.0.0:{}", config.server_port);
    let state = AppState::new(config, db);
    let app = app::create_app(state).await;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

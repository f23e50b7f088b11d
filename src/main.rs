mod config;
mod css;
mod db;
mod error;
mod handlers;
mod markup;
mod routes;
mod state;
mod templates;

use std::sync::Arc;

use config::Config;
use db::TickStore;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("tick-server starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = TickStore::connect(&config).await?;

    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let addr = format!("{}:{}", state.config.host, state.config.port);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

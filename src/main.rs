mod model;
mod server;

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::setup_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let app = startup::build_app(AppState::new(db));

    let listener =
        tokio::net::TcpListener::bind((config.server_host.as_str(), config.server_port)).await?;

    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}

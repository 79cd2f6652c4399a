mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, config.error_policy);

    let listener = startup::bind_listener(&config).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router::router(state)).await?;

    Ok(())
}

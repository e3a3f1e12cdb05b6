mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(config.log_json);

    let storage = startup::setup_storage(&config).await;
    let notifier = startup::setup_notifier(&config)?;

    let app = router::build_app(AppState::new(storage, notifier));

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

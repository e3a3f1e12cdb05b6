use std::time::Duration;

use sea_orm::DatabaseConnection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    data::file_store::ApplicationFileStore,
    error::AppError,
    service::{
        notification::{ApplicationNotifier, TelegramCredentials},
        storage::StorageRouter,
    },
};

/// Default log filter when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "titan_core=info,tower_http=info";

/// Initializes the global tracing subscriber.
///
/// Uses `RUST_LOG` when set, `DEFAULT_LOG_FILTER` otherwise.
///
/// # Arguments
/// - `log_json` - Emit structured JSON lines instead of the human-readable format
pub fn init_tracing(log_json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    if log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Connects to the relational database and runs pending migrations.
///
/// Establishes a connection pool using the given connection string, then runs all pending
/// SeaORM migrations so the `application` table exists before the first write.
///
/// # Arguments
/// - `database_url` - Connection string (e.g. `sqlite://data/app.db?mode=rwc`, `postgres://...`)
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the storage router from configuration.
///
/// The relational store is only attempted when configured and not overridden by file mode.
/// If connecting or migrating fails the router starts in file-only mode instead of
/// aborting startup.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `StorageRouter` - Router over the available backends
pub async fn setup_storage(config: &Config) -> StorageRouter {
    let fallback = ApplicationFileStore::new(config.applications_file.clone());

    let primary = match config.primary_database_url() {
        Some(url) => match connect_to_database(url).await {
            Ok(db) => {
                tracing::info!("Using relational store for applications");
                Some(db)
            }
            Err(e) => {
                tracing::warn!(
                    "Relational store unavailable, using {}: {}",
                    fallback.path().display(),
                    e
                );
                None
            }
        },
        None => {
            tracing::info!(
                "No relational store configured, using {}",
                fallback.path().display()
            );
            None
        }
    };

    StorageRouter::new(primary, fallback)
}

/// Creates an HTTP client for outbound notification requests.
///
/// Redirects are disabled and every request is bounded by the configured timeout, so a
/// slow messaging endpoint can never hold a notification task open indefinitely.
///
/// # Arguments
/// - `timeout` - Per-request timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - The TLS backend could not be initialized
pub fn setup_reqwest_client(timeout: Duration) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .build()?;

    Ok(client)
}

/// Builds the notifier; notifications are skipped unless both bot token and chat id are set.
pub fn setup_notifier(config: &Config) -> Result<ApplicationNotifier, AppError> {
    let http = setup_reqwest_client(config.notify_timeout)?;

    let credentials = match (&config.telegram_bot_token, &config.telegram_chat_id) {
        (Some(bot_token), Some(chat_id)) => Some(TelegramCredentials {
            bot_token: bot_token.clone(),
            chat_id: chat_id.clone(),
        }),
        _ => {
            tracing::warn!("Telegram credentials not configured, notifications are disabled");
            None
        }
    };

    Ok(ApplicationNotifier::new(
        http,
        config.telegram_api_url.clone(),
        credentials,
    ))
}

use dotenvy::dotenv;
use std::env;
use sto_catalog::{
    bot::{self, BotData},
    config::{self, database},
    core::Backend,
    errors::{Error, Result},
    state::AppState,
    storage::{MemoryStore, SqliteStore, Store},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::settings::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!("Successfully processed application configuration.");

    // 4. Open the store
    let store = if app_config.store.ephemeral {
        info!("Using in-memory store; nothing will be persisted.");
        Store::Memory(MemoryStore::new())
    } else {
        let url = database::get_database_url();
        let sqlite = SqliteStore::open(&url)
            .await
            .inspect(|_| info!("Database initialized successfully."))
            .inspect_err(|e| error!("Failed to initialize database: {}", e))?;
        Store::Sqlite(sqlite)
    };

    // 5. Load the providers
    let backend = Backend::new(store).with_latency(app_config.store.latency());
    let app = AppState::init(backend).await;

    // 6. Run the bot
    // DISCORD_BOT_TOKEN is loaded here, directly before use, not stored in AppConfig
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(app, app_config.site)).await?;

    Ok(())
}

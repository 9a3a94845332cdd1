//! Bot layer - the Discord front desk for the catalog.
//!
//! Public slash commands stand in for the site's pages (home, about, products,
//! contact); `/login` and the `manage_*` commands stand in for the admin
//! dashboard. Commands only read provider snapshots and call provider mutators.

/// Discord command implementations (general, catalog, contact, session, admin)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;
/// Text and embed formatting shared by the commands
pub mod views;

use crate::{
    config::SiteConfig,
    errors::{Error, Result},
    state::AppState,
    storage::Store,
};
use poise::serenity_prelude as serenity;
use tracing::{error, info};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Providers over the catalog backend
    pub app: AppState<Store>,
    /// Business details shown by the public commands
    pub site: SiteConfig,
}

impl BotData {
    /// Creates the shared command context.
    #[must_use]
    pub const fn new(app: AppState<Store>, site: SiteConfig) -> Self {
        Self { app, site }
    }
}

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

/// Every registered command.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::ping(),
        commands::help(),
        commands::home(),
        commands::about(),
        commands::products(),
        commands::product(),
        commands::contact(),
        commands::login(),
        commands::logout(),
        commands::whoami(),
        commands::manage_products(),
        commands::manage_inquiries(),
        commands::manage_images(),
    ]
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(views::error_message(&error)).await {
                error!("Failed to send error message: {}", e);
            }
        }
        poise::FrameworkError::CommandCheckFailed { ctx, .. } => {
            let reply = poise::CreateReply::default()
                .content(views::error_message(&Error::Unauthorized))
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!("Failed to send login reminder: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Connects to Discord and serves commands until the client stops.
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}

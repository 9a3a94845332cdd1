//! Session Discord commands - `/login`, `/logout` and `/whoami`.
//!
//! There is a single admin session, owned by the Discord user who logged in,
//! the same way the site keeps one session per browser.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Starts an admin session.
    #[poise::command(slash_command, ephemeral)]
    pub async fn login(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Admin email"] email: String,
        #[description = "Admin password"] password: String,
    ) -> Result<()> {
        let author_id = ctx.author().id.to_string();
        let session = ctx
            .data()
            .app
            .auth
            .login_as(&author_id, email.trim(), &password)
            .await?;
        ctx.say(format!(
            "✅ Logged in as **{}**. The `/manage_*` commands are now available.",
            session.email
        ))
        .await?;
        Ok(())
    }

    /// Ends the admin session.
    #[poise::command(slash_command)]
    pub async fn logout(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let auth = &ctx.data().app.auth;
        if !auth.is_authenticated() {
            ctx.say("ℹ️ Nobody is logged in.").await?;
            return Ok(());
        }
        if !auth.is_owned_by(&ctx.author().id.to_string()) {
            ctx.say("🔒 Only the admin who logged in can log out.").await?;
            return Ok(());
        }
        auth.logout().await?;
        ctx.say("👋 Logged out.").await?;
        Ok(())
    }

    /// Shows who is logged in.
    #[poise::command(slash_command)]
    pub async fn whoami(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let author_id = ctx.author().id.to_string();
        let message = ctx.data().app.auth.current_user().map_or_else(
            || "🔒 Not logged in.".to_string(),
            |session| {
                if session.is_owned_by(&author_id) {
                    format!("👤 You are logged in as **{}** (uid {}).", session.email, session.uid)
                } else {
                    "🔒 Someone else holds the admin session.".to_string()
                }
            },
        );
        ctx.say(message).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

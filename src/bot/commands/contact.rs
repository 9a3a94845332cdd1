//! Contact Discord command - the public inquiry form.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        errors::{Error, Result},
        models::NewInquiry,
    };

    /// Sends an inquiry to the team.
    ///
    /// Name, email and message are required; the subject defaults to
    /// "General Inquiry".
    #[poise::command(slash_command)]
    pub async fn contact(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Your name"] name: String,
        #[description = "Where we should reply"] email: String,
        #[description = "How can we help?"] message: String,
        #[description = "Topic of your inquiry"]
        #[autocomplete = "autocomplete::autocomplete_subject"]
        subject: Option<String>,
    ) -> Result<()> {
        let new_inquiry = NewInquiry::new(name, email, subject, message);
        new_inquiry.validate()?;

        let data = ctx.data();
        let inquiry = data.app.content.add_inquiry(new_inquiry).await?;
        tracing::info!(inquiry_id = %inquiry.id, subject = %inquiry.subject, "Inquiry received");

        ctx.say(format!(
            "✅ Thanks {}, your message has been sent! We'll get back to you at {} shortly.\n\
            You can also reach us at {} or {}.",
            inquiry.name, inquiry.email, data.site.phone, data.site.email
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

//! Catalog Discord commands - `/products` and `/product`.
//!
//! Both read the content provider's snapshot and never hit the store.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete, views},
        errors::{Error, Result},
        models::ProductCategory,
    };
    use poise::serenity_prelude as serenity;

    /// Lists the catalog, optionally filtered by category.
    #[poise::command(slash_command)]
    pub async fn products(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Only show one product line (e.g., 'metal')"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: Option<String>,
    ) -> Result<()> {
        let category = category
            .as_deref()
            .map(str::parse::<ProductCategory>)
            .transpose()?;

        let products = ctx.data().app.content.products_in(category);

        if products.is_empty() {
            let message = category.map_or_else(
                || "📦 The catalog is empty right now.".to_string(),
                |c| format!("📦 No products in {} yet.", c.label()),
            );
            ctx.say(message).await?;
            return Ok(());
        }

        let title = category.map_or_else(
            || "Product Catalog".to_string(),
            |c| c.label().to_string(),
        );
        let embed = views::field_embed(
            &title,
            Some("Use `/product <id>` for details."),
            &views::product_fields(&products),
        );

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows one product in detail.
    #[poise::command(slash_command)]
    pub async fn product(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Product to show"]
        #[autocomplete = "autocomplete::autocomplete_product_id"]
        id: String,
    ) -> Result<()> {
        let Some(product) = ctx.data().app.content.product_by_id(&id) else {
            ctx.say(format!("❌ Could not find a product with id '{id}'."))
                .await?;
            return Ok(());
        };

        let embed = views::product_embed(&product)
            .footer(serenity::CreateEmbedFooter::new(
                "Interested? Request a quote with /contact",
            ));
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

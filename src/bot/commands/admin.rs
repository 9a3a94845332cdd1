//! Admin Discord commands - the dashboard and image manager.
//!
//! Three parent commands group the admin work: `manage_products`,
//! `manage_inquiries` and `manage_images`. Every subcommand is guarded by the
//! [`is_admin`] check, so only the Discord user who logged in can run them.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete, views},
        errors::{Error, Result},
        models::{ImageSlot, ImageUpload, NewProduct, Product, ProductCategory, product::parse_features},
    };
    use poise::serenity_prelude as serenity;

    /// Passes only for the user who opened the current admin session.
    pub async fn is_admin(ctx: poise::Context<'_, BotData, Error>) -> Result<bool> {
        Ok(ctx
            .data()
            .app
            .auth
            .is_owned_by(&ctx.author().id.to_string()))
    }

    /// Downloads a Discord attachment into an upload.
    async fn fetch_attachment(attachment: &serenity::Attachment) -> Result<ImageUpload> {
        let bytes = attachment.download().await.map_err(|e| Error::ImageRead {
            message: e.to_string(),
        })?;
        Ok(ImageUpload::new(
            attachment.filename.clone(),
            attachment.content_type.clone(),
            bytes,
        ))
    }

    /// Picks the product picture: an attachment wins over a URL.
    async fn resolve_image(
        image_url: Option<String>,
        attachment: Option<serenity::Attachment>,
    ) -> Result<Option<String>> {
        if let Some(attachment) = attachment {
            let upload = fetch_attachment(&attachment).await?;
            return upload.to_data_uri().map(Some);
        }
        Ok(image_url.map(|url| url.trim().to_string()))
    }

    /// Parent command for the product catalog.
    #[poise::command(
        slash_command,
        subcommands(
            "products_add",
            "products_edit",
            "products_delete",
            "products_list"
        )
    )]
    pub async fn manage_products(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Product management command. Available subcommands:\n\
            `/manage_products add` - Add a new product\n\
            `/manage_products edit` - Change an existing product\n\
            `/manage_products delete` - Delete a product\n\
            `/manage_products list` - List all products with their ids";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Adds a product to the catalog.
    ///
    /// Features are separated by `;` or new lines. Without an image URL or
    /// attachment the product uses the placeholder picture.
    #[poise::command(slash_command, rename = "add", check = "is_admin")]
    pub async fn products_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Product name"] title: String,
        #[description = "Marketing description"] description: String,
        #[description = "Product line"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: Option<String>,
        #[description = "Features separated by ';'"] features: Option<String>,
        #[description = "Image URL"] image_url: Option<String>,
        #[description = "Image file (overrides the URL)"] image: Option<serenity::Attachment>,
    ) -> Result<()> {
        let mut new_product = NewProduct {
            title,
            description,
            ..NewProduct::default()
        };
        if let Some(category) = category {
            new_product.category = category.parse::<ProductCategory>()?;
        }
        if let Some(features) = features {
            new_product.features = parse_features(&features);
        }
        if let Some(picture) = resolve_image(image_url, image).await? {
            new_product.image = picture;
        }
        new_product.validate()?;

        let product = ctx
            .data()
            .app
            .content
            .add_product(new_product.cleaned())
            .await?;

        ctx.say(format!(
            "✅ Product '{}' added to {} with id `{}`.",
            product.title,
            product.category.label(),
            product.id
        ))
        .await?;
        Ok(())
    }

    /// Changes an existing product. Omitted fields keep their current value.
    #[poise::command(slash_command, rename = "edit", check = "is_admin")]
    pub async fn products_edit(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Product to edit"]
        #[autocomplete = "autocomplete::autocomplete_product_id"]
        id: String,
        #[description = "New name"] title: Option<String>,
        #[description = "New description"] description: Option<String>,
        #[description = "New product line"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: Option<String>,
        #[description = "New features separated by ';' (replaces the list)"] features: Option<
            String,
        >,
        #[description = "New image URL"] image_url: Option<String>,
        #[description = "New image file (overrides the URL)"] image: Option<serenity::Attachment>,
    ) -> Result<()> {
        let content = &ctx.data().app.content;
        let Some(existing) = content.product_by_id(&id) else {
            ctx.say(format!("❌ Could not find a product with id '{id}'."))
                .await?;
            return Ok(());
        };

        let mut form = existing.to_new();
        if let Some(title) = title {
            form.title = title;
        }
        if let Some(description) = description {
            form.description = description;
        }
        if let Some(category) = category {
            form.category = category.parse::<ProductCategory>()?;
        }
        if let Some(features) = features {
            form.features = parse_features(&features);
        }
        if let Some(picture) = resolve_image(image_url, image).await? {
            form.image = picture;
        }
        form.validate()?;

        let updated = Product::from_new(existing.id, form.cleaned());
        if content.update_product(updated.clone()).await? {
            ctx.send(
                poise::CreateReply::default()
                    .content("✅ Product updated.")
                    .embed(views::product_embed(&updated)),
            )
            .await?;
        } else {
            ctx.say(format!("⚠️ Product '{id}' was removed before the edit could be saved."))
                .await?;
        }
        Ok(())
    }

    /// Deletes a product.
    #[poise::command(slash_command, rename = "delete", check = "is_admin")]
    pub async fn products_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Product to delete"]
        #[autocomplete = "autocomplete::autocomplete_product_id"]
        id: String,
    ) -> Result<()> {
        if ctx.data().app.content.delete_product(&id).await? {
            ctx.say(format!("🗑️ Product `{id}` deleted.")).await?;
        } else {
            ctx.say(format!("❌ Could not find a product with id '{id}'."))
                .await?;
        }
        Ok(())
    }

    /// Lists every product with its id.
    #[poise::command(slash_command, rename = "list", check = "is_admin")]
    pub async fn products_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let products = ctx.data().app.content.products();
        if products.is_empty() {
            ctx.say("📦 No products yet. Add one with `/manage_products add`.")
                .await?;
            return Ok(());
        }

        let embed = views::field_embed(
            &format!("Products ({})", products.len()),
            None,
            &views::product_fields(&products),
        );

        ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
            .await?;
        Ok(())
    }

    /// Parent command for contact inquiries.
    #[poise::command(
        slash_command,
        subcommands("inquiries_list", "inquiries_delete")
    )]
    pub async fn manage_inquiries(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Inquiry management command. Available subcommands:\n\
            `/manage_inquiries list` - Show received inquiries, newest first\n\
            `/manage_inquiries delete` - Delete an inquiry";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Shows received inquiries, newest first.
    #[poise::command(slash_command, rename = "list", check = "is_admin")]
    pub async fn inquiries_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let inquiries = ctx.data().app.content.inquiries();
        if inquiries.is_empty() {
            ctx.say("📭 No inquiries yet.").await?;
            return Ok(());
        }

        let fields: Vec<_> = inquiries.iter().map(views::inquiry_field).collect();
        let embed = views::field_embed(&format!("Inquiries ({})", inquiries.len()), None, &fields);

        ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
            .await?;
        Ok(())
    }

    /// Deletes an inquiry.
    #[poise::command(slash_command, rename = "delete", check = "is_admin")]
    pub async fn inquiries_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Inquiry to delete"]
        #[autocomplete = "autocomplete::autocomplete_inquiry_id"]
        id: String,
    ) -> Result<()> {
        if ctx.data().app.content.delete_inquiry(&id).await? {
            ctx.say(format!("🗑️ Inquiry `{id}` deleted.")).await?;
        } else {
            ctx.say(format!("❌ Could not find an inquiry with id '{id}'."))
                .await?;
        }
        Ok(())
    }

    /// Parent command for the site images.
    #[poise::command(
        slash_command,
        subcommands("images_list", "images_upload", "images_reset")
    )]
    pub async fn manage_images(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Image management command. Available subcommands:\n\
            `/manage_images list` - Show every image slot and whether it was replaced\n\
            `/manage_images upload` - Replace a slot's picture\n\
            `/manage_images reset` - Restore a slot's default picture";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Shows every image slot grouped by page.
    #[poise::command(slash_command, rename = "list", check = "is_admin")]
    pub async fn images_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let images = ctx.data().app.images.images();
        let embed = serenity::CreateEmbed::default()
            .title("Site Images")
            .description(views::truncate(&views::image_listing(&images), 4096))
            .color(views::BRAND_COLOR);

        ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
            .await?;
        Ok(())
    }

    /// Replaces the picture shown in one slot.
    #[poise::command(slash_command, rename = "upload", check = "is_admin")]
    pub async fn images_upload(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Slot to replace"]
        #[autocomplete = "autocomplete::autocomplete_image_slot"]
        slot: String,
        #[description = "New picture"] image: serenity::Attachment,
    ) -> Result<()> {
        let slot = slot.parse::<ImageSlot>()?;
        ctx.defer().await?;

        let upload = fetch_attachment(&image).await?;
        ctx.data().app.images.update_image(slot, &upload).await?;

        ctx.say(format!(
            "✅ {} updated ({}).",
            slot.label(),
            views::describe_image(&ctx.data().app.images.get(slot))
        ))
        .await?;
        Ok(())
    }

    /// Restores the default picture for one slot.
    #[poise::command(slash_command, rename = "reset", check = "is_admin")]
    pub async fn images_reset(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Slot to restore"]
        #[autocomplete = "autocomplete::autocomplete_image_slot"]
        slot: String,
    ) -> Result<()> {
        let slot = slot.parse::<ImageSlot>()?;
        let images = &ctx.data().app.images;
        if !images.images().is_overridden(slot) {
            ctx.say(format!("ℹ️ {} already shows its default picture.", slot.label()))
                .await?;
            return Ok(());
        }

        images.reset_image(slot).await?;
        ctx.say(format!("↩️ {} restored to its default picture.", slot.label()))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

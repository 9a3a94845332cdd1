//! Formatting helpers for command replies.
//!
//! Kept free of Discord types where possible so they can be unit tested.

use crate::{
    errors::Error,
    models::{ImageMap, ImageSlot, Inquiry, Product},
};
use poise::serenity_prelude as serenity;
use std::fmt::Write;

/// Brand orange used for embeds.
pub const BRAND_COLOR: u32 = 0x00EA_580C;

/// Discord caps embed field values at 1024 characters.
const FIELD_LIMIT: usize = 1024;
/// Cap on embed titles and field names.
const NAME_LIMIT: usize = 256;
/// Cap on embed descriptions.
const DESCRIPTION_LIMIT: usize = 4096;
/// Cap on all text of one embed together.
const EMBED_LIMIT: usize = 6000;
/// Room kept free for the "showing N of M" footer.
const FOOTER_RESERVE: usize = 64;

/// Discord allows 25 fields per embed.
pub const MAX_FIELDS: usize = 25;

/// Shortens `text` to at most `max` characters, marking the cut with an ellipsis.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// User-facing text for a failed command.
#[must_use]
pub fn error_message(error: &Error) -> String {
    match error {
        Error::InvalidCredentials => "❌ Invalid credentials.".to_string(),
        Error::Unauthorized => "🔒 Please log in with `/login` first.".to_string(),
        Error::MissingField { field } => format!("❌ Please fill in the {field}."),
        Error::ImageRead { message } => format!("❌ Failed to upload image: {message}"),
        Error::UnknownImageSlot { name } => format!("❌ There is no image slot named '{name}'."),
        Error::UnknownCategory { name } => format!("❌ There is no product category '{name}'."),
        _ => "❌ Something went wrong. Please try again later.".to_string(),
    }
}

/// Describes a picture without dumping a data URI into chat.
#[must_use]
pub fn describe_image(image: &str) -> String {
    if let Some(rest) = image.strip_prefix("data:") {
        let mime = rest.split(';').next().unwrap_or("unknown");
        let bytes = rest.split_once(',').map_or(0, |(_, data)| {
            let padding = data.bytes().rev().take_while(|b| *b == b'=').count();
            (data.len() * 3 / 4).saturating_sub(padding)
        });
        let kib = bytes.div_ceil(1024);
        format!("uploaded {mime} ({kib} KiB)")
    } else {
        image.to_string()
    }
}

/// Whether Discord can show the picture in an embed.
#[must_use]
pub fn is_linkable(image: &str) -> bool {
    image.starts_with("https://") || image.starts_with("http://")
}

/// Bullet list of product features.
#[must_use]
pub fn feature_list(product: &Product) -> String {
    if product.features.is_empty() {
        return "_No features listed_".to_string();
    }
    let mut out = String::new();
    for feature in &product.features {
        let _ = writeln!(out, "• {feature}");
    }
    truncate(out.trim_end(), FIELD_LIMIT)
}

/// How many leading `fields` fit in an embed that already holds `used` characters.
#[must_use]
pub fn fields_that_fit(used: usize, fields: &[(String, String, bool)]) -> usize {
    let mut total = used + FOOTER_RESERVE;
    fields
        .iter()
        .take(MAX_FIELDS)
        .take_while(|(name, value, _)| {
            total += name.chars().count() + value.chars().count();
            total <= EMBED_LIMIT
        })
        .count()
}

/// Listing embed holding as many `fields` as Discord accepts.
///
/// When some are left out, the footer says how many are shown.
#[must_use]
pub fn field_embed(
    title: &str,
    description: Option<&str>,
    fields: &[(String, String, bool)],
) -> serenity::CreateEmbed {
    let title = truncate(title, NAME_LIMIT);
    let description = description.map(|d| truncate(d, DESCRIPTION_LIMIT));
    let used = title.chars().count() + description.as_deref().map_or(0, |d| d.chars().count());
    let shown = fields_that_fit(used, fields);

    let mut embed = serenity::CreateEmbed::default()
        .title(title)
        .color(BRAND_COLOR);
    if let Some(description) = description {
        embed = embed.description(description);
    }
    for (name, value, inline) in fields.iter().take(shown) {
        embed = embed.field(name, value, *inline);
    }
    if shown < fields.len() {
        embed = embed.footer(serenity::CreateEmbedFooter::new(format!(
            "Showing {shown} of {}",
            fields.len()
        )));
    }
    embed
}

/// One embed field per product: `(name, value, inline)`.
#[must_use]
pub fn product_fields(products: &[Product]) -> Vec<(String, String, bool)> {
    products
        .iter()
        .map(|p| {
            (
                truncate(&format!("{} · {}", p.title, p.category.label()), NAME_LIMIT),
                truncate(&format!("{}\n`id: {}`", p.description, p.id), FIELD_LIMIT),
                false,
            )
        })
        .collect()
}

/// Full product card.
#[must_use]
pub fn product_embed(product: &Product) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::default()
        .title(truncate(&product.title, NAME_LIMIT))
        .description(truncate(&product.description, 2048))
        .color(BRAND_COLOR)
        .field("Category", product.category.label(), true)
        .field("ID", format!("`{}`", product.id), true)
        .field("Features", feature_list(product), false);
    if is_linkable(&product.image) {
        embed = embed.image(&product.image);
    } else {
        embed = embed.field("Image", truncate(&describe_image(&product.image), FIELD_LIMIT), false);
    }
    embed
}

/// One inquiry as an embed field.
#[must_use]
pub fn inquiry_field(inquiry: &Inquiry) -> (String, String, bool) {
    (
        truncate(&format!("{} — {}", inquiry.subject, inquiry.name), NAME_LIMIT),
        truncate(
            &format!(
                "{}\n{}\n_{}_ · `id: {}`",
                inquiry.email,
                inquiry.message,
                inquiry.date.format("%B %-d, %Y %H:%M UTC"),
                inquiry.id
            ),
            FIELD_LIMIT,
        ),
        false,
    )
}

/// Admin listing of every image slot grouped by page.
#[must_use]
pub fn image_listing(images: &ImageMap) -> String {
    let mut out = String::new();
    let mut current_group = "";
    for slot in ImageSlot::ALL {
        if slot.group() != current_group {
            current_group = slot.group();
            let _ = writeln!(out, "\n**{current_group}**");
        }
        let status = if images.is_overridden(slot) {
            describe_image(images.get(slot))
        } else {
            "default".to_string()
        };
        let _ = writeln!(out, "• `{}` {} — {status}", slot.key(), slot.label());
    }
    out.trim().to_string()
}

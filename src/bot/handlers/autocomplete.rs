//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions come from the provider snapshots, so they never hit the store.

use crate::{
    bot::Context,
    models::{ImageSlot, ProductCategory, inquiry::SUBJECTS},
};

/// Discord shows at most 25 suggestions.
const MAX_SUGGESTIONS: usize = 25;

fn matching<'a>(candidates: impl Iterator<Item = &'a str>, partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();
    candidates
        .filter(|c| c.to_lowercase().contains(&partial_lower))
        .map(ToString::to_string)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggests product ids whose id or title matches the partial input.
///
/// Returns ids (not titles) so the choice matches the command parameter exactly.
pub async fn autocomplete_product_id(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();
    ctx.data()
        .app
        .content
        .products()
        .into_iter()
        .filter(|p| {
            p.id.to_lowercase().contains(&partial_lower)
                || p.title.to_lowercase().contains(&partial_lower)
        })
        .map(|p| p.id)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggests inquiry ids, newest first.
pub async fn autocomplete_inquiry_id(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();
    ctx.data()
        .app
        .content
        .inquiries()
        .into_iter()
        .filter(|i| {
            i.id.contains(&partial_lower) || i.name.to_lowercase().contains(&partial_lower)
        })
        .map(|i| i.id)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggests product category names.
pub async fn autocomplete_category(_ctx: Context<'_>, partial: &str) -> Vec<String> {
    matching(ProductCategory::ALL.iter().map(|c| c.as_str()), partial)
}

/// Suggests image slot keys.
pub async fn autocomplete_image_slot(_ctx: Context<'_>, partial: &str) -> Vec<String> {
    matching(ImageSlot::ALL.iter().map(|s| s.key()), partial)
}

/// Suggests contact form subjects.
pub async fn autocomplete_subject(_ctx: Context<'_>, partial: &str) -> Vec<String> {
    matching(SUBJECTS.into_iter(), partial)
}

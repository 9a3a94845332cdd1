//! General Discord commands - ping, help and the static pages.
//!
//! `/home` and `/about` stand in for the site's landing and company pages. They
//! only read the image provider, so they never touch the store.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, views},
        errors::{Error, Result},
        models::ImageSlot,
    };
    use poise::serenity_prelude as serenity;

    const HIGHLIGHTS: [(&str, &str); 4] = [
        (
            "High Precision Engineering",
            "Our targets are manufactured with sub-millimeter accuracy ensuring consistent training results.",
        ),
        (
            "Durable Materials",
            "AR500 steel and proprietary self-healing polymers rated for heavy caliber continuous fire.",
        ),
        (
            "Certified Safety",
            "Compliant with all major indoor range safety regulations and ricochet prevention standards.",
        ),
        (
            "Custom Solutions",
            "Tailored designs for military, law enforcement, and private security training facilities.",
        ),
    ];

    const TESTIMONIALS: [(&str, &str, &str); 3] = [
        (
            "Sgt. Marcus Reed",
            "Police Training Division",
            "STO's reactive steel targets have revolutionized our tactical drills. The durability is unmatched.",
        ),
        (
            "Sarah Jenkins",
            "Owner, Alpha Range Club",
            "The electronic scoring system integrated seamlessly. Our members love the real-time feedback.",
        ),
        (
            "David Chen",
            "Competition Shooter",
            "Precision is key in my sport. STO paper targets are the only ones I trust for practice.",
        ),
    ];

    const EXPERTISE: [&str; 4] = [
        "Precision Engineering",
        "High-Grade Metallurgy",
        "Ballistic Safety",
        "IoT Integration",
    ];

    /// Sets the embed image when Discord can render it.
    fn with_picture(embed: serenity::CreateEmbed, image: &str) -> serenity::CreateEmbed {
        if views::is_linkable(image) {
            embed.image(image)
        } else {
            embed
        }
    }

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = format!(
            "**{} Help**\n\
            Here is a summary of all available commands.\n\n\
            **Catalog**\n\
            • `/home` - Shows the landing page.\n\
            • `/about` - Shows who we are.\n\
            • `/products [category]` - Lists products, optionally for one category.\n\
            • `/product <id>` - Shows one product in detail.\n\
            • `/contact <name> <email> <message> [subject]` - Sends us an inquiry.\n\n\
            **Admin**\n\
            • `/login <email> <password>` - Starts an admin session.\n\
            • `/logout` - Ends the admin session.\n\
            • `/whoami` - Shows who is logged in.\n\
            • `/manage_products <subcommand>` - Manage products (add, edit, delete, list).\n\
            • `/manage_inquiries <subcommand>` - Review inquiries (list, delete).\n\
            • `/manage_images <subcommand>` - Manage site images (list, upload, reset).\n\n\
            **Utility**\n\
            • `/ping` - Checks if the bot is responsive.\n\
            • `/help` - Shows this help message.",
            ctx.data().site.name
        );

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Shows the landing page: hero, highlights and testimonials.
    #[poise::command(slash_command)]
    pub async fn home(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let images = ctx.data().app.images.images();

        let hero = serenity::CreateEmbed::default()
            .title("PRECISION DEFINED")
            .description(
                "STO delivers precision-engineered targets for safe, professional, \
                 and advanced indoor shooting experiences.\n\n\
                 Explore the catalog with `/products` or reach us with `/contact`.",
            )
            .color(views::BRAND_COLOR);
        let hero = with_picture(hero, images.get(ImageSlot::HomeHero));

        let mut why = serenity::CreateEmbed::default()
            .title("WHY CHOOSE STO")
            .color(views::BRAND_COLOR);
        for (title, description) in HIGHLIGHTS {
            why = why.field(title, description, false);
        }
        let why = with_picture(why, images.get(ImageSlot::HomeShowcase));

        let mut voices = serenity::CreateEmbed::default()
            .title("Trusted by Professionals")
            .color(views::BRAND_COLOR);
        for (name, role, text) in TESTIMONIALS {
            voices = voices.field(format!("{name} · {role}"), format!("_\"{text}\"_"), false);
        }

        ctx.send(
            poise::CreateReply::default()
                .embed(hero)
                .embed(why)
                .embed(voices),
        )
        .await?;
        Ok(())
    }

    /// Shows the company page.
    #[poise::command(slash_command)]
    pub async fn about(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let images = data.app.images.images();

        let expertise = EXPERTISE
            .iter()
            .map(|e| format!("• {e}"))
            .collect::<Vec<_>>()
            .join("\n");

        let heritage = serenity::CreateEmbed::default()
            .title(format!("About {}", data.site.name))
            .description(
                "Founded on the principles of mechanical excellence and uncompromising safety, \
                 STO has grown from a specialized workshop into a global provider of indoor \
                 shooting range solutions.",
            )
            .color(views::BRAND_COLOR)
            .field(
                "Our Mission",
                "_Delivering innovative, durable, and safe indoor shooting targets for training \
                 and professional use, empowering operators to maintain the highest standards \
                 of readiness._",
                false,
            )
            .field("Years Experience", "15+", true)
            .field("Ranges Equipped", "500+", true)
            .field("Core Expertise", expertise, false);
        let heritage = with_picture(heritage, images.get(ImageSlot::About1));

        let visit = serenity::CreateEmbed::default()
            .title("Visit Us")
            .color(views::BRAND_COLOR)
            .field("Address", &data.site.address, false)
            .field("Phone", &data.site.phone, true)
            .field("Email", &data.site.email, true);
        let visit = with_picture(visit, images.get(ImageSlot::About2));

        ctx.send(poise::CreateReply::default().embed(heritage).embed(visit))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

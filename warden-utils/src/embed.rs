use poise::serenity_prelude as serenity;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x5B_8C_5A;

/// Build an embed whose body is a single full-width image.
pub fn image_embed(title: &str, image_url: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title.to_owned())
        .color(DEFAULT_EMBED_COLOR)
        .image(image_url.to_owned())
}

/// Build an image embed with a "Requested by" footer.
pub fn image_embed_with_requester(
    title: &str,
    image_url: &str,
    requester_name: &str,
) -> serenity::CreateEmbed {
    image_embed(title, image_url).footer(serenity::CreateEmbedFooter::new(format!(
        "Requested by {}",
        requester_name
    )))
}

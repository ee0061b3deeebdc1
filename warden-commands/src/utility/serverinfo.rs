use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::embed::DEFAULT_EMBED_COLOR;
use warden_utils::time::discord_timestamp;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;

pub const META: CommandMeta = CommandMeta {
    name: "serverinfo",
    desc: "Shows detailed information about the server.",
    category: "utility",
    usage: "/serverinfo",
};

#[poise::command(slash_command, category = "Utility", ephemeral)]
pub async fn serverinfo(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let guild = guild_id.to_partial_guild_with_counts(ctx.http()).await?;
    let channels = guild_id.channels(ctx.http()).await?;

    let text_channels = channels
        .values()
        .filter(|channel| channel.kind == serenity::ChannelType::Text)
        .count();
    let voice_channels = channels
        .values()
        .filter(|channel| channel.kind == serenity::ChannelType::Voice)
        .count();

    let mut embed = serenity::CreateEmbed::new()
        .title(format!("Server Info: {}", guild.name))
        .color(DEFAULT_EMBED_COLOR)
        .field("Owner", format!("<@{}>", guild.owner_id.get()), true)
        .field("Server ID", guild_id.get().to_string(), true)
        .field(
            "Created On",
            discord_timestamp(guild_id.created_at().unix_timestamp(), 'F'),
            true,
        )
        .field(
            "Members",
            guild
                .approximate_member_count
                .map_or_else(|| "Unknown".to_owned(), |count| count.to_string()),
            true,
        )
        .field(
            "Channels",
            format!("Text: {}\nVoice: {}", text_channels, voice_channels),
            true,
        )
        .field("Roles", guild.roles.len().to_string(), true);

    if let Some(icon_url) = guild.icon_url() {
        embed = embed.thumbnail(icon_url);
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

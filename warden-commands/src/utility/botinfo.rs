use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::embed::DEFAULT_EMBED_COLOR;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "botinfo",
    desc: "Shows information and statistics about the bot.",
    category: "utility",
    usage: "/botinfo",
};

#[poise::command(slash_command, category = "Utility", ephemeral)]
pub async fn botinfo(ctx: Context<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await;

    // Cache refs must not be held across awaits; copy everything out first.
    let (bot_name, bot_id, bot_face, guild_count, member_count) = {
        let cache = ctx.cache();
        let current_user = cache.current_user();
        let bot_name = current_user.name.clone();
        let bot_id = current_user.id;
        let bot_face = current_user.face();
        drop(current_user);

        let guild_ids = cache.guilds();
        let guild_count = guild_ids.len();
        let member_count: u64 = guild_ids
            .iter()
            .filter_map(|guild_id| cache.guild(*guild_id).map(|guild| guild.member_count))
            .sum();

        (bot_name, bot_id, bot_face, guild_count, member_count)
    };

    let embed = serenity::CreateEmbed::new()
        .title(format!("🤖 Bot Info: {}", bot_name))
        .color(DEFAULT_EMBED_COLOR)
        .thumbnail(bot_face)
        .field("Latency", format!("**{}ms**", latency.as_millis()), true)
        .field("Servers", format!("**{}**", guild_count), true)
        .field("Total Users", format!("**{}**", member_count), true)
        .field("Bot ID", bot_id.get().to_string(), true);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::embed::DEFAULT_EMBED_COLOR;
use warden_utils::time::discord_timestamp;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "userinfo",
    desc: "Shows detailed information about a user.",
    category: "utility",
    usage: "/userinfo [user]",
};

#[poise::command(slash_command, category = "Utility", ephemeral)]
pub async fn userinfo(
    ctx: Context<'_>,
    #[description = "The user to get info about (defaults to you)"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let user = user.unwrap_or_else(|| ctx.author().clone());
    let display_name = user.global_name.clone().unwrap_or_else(|| user.name.clone());

    let member = match ctx.guild_id() {
        Some(guild_id) => guild_id.member(ctx.http(), user.id).await.ok(),
        None => None,
    };

    let joined = member
        .as_ref()
        .and_then(|member| member.joined_at)
        .map_or_else(
            || "N/A".to_owned(),
            |joined_at| discord_timestamp(joined_at.unix_timestamp(), 'F'),
        );
    let role_count = member.as_ref().map_or(0, |member| member.roles.len());

    let embed = serenity::CreateEmbed::new()
        .title(format!("User Info: {}", display_name))
        .color(DEFAULT_EMBED_COLOR)
        .thumbnail(user.face())
        .field(
            "Account Created",
            discord_timestamp(user.created_at().unix_timestamp(), 'F'),
            false,
        )
        .field("Joined Server", joined, false)
        .field("Roles", role_count.to_string(), true)
        .field("Bot?", if user.bot { "Yes" } else { "No" }, true)
        .footer(serenity::CreateEmbedFooter::new(format!(
            "ID: {}",
            user.id.get()
        )));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::permissions::has_user_permission;

use crate::CommandMeta;
use crate::moderation::embeds::{
    guild_display_name, guild_only_message, permission_denied_message, send_warning_dm,
    target_profile_from_user,
};

pub const META: CommandMeta = CommandMeta {
    name: "warn",
    desc: "Issue a warning to a member.",
    category: "moderation",
    usage: "/warn <user> <reason>",
};

#[poise::command(slash_command, category = "Moderation", ephemeral)]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "The member to warn"] user: serenity::User,
    #[description = "The reason for the warning"] reason: String,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if !has_user_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::KICK_MEMBERS,
    )
    .await?
    {
        ctx.say(permission_denied_message()).await?;
        return Ok(());
    }

    let record = ctx
        .data()
        .warnings
        .record(guild_id.get(), user.id.get(), ctx.author().id.get(), &reason)
        .await;

    let target_profile = target_profile_from_user(&user);
    ctx.say(format!(
        "⚠️ **{}** has been warned for: **{}**. Total warnings: **{}**.",
        target_profile.display_name,
        reason.replace('@', "@\u{200B}"),
        record.warn_number
    ))
    .await?;

    let guild_name = guild_display_name(ctx.http(), guild_id).await;
    send_warning_dm(ctx.http(), &user, &guild_name, &reason, record.warn_number).await;

    Ok(())
}

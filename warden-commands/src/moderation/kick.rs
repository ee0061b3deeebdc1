use tracing::error;

use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::permissions::{actor_outranks_target, has_user_permission};

use crate::CommandMeta;
use crate::moderation::embeds::{
    action_failed_message, bot_missing_permission_message, guild_only_message, hierarchy_message,
    is_missing_permissions_error, moderation_action_embed, permission_denied_message,
    reply_private, self_action_message, target_profile_from_user,
};

pub const META: CommandMeta = CommandMeta {
    name: "kick",
    desc: "Kick a member from the server.",
    category: "moderation",
    usage: "/kick <user> [reason]",
};

#[poise::command(slash_command, category = "Moderation")]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "The member to kick"] user: serenity::User,
    #[description = "The reason for the kick"] reason: Option<String>,
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
        reply_private(ctx, permission_denied_message()).await?;
        return Ok(());
    }

    if user.id == ctx.author().id {
        reply_private(ctx, self_action_message("kick")).await?;
        return Ok(());
    }

    if !actor_outranks_target(ctx.http(), guild_id, ctx.author().id, user.id).await? {
        reply_private(ctx, hierarchy_message("kick")).await?;
        return Ok(());
    }

    let kick_result = guild_id
        .kick_with_reason(
            ctx.http(),
            user.id,
            reason.as_deref().unwrap_or("No reason provided"),
        )
        .await;

    if let Err(source) = kick_result {
        if is_missing_permissions_error(&source) {
            reply_private(ctx, bot_missing_permission_message("kick")).await?;
        } else {
            error!(?source, "kick request failed");
            reply_private(ctx, action_failed_message("kick", &source)).await?;
        }
        return Ok(());
    }

    let target_profile = target_profile_from_user(&user);
    let embed = moderation_action_embed(
        &target_profile,
        user.id,
        ctx.author().id,
        "kicked",
        reason.as_deref(),
        None,
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

use tracing::error;

use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::permissions::has_user_permission;
use warden_utils::time::now_unix_secs;

use crate::CommandMeta;
use crate::moderation::embeds::{
    action_failed_message, bot_missing_permission_message, guild_only_message,
    is_missing_permissions_error, permission_denied_message,
};

pub const META: CommandMeta = CommandMeta {
    name: "untimeout",
    desc: "Remove an active timeout from a member.",
    category: "moderation",
    usage: "/untimeout <user>",
};

#[poise::command(slash_command, category = "Moderation", ephemeral)]
pub async fn untimeout(
    ctx: Context<'_>,
    #[description = "The member to untimeout"] user: serenity::User,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if !has_user_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::MODERATE_MEMBERS,
    )
    .await?
    {
        ctx.say(permission_denied_message()).await?;
        return Ok(());
    }

    let Ok(member) = guild_id.member(ctx.http(), user.id).await else {
        ctx.say("That user is not a member of this server.").await?;
        return Ok(());
    };

    let timed_out = member
        .communication_disabled_until
        .is_some_and(|until| until.unix_timestamp() > now_unix_secs() as i64);
    if !timed_out {
        ctx.say(format!("**{}** is not currently timed out.", user.name))
            .await?;
        return Ok(());
    }

    let edit = serenity::EditMember::new().enable_communication();
    if let Err(source) = guild_id.edit_member(ctx.http(), user.id, edit).await {
        if is_missing_permissions_error(&source) {
            ctx.say(bot_missing_permission_message("untimeout")).await?;
        } else {
            error!(?source, "untimeout request failed");
            ctx.say(action_failed_message("untimeout", &source)).await?;
        }
        return Ok(());
    }

    ctx.say(format!("**{}** is no longer timed out.", user.name))
        .await?;

    Ok(())
}

use tracing::error;

use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::parse::{UserRef, parse_user_ref};
use warden_utils::permissions::has_user_permission;

use crate::CommandMeta;
use crate::moderation::embeds::{
    action_failed_message, guild_only_message, is_missing_permissions_error,
    permission_denied_message,
};

pub const META: CommandMeta = CommandMeta {
    name: "unban",
    desc: "Unban a user by ID or name#discriminator.",
    category: "moderation",
    usage: "/unban <identifier>",
};

#[poise::command(slash_command, category = "Moderation", ephemeral)]
pub async fn unban(
    ctx: Context<'_>,
    #[description = "User ID or name#discriminator of the user to unban"] identifier: String,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    // Scanning the ban list can outlast the interaction deadline, so
    // acknowledge first and deliver the result as a follow-up.
    ctx.defer_ephemeral().await?;

    if !has_user_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::BAN_MEMBERS,
    )
    .await?
    {
        ctx.say(permission_denied_message()).await?;
        return Ok(());
    }

    let Some(user_ref) = parse_user_ref(&identifier) else {
        ctx.say("Provide a numeric user ID or an exact `name#discriminator` tag.")
            .await?;
        return Ok(());
    };

    let bans = match guild_id.bans(ctx.http(), None, None).await {
        Ok(bans) => bans,
        Err(source) => {
            error!(?source, "ban list fetch failed");
            ctx.say(action_failed_message("fetch the ban list for", &source))
                .await?;
            return Ok(());
        }
    };

    let banned_user = bans
        .iter()
        .find(|ban| match &user_ref {
            UserRef::Id(id) => ban.user.id.get() == *id,
            UserRef::Tag(tag) => ban.user.tag() == *tag,
        })
        .map(|ban| ban.user.clone());

    let Some(user) = banned_user else {
        ctx.say(format!(
            "`{}` was not found in the ban list.",
            identifier.trim()
        ))
        .await?;
        return Ok(());
    };

    if let Err(source) = guild_id.unban(ctx.http(), user.id).await {
        if is_missing_permissions_error(&source) {
            ctx.say("I don't have permission to unban users.").await?;
        } else {
            error!(?source, "unban request failed");
            ctx.say(action_failed_message("unban", &source)).await?;
        }
        return Ok(());
    }

    ctx.say(format!("**{}** has been unbanned.", user.tag()))
        .await?;

    Ok(())
}

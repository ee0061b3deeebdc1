use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::error;

use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::formatting::format_compact_duration;
use warden_utils::parse::parse_duration_seconds;
use warden_utils::permissions::has_user_permission;

use crate::CommandMeta;
use crate::moderation::embeds::{
    action_failed_message, bot_missing_permission_message, guild_only_message,
    is_missing_permissions_error, moderation_action_embed, permission_denied_message,
    reply_private, self_action_message, target_profile_from_user,
};

pub const META: CommandMeta = CommandMeta {
    name: "timeout",
    desc: "Timeout a member for a duration (default: 10m).",
    category: "moderation",
    usage: "/timeout <user> [duration] [reason]",
};

const DEFAULT_TIMEOUT_SECS: u64 = 10 * 60;
// Discord refuses communication-disabled timestamps further out than this.
const MAX_TIMEOUT_SECS: u64 = 28 * 86_400;

#[poise::command(slash_command, category = "Moderation")]
pub async fn timeout(
    ctx: Context<'_>,
    #[description = "The member to timeout"] user: serenity::User,
    #[description = "Duration (e.g. 30s, 10m, 2h, 1d)"] duration: Option<String>,
    #[description = "Reason for the timeout"] reason: Option<String>,
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
        reply_private(ctx, permission_denied_message()).await?;
        return Ok(());
    }

    if user.id == ctx.author().id {
        reply_private(ctx, self_action_message("timeout")).await?;
        return Ok(());
    }

    let parsed_duration = match duration.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            let Some(seconds) = parse_duration_seconds(raw) else {
                reply_private(
                    ctx,
                    format!(
                        "Invalid duration. Usage: `{}` (examples: 30s, 10m, 2h, 1d)",
                        META.usage
                    ),
                )
                .await?;
                return Ok(());
            };
            seconds
        }
        _ => DEFAULT_TIMEOUT_SECS,
    };

    if parsed_duration > MAX_TIMEOUT_SECS {
        reply_private(
            ctx,
            format!(
                "Timeouts are capped at 28 days (got {}).",
                format_compact_duration(parsed_duration)
            ),
        )
        .await?;
        return Ok(());
    }

    let duration_label = format_compact_duration(parsed_duration);

    let until_system_time = SystemTime::now()
        .checked_add(Duration::from_secs(parsed_duration))
        .unwrap_or(SystemTime::now());
    let until_unix = until_system_time
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs()) as i64;
    let until = serenity::Timestamp::from_unix_timestamp(until_unix)?;

    let edit = serenity::EditMember::new().disable_communication_until_datetime(until);
    let timeout_result = guild_id.edit_member(ctx.http(), user.id, edit).await;

    if let Err(source) = timeout_result {
        if is_missing_permissions_error(&source) {
            reply_private(ctx, bot_missing_permission_message("timeout")).await?;
        } else {
            error!(?source, "timeout request failed");
            reply_private(ctx, action_failed_message("timeout", &source)).await?;
        }
        return Ok(());
    }

    let target_profile = target_profile_from_user(&user);
    let embed = moderation_action_embed(
        &target_profile,
        user.id,
        ctx.author().id,
        "timed out",
        reason.as_deref(),
        Some(&duration_label),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

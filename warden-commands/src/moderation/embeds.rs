use poise::serenity_prelude as serenity;

use warden_core::Context;
use warden_utils::embed::DEFAULT_EMBED_COLOR;

#[derive(Clone, Debug)]
pub struct TargetProfile {
    pub display_name: String,
    pub avatar_url: Option<String>,
}

pub fn target_profile_from_user(user: &serenity::User) -> TargetProfile {
    TargetProfile {
        display_name: user
            .global_name
            .clone()
            .unwrap_or_else(|| user.name.clone()),
        avatar_url: Some(user.face()),
    }
}

pub fn moderation_action_embed(
    target_profile: &TargetProfile,
    target_user_id: serenity::UserId,
    moderator_id: serenity::UserId,
    action_past_tense: &str,
    reason: Option<&str>,
    duration: Option<&str>,
) -> serenity::CreateEmbed {
    let reason = reason
        .unwrap_or("No reason provided")
        .replace('@', "@\u{200B}");

    let mut lines = vec![
        format!("**Target :** <@{}>", target_user_id.get()),
        format!("**Moderator :** <@{}>", moderator_id.get()),
        format!("**Reason :** {}", reason),
    ];
    if let Some(duration) = duration {
        lines.push(format!("**Duration :** {}", duration));
    }

    let mut embed = serenity::CreateEmbed::new()
        .color(DEFAULT_EMBED_COLOR)
        .description(lines.join("\n"));

    if let Some(url) = target_profile.avatar_url.as_deref() {
        embed = embed.author(
            serenity::CreateEmbedAuthor::new(format!(
                "{} has been {}",
                target_profile.display_name, action_past_tense
            ))
            .icon_url(url),
        );
    } else {
        embed = embed.title(format!(
            "{} has been {}",
            target_profile.display_name, action_past_tense
        ));
    }

    embed
}

/// Best-effort DM to a warned user. Closed DMs and blocked bots are not
/// surfaced to the moderator and the warning stands either way.
pub async fn send_warning_dm(
    http: &serenity::Http,
    target_user: &serenity::User,
    guild_name: &str,
    reason: &str,
    warn_number: usize,
) {
    let Ok(dm_channel) = target_user.create_dm_channel(http).await else {
        return;
    };

    let embed = serenity::CreateEmbed::new()
        .color(DEFAULT_EMBED_COLOR)
        .title(format!("You received a warning in {}", guild_name))
        .description(format!(
            "**Reason :** {}\nThis is warning #{} on your record.",
            reason.replace('@', "@\u{200B}"),
            warn_number
        ));

    let _ = dm_channel
        .send_message(http, serenity::CreateMessage::new().embed(embed))
        .await;
}

/// Resolve a guild's display name, falling back to the raw ID.
pub async fn guild_display_name(http: &serenity::Http, guild_id: serenity::GuildId) -> String {
    match guild_id.to_partial_guild(http).await {
        Ok(guild) => guild.name,
        Err(_) => format!("Server {}", guild_id.get()),
    }
}

/// Send an ephemeral plain-text reply regardless of the command's declared
/// visibility. Used for validation and permission errors on public commands.
pub async fn reply_private(
    ctx: Context<'_>,
    content: impl Into<String>,
) -> Result<(), serenity::Error> {
    ctx.send(
        poise::CreateReply::default()
            .ephemeral(true)
            .content(content),
    )
    .await?;

    Ok(())
}

pub fn guild_only_message() -> &'static str {
    "This command only works in servers."
}

pub fn permission_denied_message() -> &'static str {
    "You are not permitted to use this command."
}

pub fn self_action_message(action: &str) -> String {
    format!("You can't {} yourself.", action)
}

pub fn hierarchy_message(action: &str) -> String {
    format!("You can't {} a member with an equal or higher role.", action)
}

pub fn bot_missing_permission_message(action: &str) -> String {
    format!("I don't have permission to {} that user.", action)
}

pub fn action_failed_message(action: &str, source: &serenity::Error) -> String {
    format!(
        "Something went wrong while trying to {}: `{}`",
        action, source
    )
}

pub fn is_missing_permissions_error(source: &serenity::Error) -> bool {
    matches!(
        source,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 403 || response.error.code == 50013
    )
}

use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::pagination::paginate_embed_pages;
use warden_utils::permissions::has_user_permission;
use warden_utils::time::discord_timestamp;

use crate::CommandMeta;
use crate::moderation::embeds::{
    guild_only_message, permission_denied_message, target_profile_from_user,
};

pub const META: CommandMeta = CommandMeta {
    name: "warnings",
    desc: "Show the warnings on record for a member.",
    category: "moderation",
    usage: "/warnings <user>",
};

const WARNINGS_PER_PAGE: usize = 5;

#[poise::command(slash_command, category = "Moderation", ephemeral)]
pub async fn warnings(
    ctx: Context<'_>,
    #[description = "The member to check"] user: serenity::User,
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

    let entries = ctx
        .data()
        .warnings
        .entries_for(guild_id.get(), user.id.get())
        .await;
    let target_profile = target_profile_from_user(&user);

    if entries.is_empty() {
        ctx.say(format!(
            "**{}** has no warnings on record.",
            target_profile.display_name
        ))
        .await?;
        return Ok(());
    }

    let total = entries.len();
    // Newest warning first.
    let lines: Vec<String> = entries
        .iter()
        .enumerate()
        .rev()
        .map(|(index, entry)| {
            format!(
                "#{} • by <@{}>\n**Reason :** {}\n**When :** {}",
                index + 1,
                entry.moderator_id,
                entry.reason.replace('@', "@\u{200B}"),
                discord_timestamp(entry.warned_at as i64, 'f')
            )
        })
        .collect();

    let pages: Vec<String> = lines
        .chunks(WARNINGS_PER_PAGE)
        .map(|chunk| format!("Total warnings: **{}**\n\n{}", total, chunk.join("\n\n")))
        .collect();

    paginate_embed_pages(
        ctx,
        &format!("Warnings for {}", target_profile.display_name),
        &pages,
        true,
    )
    .await?;

    Ok(())
}

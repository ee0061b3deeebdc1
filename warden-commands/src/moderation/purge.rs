use tracing::error;

use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::permissions::has_user_permission;

use crate::CommandMeta;
use crate::moderation::embeds::{
    action_failed_message, guild_only_message, is_missing_permissions_error,
    permission_denied_message,
};

pub const META: CommandMeta = CommandMeta {
    name: "purge",
    desc: "Bulk delete the latest messages in this channel (1-100).",
    category: "moderation",
    usage: "/purge <amount>",
};

const MAX_PURGE: u16 = 100;

#[poise::command(slash_command, category = "Moderation", ephemeral)]
pub async fn purge(
    ctx: Context<'_>,
    #[description = "Number of messages to delete (1-100)"]
    #[min = 1]
    #[max = 100]
    amount: u16,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    // Bulk deletion can outlast the interaction deadline; acknowledge
    // first, report afterwards.
    ctx.defer_ephemeral().await?;

    if !has_user_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::MANAGE_MESSAGES,
    )
    .await?
    {
        ctx.say(permission_denied_message()).await?;
        return Ok(());
    }

    let amount = amount.clamp(1, MAX_PURGE);

    let channel_id = ctx.channel_id();
    let messages = channel_id
        .messages(ctx.http(), serenity::GetMessages::new().limit(amount as u8))
        .await?;

    let ids: Vec<serenity::MessageId> = messages.into_iter().map(|message| message.id).collect();

    if ids.is_empty() {
        ctx.say("No messages found to delete.").await?;
        return Ok(());
    }

    let deleted = ids.len();
    let delete_result = if deleted == 1 {
        channel_id.delete_message(ctx.http(), ids[0]).await
    } else {
        channel_id.delete_messages(ctx.http(), ids).await
    };

    if let Err(source) = delete_result {
        if is_missing_permissions_error(&source) {
            ctx.say("I don't have permission to delete messages in this channel.")
                .await?;
        } else {
            error!(?source, "purge delete request failed");
            ctx.say(action_failed_message("delete messages", &source))
                .await?;
        }
        return Ok(());
    }

    ctx.say(format!("🧹 Deleted **{}** message(s).", deleted))
        .await?;

    Ok(())
}

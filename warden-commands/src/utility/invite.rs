use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::embed::DEFAULT_EMBED_COLOR;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "invite",
    desc: "Generates a link to invite the bot to your server.",
    category: "utility",
    usage: "/invite",
};

#[poise::command(slash_command, category = "Utility", ephemeral)]
pub async fn invite(ctx: Context<'_>) -> Result<(), Error> {
    let client_id = { ctx.cache().current_user().id };
    // The requested permission set comes from configuration, not a
    // hardcoded administrator grant.
    let permissions = ctx.data().invite_permissions;

    let invite_url = format!(
        "https://discord.com/api/oauth2/authorize?client_id={}&permissions={}&scope=bot%20applications.commands",
        client_id.get(),
        permissions.bits()
    );

    let embed = serenity::CreateEmbed::new()
        .color(DEFAULT_EMBED_COLOR)
        .description(format!("🔗 [**Click here to invite the bot!**]({})", invite_url));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

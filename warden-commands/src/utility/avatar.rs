use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::embed::image_embed_with_requester;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "avatar",
    desc: "Displays a user's full-size avatar.",
    category: "utility",
    usage: "/avatar [user]",
};

#[poise::command(slash_command, category = "Utility", ephemeral)]
pub async fn avatar(
    ctx: Context<'_>,
    #[description = "The user to show the avatar of (defaults to you)"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let user = user.unwrap_or_else(|| ctx.author().clone());
    let display_name = user.global_name.as_deref().unwrap_or(&user.name);

    let embed = image_embed_with_requester(
        &format!("{}'s Avatar", display_name),
        &user.face(),
        &ctx.author().name,
    );

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

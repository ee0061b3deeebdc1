use warden_core::{Context, Error};
use warden_utils::embed::image_embed;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "cat",
    desc: "Get a picture of a random cute cat.",
    category: "fun",
    usage: "/cat",
};

// Serves a fresh image on every request.
const CAT_IMAGE_URL: &str = "https://cataas.com/cat";

#[poise::command(slash_command, category = "Fun")]
pub async fn cat(ctx: Context<'_>) -> Result<(), Error> {
    let embed = image_embed("🐱 Here's a cute cat!", CAT_IMAGE_URL);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

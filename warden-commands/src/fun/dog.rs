use warden_core::{Context, Error};
use warden_utils::embed::image_embed;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "dog",
    desc: "Get a picture of a random happy dog.",
    category: "fun",
    usage: "/dog",
};

const DOG_IMAGE_URL: &str = "https://random.dog/woof.jpg";

#[poise::command(slash_command, category = "Fun")]
pub async fn dog(ctx: Context<'_>) -> Result<(), Error> {
    let embed = image_embed("🐶 Woof! A good doggo!", DOG_IMAGE_URL);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

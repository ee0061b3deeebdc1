use rand::Rng;

use warden_core::{Context, Error};
use warden_utils::embed::image_embed_with_requester;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "meme",
    desc: "Posts a funny, random meme.",
    category: "fun",
    usage: "/meme",
};

const MEMES: &[&str] = &[
    "https://i.imgur.com/W3duR07.png",
    "https://i.imgur.com/2vQtZBb.png",
    "https://i.imgur.com/o1t1Q8Q.jpg",
];

#[poise::command(slash_command, category = "Fun")]
pub async fn meme(ctx: Context<'_>) -> Result<(), Error> {
    let image_url = MEMES[rand::thread_rng().gen_range(0..MEMES.len())];
    let embed = image_embed_with_requester("🤣 Random Meme!", image_url, &ctx.author().name);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

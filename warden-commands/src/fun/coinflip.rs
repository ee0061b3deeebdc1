use rand::Rng;

use warden_core::{Context, Error};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "coinflip",
    desc: "Flips a coin: heads or tails.",
    category: "fun",
    usage: "/coinflip",
};

#[poise::command(slash_command, category = "Fun", ephemeral)]
pub async fn coinflip(ctx: Context<'_>) -> Result<(), Error> {
    let side = if rand::thread_rng().gen_bool(0.5) {
        "Heads"
    } else {
        "Tails"
    };
    ctx.say(format!("🪙 The coin landed on **{}**!", side)).await?;
    Ok(())
}

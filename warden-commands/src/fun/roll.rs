use rand::Rng;

use warden_core::{Context, Error};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "roll",
    desc: "Rolls a standard six-sided dice.",
    category: "fun",
    usage: "/roll",
};

#[poise::command(slash_command, category = "Fun", ephemeral)]
pub async fn roll(ctx: Context<'_>) -> Result<(), Error> {
    let roll = rand::thread_rng().gen_range(1..=6);
    ctx.say(format!("🎲 You rolled a **{}**!", roll)).await?;
    Ok(())
}

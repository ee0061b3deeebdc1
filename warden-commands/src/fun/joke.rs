use rand::Rng;

use warden_core::{Context, Error};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "joke",
    desc: "Tells a random joke to lighten the mood.",
    category: "fun",
    usage: "/joke",
};

const JOKES: &[&str] = &[
    "Why did the chicken cross the road? To get to the other side!",
    "I told my computer I needed a break, and it froze.",
    "Why don't programmers like nature? Too many bugs.",
    "Have you heard the one about the three holes? Well, well, well.",
    "What's orange and sounds like a parrot? A carrot.",
];

#[poise::command(slash_command, category = "Fun", ephemeral)]
pub async fn joke(ctx: Context<'_>) -> Result<(), Error> {
    let line = JOKES[rand::thread_rng().gen_range(0..JOKES.len())];
    ctx.say(line).await?;
    Ok(())
}

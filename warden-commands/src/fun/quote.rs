use rand::Rng;

use warden_core::{Context, Error};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "quote",
    desc: "Get a random inspirational quote.",
    category: "fun",
    usage: "/quote",
};

const QUOTES: &[&str] = &[
    "The best way to predict the future is to create it. — Peter Drucker",
    "Do one thing every day that scares you. — Eleanor Roosevelt",
    "Success is not final, failure is not fatal: It is the courage to continue that counts. — Winston Churchill",
    "The only way to do great work is to love what you do. — Steve Jobs",
    "Believe you can and you're halfway there. — Theodore Roosevelt",
];

#[poise::command(slash_command, category = "Fun", ephemeral)]
pub async fn quote(ctx: Context<'_>) -> Result<(), Error> {
    let line = QUOTES[rand::thread_rng().gen_range(0..QUOTES.len())];
    ctx.say(format!("💬 **Quote of the Moment:**\n> {}", line))
        .await?;
    Ok(())
}

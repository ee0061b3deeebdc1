use rand::Rng;

use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::embed::DEFAULT_EMBED_COLOR;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "eightball",
    desc: "Ask the magic 8-ball a question.",
    category: "fun",
    usage: "/eightball <question>",
};

const ANSWERS: &[&str] = &[
    "It is certain.",
    "It is decidedly so.",
    "Without a doubt.",
    "Yes, definitely.",
    "You may rely on it.",
    "As I see it, yes.",
    "Most likely.",
    "Outlook good.",
    "Signs point to yes.",
    "Reply hazy, try again.",
    "Ask again later.",
    "Better not tell you now.",
    "Cannot predict now.",
    "Concentrate and ask again.",
    "Don't count on it.",
    "My reply is no.",
    "My sources say no.",
    "Outlook not so good.",
    "Very doubtful.",
];

#[poise::command(slash_command, category = "Fun", ephemeral)]
pub async fn eightball(
    ctx: Context<'_>,
    #[description = "Your yes/no question for the 8-ball"] question: String,
) -> Result<(), Error> {
    let answer = ANSWERS[rand::thread_rng().gen_range(0..ANSWERS.len())];

    let embed = serenity::CreateEmbed::new()
        .title("🎱 The Magic 8-Ball Speaks...")
        .color(DEFAULT_EMBED_COLOR)
        .field("Question", question, false)
        .field("Answer", answer, false);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

use warden_core::{Context, Error};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "ping",
    desc: "Checks the bot's current latency.",
    category: "utility",
    usage: "/ping",
};

#[poise::command(slash_command, category = "Utility", ephemeral)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await;
    ctx.say(format!(
        "🏓 **Pong!** Gateway latency: `{}ms`",
        latency.as_millis()
    ))
    .await?;
    Ok(())
}

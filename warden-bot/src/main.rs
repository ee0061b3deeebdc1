mod events;

use std::env;

use poise::serenity_prelude as serenity;
use tracing::{debug, error, info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use warden_core::{Data, Error};
use warden_store::WarningStore;
use warden_utils::permissions::default_invite_permissions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    // The bot token is the only hard startup requirement.
    let token = env::var("DISCORD_TOKEN")?;
    let register_guild = register_guild_from_env();
    let invite_permissions = invite_permissions_from_env();

    // A duplicate command name aborts startup here.
    let commands = warden_commands::registry::command_set()?;

    let intents = serenity::GatewayIntents::GUILDS | serenity::GatewayIntents::GUILD_MEMBERS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands,
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::handle_event(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                info!("Warden has awoken!");

                let sync_result = match register_guild {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            &framework.options().commands,
                            guild_id,
                        )
                        .await
                    }
                    None => {
                        poise::builtins::register_globally(ctx, &framework.options().commands)
                            .await
                    }
                };

                // A failed sync leaves the previously published catalog in
                // place; the bot still runs.
                match sync_result {
                    Ok(()) => info!("Command catalog synced."),
                    Err(source) => error!(?source, "command catalog sync failed"),
                }

                Ok(Data {
                    warnings: WarningStore::new(),
                    invite_permissions,
                    connected: Default::default(),
                    rotator_started: Default::default(),
                })
            })
        })
        .build();

    info!("Warden is connecting...");

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

/// Optional guild for scoped command registration (fast iteration during
/// development). Absent or invalid means global registration.
fn register_guild_from_env() -> Option<serenity::GuildId> {
    let raw = env::var("DISCORD_GUILD_ID").ok()?;
    match raw.trim().parse::<u64>() {
        Ok(id) if id != 0 => Some(serenity::GuildId::new(id)),
        _ => {
            warn!("DISCORD_GUILD_ID is not a valid guild ID; registering commands globally.");
            None
        }
    }
}

fn invite_permissions_from_env() -> serenity::Permissions {
    match env::var("INVITE_PERMISSIONS") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(bits) => serenity::Permissions::from_bits_truncate(bits),
            Err(_) => {
                warn!("INVITE_PERMISSIONS is not a valid permission bit set; using the default.");
                default_invite_permissions()
            }
        },
        Err(_) => default_invite_permissions(),
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(?error, "command error");

            let embed = serenity::CreateEmbed::new()
                .title("Command Error")
                .description(format!(
                    "Something went wrong while running this command: `{}`",
                    error
                ))
                .color(warden_utils::embed::DEFAULT_EMBED_COLOR);

            let _ = ctx
                .send(poise::CreateReply::default().ephemeral(true).embed(embed))
                .await;
        }
        poise::FrameworkError::ArgumentParse { ctx, input, .. } => {
            let usage = format!("Usage: `/{}`", ctx.command().qualified_name);
            let description = match input {
                Some(input) => format!("Invalid argument: `{}`\n{}", input, usage),
                None => format!("Missing required argument.\n{}", usage),
            };

            let _ = ctx
                .send(
                    poise::CreateReply::default()
                        .ephemeral(true)
                        .content(description),
                )
                .await;
        }
        poise::FrameworkError::UnknownCommand { .. } => {
            debug!("unknown command invocation");
        }
        other => {
            error!(?other, "framework error");
        }
    }
}

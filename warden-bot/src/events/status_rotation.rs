use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use poise::serenity_prelude as serenity;
use tracing::debug;

use warden_core::Data;
use warden_utils::status::{STATUS_ROTATION_SECS, next_status};

/// Spawn the presence rotation task the first time the gateway becomes
/// ready. Reconnects fire Ready again and must not double the task.
pub fn spawn_once(ctx: &serenity::Context, data: &Data) {
    if data.rotator_started.swap(true, Ordering::SeqCst) {
        return;
    }

    let ctx = ctx.clone();
    let connected = Arc::clone(&data.connected);
    tokio::spawn(run(ctx, connected));
}

async fn run(ctx: serenity::Context, connected: Arc<AtomicBool>) {
    let mut interval = tokio::time::interval(Duration::from_secs(STATUS_ROTATION_SECS));

    loop {
        interval.tick().await;

        let guild_ids = ctx.cache.guilds();
        let guild_count = guild_ids.len();
        let member_count: u64 = guild_ids
            .iter()
            .filter_map(|guild_id| ctx.cache.guild(*guild_id).map(|guild| guild.member_count))
            .sum();

        let Some(activity) = next_status(
            connected.load(Ordering::SeqCst),
            guild_count,
            member_count,
            &mut rand::thread_rng(),
        ) else {
            debug!("skipping presence update before the gateway is ready");
            continue;
        };

        ctx.set_presence(Some(activity), serenity::OnlineStatus::DoNotDisturb);
    }
}

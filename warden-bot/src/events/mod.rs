/// Replies to button presses whose pager session no longer exists.
pub mod stale_pager;
/// Periodic presence rotation.
pub mod status_rotation;

use std::sync::atomic::Ordering;

use poise::serenity_prelude as serenity;
use tracing::info;

use warden_core::{Data, Error};

pub async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!(user = %data_about_bot.user.name, "gateway connection ready");
            data.connected.store(true, Ordering::SeqCst);
            status_rotation::spawn_once(ctx, data);
        }
        serenity::FullEvent::InteractionCreate {
            interaction: serenity::Interaction::Component(component),
        } => {
            stale_pager::reply_if_stale(ctx, component).await;
        }
        _ => {}
    }

    Ok(())
}

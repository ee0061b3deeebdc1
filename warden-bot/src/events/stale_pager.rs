use poise::serenity_prelude as serenity;
use tracing::debug;

use warden_utils::pagination::{is_live_session, parse_custom_id, stale_session_message};

/// Every component interaction passes through here; only pager buttons
/// whose session is gone (expired, or created before a process restart)
/// get a reply. Live sessions are answered by their own collector.
pub async fn reply_if_stale(ctx: &serenity::Context, component: &serenity::ComponentInteraction) {
    let Some((session_id, _)) = parse_custom_id(&component.data.custom_id) else {
        return;
    };

    if is_live_session(session_id).await {
        return;
    }

    let response = serenity::CreateInteractionResponse::Message(
        serenity::CreateInteractionResponseMessage::new()
            .ephemeral(true)
            .content(stale_session_message()),
    );

    if let Err(source) = component.create_response(&ctx.http, response).await {
        debug!(?source, "stale pager reply failed");
    }
}

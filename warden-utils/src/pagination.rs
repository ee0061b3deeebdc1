use std::collections::HashSet;
use std::sync::OnceLock;
use std::time::Duration;

use poise::serenity_prelude as serenity;
use tokio::sync::RwLock;

use crate::embed::DEFAULT_EMBED_COLOR;

/// Idle seconds before a pager stops collecting input and disables its
/// controls.
pub const PAGER_TIMEOUT_SECS: u64 = 120;

const CUSTOM_ID_PREFIX: &str = "pager";

/// Navigation input on an active pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerAction {
    Prev,
    Next,
}

/// Returned when input arrives after the pager expired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerExpired;

/// Page cursor for one viewer session.
///
/// Navigation wraps modulo the page count, so the index stays in
/// `[0, total)`. Once expired the cursor rejects all further input and the
/// index never moves again.
#[derive(Clone, Debug)]
pub struct PagerState {
    index: usize,
    total: usize,
    expired: bool,
}

impl PagerState {
    pub fn new(total: usize) -> Self {
        Self {
            index: 0,
            total: total.max(1),
            expired: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Apply a navigation input and return the new index.
    pub fn apply(&mut self, action: PagerAction) -> Result<usize, PagerExpired> {
        if self.expired {
            return Err(PagerExpired);
        }

        self.index = match action {
            PagerAction::Next => (self.index + 1) % self.total,
            PagerAction::Prev => (self.index + self.total - 1) % self.total,
        };

        Ok(self.index)
    }

    /// Transition to the terminal state. Idempotent; there is no way back.
    pub fn expire(&mut self) {
        self.expired = true;
    }
}

fn action_name(action: PagerAction) -> &'static str {
    match action {
        PagerAction::Prev => "prev",
        PagerAction::Next => "next",
    }
}

fn nav_custom_id(session_id: u64, action: PagerAction) -> String {
    format!("{CUSTOM_ID_PREFIX}:{session_id}:{}", action_name(action))
}

/// Parse a pager button custom ID into its session ID and action.
pub fn parse_custom_id(custom_id: &str) -> Option<(u64, PagerAction)> {
    let mut parts = custom_id.split(':');

    if parts.next()? != CUSTOM_ID_PREFIX {
        return None;
    }

    let session_id = parts.next()?.parse::<u64>().ok()?;
    let action = match parts.next()? {
        "prev" => PagerAction::Prev,
        "next" => PagerAction::Next,
        _ => return None,
    };

    if parts.next().is_some() {
        return None;
    }

    Some((session_id, action))
}

static LIVE_SESSIONS: OnceLock<RwLock<HashSet<u64>>> = OnceLock::new();

fn live_sessions() -> &'static RwLock<HashSet<u64>> {
    LIVE_SESSIONS.get_or_init(|| RwLock::new(HashSet::new()))
}

/// Whether a session is still collecting input. Button presses on sessions
/// that are not live (expired, or from before a restart) get the stale
/// message instead of a navigation.
pub async fn is_live_session(session_id: u64) -> bool {
    live_sessions().read().await.contains(&session_id)
}

pub fn stale_session_message() -> &'static str {
    "This menu is no longer active. Run the command again."
}

async fn register_session(session_id: u64) {
    live_sessions().write().await.insert(session_id);
}

async fn deregister_session(session_id: u64) {
    live_sessions().write().await.remove(&session_id);
}

fn page_embed(title: &str, page: &str, index: usize, total: usize) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title.to_owned())
        .color(DEFAULT_EMBED_COLOR)
        .description(page.to_owned())
        .footer(serenity::CreateEmbedFooter::new(format!(
            "Page {}/{}",
            index + 1,
            total
        )))
}

fn nav_components(session_id: u64, disabled: bool) -> Vec<serenity::CreateActionRow> {
    vec![serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(nav_custom_id(session_id, PagerAction::Prev))
            .label("Previous")
            .disabled(disabled)
            .style(serenity::ButtonStyle::Secondary),
        serenity::CreateButton::new(nav_custom_id(session_id, PagerAction::Next))
            .label("Next")
            .disabled(disabled)
            .style(serenity::ButtonStyle::Secondary),
    ])]
}

/// Send `pages` as a single message with Previous/Next controls that wrap
/// around, editing the message in place on every press. After
/// [`PAGER_TIMEOUT_SECS`] without input the controls are disabled in a
/// final render and the session ends.
pub async fn paginate_embed_pages<U, E>(
    ctx: poise::Context<'_, U, E>,
    title: &str,
    pages: &[String],
    ephemeral: bool,
) -> Result<(), serenity::Error>
where
    U: Send + Sync,
    E: Send + Sync,
{
    if pages.is_empty() {
        return Ok(());
    }

    if pages.len() == 1 {
        ctx.send(
            poise::CreateReply::default()
                .ephemeral(ephemeral)
                .embed(page_embed(title, &pages[0], 0, 1)),
        )
        .await?;
        return Ok(());
    }

    let session_id = ctx.id();
    register_session(session_id).await;
    let result = run_pager(ctx, title, pages, ephemeral, session_id).await;
    deregister_session(session_id).await;
    result
}

async fn run_pager<U, E>(
    ctx: poise::Context<'_, U, E>,
    title: &str,
    pages: &[String],
    ephemeral: bool,
    session_id: u64,
) -> Result<(), serenity::Error>
where
    U: Send + Sync,
    E: Send + Sync,
{
    let mut state = PagerState::new(pages.len());

    let reply = ctx
        .send(
            poise::CreateReply::default()
                .ephemeral(ephemeral)
                .embed(page_embed(title, &pages[state.index()], state.index(), state.total()))
                .components(nav_components(session_id, false)),
        )
        .await?;

    let message_id = reply.message().await?.id;

    while let Some(press) = serenity::collector::ComponentInteractionCollector::new(ctx)
        .filter({
            let author_id = ctx.author().id;
            move |interaction| {
                interaction.user.id == author_id
                    && interaction.message.id == message_id
                    && matches!(
                        parse_custom_id(&interaction.data.custom_id),
                        Some((id, _)) if id == session_id
                    )
            }
        })
        .timeout(Duration::from_secs(PAGER_TIMEOUT_SECS))
        .await
    {
        let Some((_, action)) = parse_custom_id(&press.data.custom_id) else {
            continue;
        };

        let Ok(index) = state.apply(action) else {
            continue;
        };

        press
            .create_response(
                ctx.http(),
                serenity::CreateInteractionResponse::UpdateMessage(
                    serenity::CreateInteractionResponseMessage::new()
                        .embed(page_embed(title, &pages[index], index, state.total()))
                        .components(nav_components(session_id, false)),
                ),
            )
            .await?;
    }

    state.expire();

    let _ = reply
        .edit(
            ctx,
            poise::CreateReply::default()
                .embed(page_embed(
                    title,
                    &pages[state.index()],
                    state.index(),
                    state.total(),
                ))
                .components(nav_components(session_id, true)),
        )
        .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        PagerAction, PagerExpired, PagerState, is_live_session, nav_custom_id, parse_custom_id,
        register_session,
    };

    #[test]
    fn next_wraps_modulo_page_count() {
        let mut pager = PagerState::new(2);

        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(pager.apply(PagerAction::Next).unwrap());
        }
        assert_eq!(seen, [1, 0, 1]);
    }

    #[test]
    fn n_presses_land_on_n_mod_total() {
        for total in 1..=5 {
            let mut forward = PagerState::new(total);
            let mut backward = PagerState::new(total);

            for n in 1..=12 {
                let next_index = forward.apply(PagerAction::Next).unwrap();
                assert_eq!(next_index, n % total);

                let prev_index = backward.apply(PagerAction::Prev).unwrap();
                assert_eq!(prev_index, (total - (n % total)) % total);
            }
        }
    }

    #[test]
    fn sessions_are_independent() {
        let mut left = PagerState::new(4);
        let mut right = PagerState::new(4);

        left.apply(PagerAction::Next).unwrap();
        left.apply(PagerAction::Next).unwrap();

        assert_eq!(left.index(), 2);
        assert_eq!(right.index(), 0);

        right.apply(PagerAction::Prev).unwrap();
        assert_eq!(left.index(), 2);
        assert_eq!(right.index(), 3);
    }

    #[test]
    fn expired_pagers_reject_input_without_moving() {
        let mut pager = PagerState::new(3);
        pager.apply(PagerAction::Next).unwrap();

        pager.expire();
        assert!(pager.is_expired());

        assert_eq!(pager.apply(PagerAction::Next), Err(PagerExpired));
        assert_eq!(pager.apply(PagerAction::Prev), Err(PagerExpired));
        assert_eq!(pager.index(), 1);

        // Expiring again changes nothing.
        pager.expire();
        assert!(pager.is_expired());
    }

    #[test]
    fn custom_ids_round_trip() {
        for action in [PagerAction::Prev, PagerAction::Next] {
            let custom_id = nav_custom_id(42, action);
            assert_eq!(parse_custom_id(&custom_id), Some((42, action)));
        }
    }

    #[test]
    fn foreign_custom_ids_are_ignored() {
        assert_eq!(parse_custom_id(""), None);
        assert_eq!(parse_custom_id("confirm:1:yes"), None);
        assert_eq!(parse_custom_id("pager:notanumber:next"), None);
        assert_eq!(parse_custom_id("pager:1:jump"), None);
        assert_eq!(parse_custom_id("pager:1:next:extra"), None);
    }

    #[tokio::test]
    async fn unknown_sessions_are_not_live() {
        register_session(7).await;

        assert!(is_live_session(7).await);
        assert!(!is_live_session(8).await);
    }
}

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use poise::serenity_prelude as serenity;

use warden_store::WarningStore;

pub type Error = anyhow::Error;

/// Process-wide context constructed once at startup and passed to every
/// command invocation and event handler.
#[derive(Debug)]
pub struct Data {
    pub warnings: WarningStore,
    /// Permission set baked into the `/invite` link, read from configuration.
    pub invite_permissions: serenity::Permissions,
    /// Set on the first gateway Ready; the status rotator no-ops until then.
    pub connected: Arc<AtomicBool>,
    /// Guards the status rotation task against reconnect Ready events.
    pub rotator_started: AtomicBool,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;

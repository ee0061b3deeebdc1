use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::RwLock;

/// A single warning issued against a member of one guild.
#[derive(Clone, Debug)]
pub struct WarningEntry {
    pub warned_at: u64,
    pub moderator_id: u64,
    pub reason: String,
}

/// Result of recording a warning.
#[derive(Clone, Copy, Debug)]
pub struct WarningRecord {
    /// 1-based position of the new warning in the user's log.
    pub warn_number: usize,
}

/// In-memory warning log keyed by (guild, user).
///
/// Warnings do not survive a process restart and there is no deletion
/// operation. If warnings ever need to outlive the process, this handle is
/// the seam to put durable storage behind.
#[derive(Clone, Debug, Default)]
pub struct WarningStore {
    entries: Arc<RwLock<HashMap<(u64, u64), Vec<WarningEntry>>>>,
}

impl WarningStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a warning and return its warning number for that user.
    pub async fn record(
        &self,
        guild_id: u64,
        user_id: u64,
        moderator_id: u64,
        reason: &str,
    ) -> WarningRecord {
        let entry = WarningEntry {
            warned_at: now_unix_secs(),
            moderator_id,
            reason: reason.to_owned(),
        };

        let mut store = self.entries.write().await;
        let log = store.entry((guild_id, user_id)).or_default();
        log.push(entry);

        WarningRecord {
            warn_number: log.len(),
        }
    }

    /// All warnings for a user, oldest first.
    pub async fn entries_for(&self, guild_id: u64, user_id: u64) -> Vec<WarningEntry> {
        let store = self.entries.read().await;
        store.get(&(guild_id, user_id)).cloned().unwrap_or_default()
    }

    /// Number of warnings on record for a user.
    pub async fn count(&self, guild_id: u64, user_id: u64) -> usize {
        let store = self.entries.read().await;
        store.get(&(guild_id, user_id)).map_or(0, Vec::len)
    }
}

fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs())
}

#[cfg(test)]
mod tests {
    use super::WarningStore;

    #[tokio::test]
    async fn warning_numbers_increase_with_each_record() {
        let store = WarningStore::new();

        for expected in 1..=5usize {
            let record = store.record(1, 2, 99, "spam").await;
            assert_eq!(record.warn_number, expected);
            assert_eq!(store.count(1, 2).await, expected);
        }

        assert_eq!(store.entries_for(1, 2).await.len(), 5);
    }

    #[tokio::test]
    async fn guild_user_pairs_are_isolated() {
        let store = WarningStore::new();

        store.record(1, 2, 99, "spam").await;
        store.record(1, 3, 99, "links").await;
        store.record(2, 2, 99, "spam elsewhere").await;

        assert_eq!(store.count(1, 2).await, 1);
        assert_eq!(store.count(1, 3).await, 1);
        assert_eq!(store.count(2, 2).await, 1);
        assert_eq!(store.count(2, 3).await, 0);
    }

    #[tokio::test]
    async fn entries_keep_insertion_order() {
        let store = WarningStore::new();

        store.record(7, 8, 99, "first").await;
        store.record(7, 8, 100, "second").await;
        store.record(7, 8, 99, "third").await;

        let reasons: Vec<String> = store
            .entries_for(7, 8)
            .await
            .into_iter()
            .map(|entry| entry.reason)
            .collect();
        assert_eq!(reasons, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn empty_log_reads_as_zero() {
        let store = WarningStore::new();

        assert_eq!(store.count(1, 2).await, 0);
        assert!(store.entries_for(1, 2).await.is_empty());
    }
}

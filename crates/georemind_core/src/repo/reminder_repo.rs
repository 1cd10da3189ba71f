//! Reminder repository contract and its local SQLite implementation.
//!
//! # Responsibility
//! - Provide the four async data-access operations consumers call.
//! - Serialize store access so sequential callers get read-after-write
//!   consistency.
//!
//! # Invariants
//! - A save completed before a subsequent read is visible to that read.
//! - No retry policy lives here; storage failures surface to the caller.
//! - The busy counter is incremented before any store work is dispatched
//!   and decremented on every completion path.

use crate::busy::BusyCounter;
use crate::model::reminder::{Reminder, ReminderId};
use crate::store::{SqliteReminderStore, StoreError};
use async_trait::async_trait;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;
use tokio::sync::Mutex;

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure surfaced by repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// I/O-level fault from the underlying store. Not retried here;
    /// retry policy, if any, belongs to the caller.
    Storage(StoreError),
    /// Valid-but-empty lookup; distinct from an I/O fault so callers can
    /// render it differently.
    NotFound(ReminderId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "reminder not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

/// Async data-access contract for reminders.
///
/// The single seam all other components depend on; consumers receive an
/// implementation by explicit construction, never through an ambient
/// registry.
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Persists a validated reminder. Never called with an invalid record;
    /// validation happens upstream in the pipeline.
    async fn save_reminder(&self, reminder: &Reminder) -> RepoResult<()>;

    /// Returns every stored reminder. An empty store yields an empty vec.
    async fn get_reminders(&self) -> RepoResult<Vec<Reminder>>;

    /// Returns one reminder by id, or `NotFound`.
    async fn get_reminder(&self, id: ReminderId) -> RepoResult<Reminder>;

    /// Removes every stored reminder. Idempotent.
    async fn delete_all_reminders(&self) -> RepoResult<()>;
}

/// Local SQLite-backed repository.
///
/// The store sits behind an async mutex: lock acquisition and the store
/// call are the only suspension points, and conflicting writes serialize
/// at that boundary. Once dispatched, an operation runs to completion;
/// cancellation at this layer means the caller drops the result.
pub struct LocalReminderRepository {
    store: Mutex<SqliteReminderStore>,
    busy: BusyCounter,
}

impl LocalReminderRepository {
    /// Creates a repository over a verified store, sharing the provided
    /// busy counter with whoever observes quiescence.
    pub fn new(store: SqliteReminderStore, busy: BusyCounter) -> Self {
        Self {
            store: Mutex::new(store),
            busy,
        }
    }

    /// The busy counter wrapping this repository's operations.
    pub fn busy_counter(&self) -> &BusyCounter {
        &self.busy
    }
}

#[async_trait]
impl ReminderRepository for LocalReminderRepository {
    async fn save_reminder(&self, reminder: &Reminder) -> RepoResult<()> {
        let _busy = self.busy.enter();
        let started_at = Instant::now();

        let store = self.store.lock().await;
        match store.insert(reminder) {
            Ok(()) => {
                info!(
                    "event=reminder_save module=repo status=ok id={} duration_ms={}",
                    reminder.id,
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=reminder_save module=repo status=error id={} duration_ms={} error={err}",
                    reminder.id,
                    started_at.elapsed().as_millis()
                );
                Err(err.into())
            }
        }
    }

    async fn get_reminders(&self) -> RepoResult<Vec<Reminder>> {
        let _busy = self.busy.enter();
        let started_at = Instant::now();

        let store = self.store.lock().await;
        match store.get_all() {
            Ok(reminders) => {
                info!(
                    "event=reminder_list module=repo status=ok rows={} duration_ms={}",
                    reminders.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(reminders)
            }
            Err(err) => {
                error!(
                    "event=reminder_list module=repo status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err.into())
            }
        }
    }

    async fn get_reminder(&self, id: ReminderId) -> RepoResult<Reminder> {
        let _busy = self.busy.enter();
        let started_at = Instant::now();

        let store = self.store.lock().await;
        match store.get_by_id(id) {
            Ok(Some(reminder)) => {
                info!(
                    "event=reminder_get module=repo status=ok id={id} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(reminder)
            }
            Ok(None) => {
                info!(
                    "event=reminder_get module=repo status=not_found id={id} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Err(RepoError::NotFound(id))
            }
            Err(err) => {
                error!(
                    "event=reminder_get module=repo status=error id={id} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err.into())
            }
        }
    }

    async fn delete_all_reminders(&self) -> RepoResult<()> {
        let _busy = self.busy.enter();
        let started_at = Instant::now();

        let store = self.store.lock().await;
        match store.delete_all() {
            Ok(()) => {
                info!(
                    "event=reminder_clear module=repo status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=reminder_clear module=repo status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err.into())
            }
        }
    }
}

//! Read model projecting the stored reminders into list rows.
//!
//! # Responsibility
//! - Re-derive the reminder list from the repository on every refresh.
//! - Map persisted records into the row shape the list screen renders.
//!
//! # Invariants
//! - No caching: every call re-queries the repository, so the projection
//!   never reports state older than the last mutation it is aware of.
//! - An empty store projects to an empty list, not an error.

use crate::model::reminder::{Reminder, ReminderId};
use crate::repo::reminder_repo::{ReminderRepository, RepoResult};
use std::sync::Arc;

/// One row of the reminder list read model.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderListItem {
    pub id: ReminderId,
    pub title: String,
    pub description: Option<String>,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Reminder> for ReminderListItem {
    fn from(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            title: reminder.title,
            description: reminder.description,
            location_name: reminder.location_name,
            latitude: reminder.latitude,
            longitude: reminder.longitude,
        }
    }
}

/// List projection over the repository.
///
/// Holds no copy of truth; the repository is queried fresh on each call
/// (screen re-entry, pull-to-refresh, post-save navigation).
pub struct ReminderListProjection {
    repo: Arc<dyn ReminderRepository>,
}

impl ReminderListProjection {
    /// Creates a projection reading through the given repository.
    pub fn new(repo: Arc<dyn ReminderRepository>) -> Self {
        Self { repo }
    }

    /// Current list rows, re-derived from persistent state.
    pub async fn reminders(&self) -> RepoResult<Vec<ReminderListItem>> {
        let reminders = self.repo.get_reminders().await?;
        Ok(reminders.into_iter().map(ReminderListItem::from).collect())
    }
}

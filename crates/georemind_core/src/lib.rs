//! Core data layer for a location-reminder application.
//! This crate is the single source of truth for reminder invariants:
//! validation runs before persistence, the repository is the only
//! mutation gateway, and the busy counter makes quiescence observable.

pub mod busy;
pub mod db;
pub mod logging;
pub mod model;
pub mod projection;
pub mod repo;
pub mod service;
pub mod store;
pub mod validation;

pub use busy::{BusyCounter, BusyGuard};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::ReminderDraft;
pub use model::reminder::{GeofenceRequest, Reminder, ReminderId};
pub use projection::{ReminderListItem, ReminderListProjection};
pub use repo::reminder_repo::{
    LocalReminderRepository, ReminderRepository, RepoError, RepoResult,
};
pub use service::reminder_service::{ReminderService, SaveError, SaveOutcome};
pub use store::{SqliteReminderStore, StoreError, StoreResult};
pub use validation::{promote, validate, ValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

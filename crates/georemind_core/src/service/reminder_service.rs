//! Save use-case: validate a draft, persist it, emit the geofence intent.
//!
//! # Responsibility
//! - Run the validation pipeline before any persistence attempt.
//! - Hand a promoted reminder to the repository and return the geofence
//!   payload the platform collaborator needs.
//!
//! # Invariants
//! - An invalid draft never reaches the repository; the caller keeps its
//!   input state and may retry after fixing it.
//! - Validation failures and storage failures stay distinguishable so the
//!   presentation layer can message them differently.

use crate::model::draft::ReminderDraft;
use crate::model::reminder::{GeofenceRequest, Reminder};
use crate::repo::reminder_repo::{ReminderRepository, RepoError};
use crate::validation::{self, ValidationError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Result of a successful draft save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// The record as persisted, id included.
    pub reminder: Reminder,
    /// Payload for the external geofencing collaborator. Registration is
    /// not performed here.
    pub geofence: GeofenceRequest,
}

/// Failure surfaced by the save use-case.
#[derive(Debug)]
pub enum SaveError {
    /// Draft rejected before persistence; carries the message key for the
    /// transient notification.
    Validation(ValidationError),
    /// Persistence attempted and failed.
    Repo(RepoError),
}

impl Display for SaveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SaveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for SaveError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for SaveError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service for composing and saving reminders.
pub struct ReminderService {
    repo: Arc<dyn ReminderRepository>,
}

impl ReminderService {
    /// Creates a service over the given repository.
    pub fn new(repo: Arc<dyn ReminderRepository>) -> Self {
        Self { repo }
    }

    /// Validates and persists a draft.
    ///
    /// On success the returned outcome carries both the persisted record
    /// and the geofence request derived from it; the caller forwards the
    /// latter to the platform geofencing collaborator.
    ///
    /// # Errors
    /// - `SaveError::Validation` when the pipeline rejects the draft;
    ///   nothing is submitted to the repository in that case.
    /// - `SaveError::Repo` when the store write fails.
    pub async fn save_draft(&self, draft: ReminderDraft) -> Result<SaveOutcome, SaveError> {
        let reminder = match validation::promote(draft) {
            Ok(reminder) => reminder,
            Err(err) => {
                info!(
                    "event=draft_rejected module=service status=invalid message_key={}",
                    err.message_key()
                );
                return Err(err.into());
            }
        };

        self.repo.save_reminder(&reminder).await?;

        let geofence = reminder.geofence_request();
        info!(
            "event=geofence_intent module=service status=ok id={} lat={} lon={}",
            geofence.reminder_id, geofence.latitude, geofence.longitude
        );

        Ok(SaveOutcome { reminder, geofence })
    }
}

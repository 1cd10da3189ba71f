//! Draft validation pipeline and promotion to a persistable record.
//!
//! # Responsibility
//! - Check a draft before anything is handed to the repository.
//! - Promote a passing draft to a `Reminder` with a freshly minted id.
//!
//! # Invariants
//! - Checks run in a fixed order: title first, then location. A draft
//!   missing both must report `MissingTitle`, never `MissingLocation`.
//! - The first failing check short-circuits; at most one reason is
//!   produced per attempt.
//! - Pure and synchronous; this module never touches storage.

use crate::model::draft::ReminderDraft;
use crate::model::reminder::Reminder;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Closed set of reasons a draft is rejected before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title absent, empty, or whitespace-only.
    MissingTitle,
    /// Location name or either coordinate absent, or name trims to empty.
    MissingLocation,
}

impl ValidationError {
    /// Stable message key the presentation layer renders as a transient
    /// notification. These two keys are the only ones this core defines.
    pub fn message_key(self) -> &'static str {
        match self {
            Self::MissingTitle => "err_enter_title",
            Self::MissingLocation => "err_select_location",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "reminder title is required"),
            Self::MissingLocation => write!(f, "reminder location is required"),
        }
    }
}

impl Error for ValidationError {}

/// Runs the full pipeline over a draft without consuming it.
///
/// Pipeline stages: title check, then location check, then valid. Callers
/// that only need a yes/no (e.g. enabling a save button) use this; the
/// save path uses [`promote`].
pub fn validate(draft: &ReminderDraft) -> Result<(), ValidationError> {
    check_title(draft)?;
    check_location(draft)?;
    Ok(())
}

/// Consumes a passing draft and mints a persistable `Reminder`.
///
/// The id is generated here, exactly once per successful promotion.
/// Callers keep their editing state and assemble a fresh draft per
/// attempt, so a rejection loses no user input.
///
/// # Errors
/// First failing pipeline stage, title before location.
pub fn promote(draft: ReminderDraft) -> Result<Reminder, ValidationError> {
    validate(&draft)?;

    // Presence of the required fields was proven by the pipeline above.
    let ReminderDraft {
        title,
        description,
        location_name,
        latitude,
        longitude,
    } = draft;

    match (title, location_name, latitude, longitude) {
        (Some(title), Some(location_name), Some(latitude), Some(longitude)) => Ok(Reminder {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            description,
            location_name: location_name.trim().to_string(),
            latitude,
            longitude,
        }),
        _ => Err(ValidationError::MissingLocation),
    }
}

fn check_title(draft: &ReminderDraft) -> Result<(), ValidationError> {
    match draft.title.as_deref() {
        Some(title) if !title.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::MissingTitle),
    }
}

fn check_location(draft: &ReminderDraft) -> Result<(), ValidationError> {
    let name_present = draft
        .location_name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());

    if name_present && draft.latitude.is_some() && draft.longitude.is_some() {
        Ok(())
    } else {
        Err(ValidationError::MissingLocation)
    }
}

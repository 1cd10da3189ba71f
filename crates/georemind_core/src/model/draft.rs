//! Draft reminder: the composing-state shape before validation.
//!
//! # Responsibility
//! - Hold partially-filled user input without imposing record invariants.
//! - Support cheap field-by-field mutation while the user is composing.
//!
//! # Invariants
//! - A draft carries no id; ids are minted only on promotion.
//! - Drafts are never persisted; the store accepts `Reminder` only.

use serde::{Deserialize, Serialize};

/// Unpersisted candidate reminder with every field optional.
///
/// Lifecycle: created empty when composing starts, mutated as the user
/// types and picks a location, discarded on cancel, or promoted to a
/// [`crate::model::reminder::Reminder`] by the validation pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReminderDraft {
    /// Candidate title; required for promotion.
    pub title: Option<String>,
    /// Candidate body text; always optional.
    pub description: Option<String>,
    /// Label of the picked location; required for promotion.
    pub location_name: Option<String>,
    /// Latitude of the picked location; required for promotion.
    pub latitude: Option<f64>,
    /// Longitude of the picked location; required for promotion.
    pub longitude: Option<f64>,
}

impl ReminderDraft {
    /// Creates an empty draft, the state when composing begins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a draft with the title set; builder-style for tests and
    /// callers assembling input in one expression.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns a draft with the description set.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns a draft with all three location fields set together.
    ///
    /// They are only meaningful as a unit; the pipeline rejects partial
    /// location state the same as absent location state.
    pub fn with_location(
        mut self,
        location_name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        self.location_name = Some(location_name.into());
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

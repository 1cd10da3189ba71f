//! Reminder domain record and geofence intent data.
//!
//! # Responsibility
//! - Define the persisted reminder shape handed to the repository.
//! - Provide the geofence registration payload derived from a saved record.
//!
//! # Invariants
//! - `id` is stable and never reused for another reminder.
//! - `title` and `location_name` are non-empty for any constructed record;
//!   construction goes through draft promotion (`crate::validation`), never
//!   through field-by-field assembly of partial state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a persisted reminder.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ReminderId = Uuid;

/// Validated, persistable reminder record.
///
/// Required fields are plain values here on purpose: a `Reminder` only
/// exists after draft validation has passed, so downstream code never has
/// to re-check presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable global ID, serialized as `uuid` to match the storage schema.
    #[serde(rename = "uuid")]
    pub id: ReminderId,
    /// Short user-facing label. Never empty or whitespace-only.
    pub title: String,
    /// Optional free-form body text.
    pub description: Option<String>,
    /// User-chosen label for the picked point of interest. Never empty.
    pub location_name: String,
    /// Latitude of the picked location, decimal degrees.
    pub latitude: f64,
    /// Longitude of the picked location, decimal degrees.
    pub longitude: f64,
}

impl Reminder {
    /// Returns the data an external geofencing collaborator needs to
    /// register a fence for this reminder.
    ///
    /// The core only produces this payload; fence delivery lives outside.
    pub fn geofence_request(&self) -> GeofenceRequest {
        GeofenceRequest {
            reminder_id: self.id,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Intent payload for platform geofence registration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeofenceRequest {
    /// The reminder this fence should fire for.
    pub reminder_id: ReminderId,
    /// Fence center latitude, decimal degrees.
    pub latitude: f64,
    /// Fence center longitude, decimal degrees.
    pub longitude: f64,
}

//! Domain model for location reminders.
//!
//! # Responsibility
//! - Define the canonical persisted record and its pre-save draft shape.
//! - Keep one storage shape shared by save, list and geofence use-cases.
//!
//! # Invariants
//! - Every persisted reminder is identified by a stable `ReminderId`.
//! - A reminder is either fully absent from storage or satisfies all
//!   required-field constraints; drafts are the only partial shape.

pub mod draft;
pub mod reminder;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, persistence and geofence-intent emission
//!   into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod reminder_service;

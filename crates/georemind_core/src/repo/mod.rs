//! Repository layer: the async seam between consumers and the store.
//!
//! # Responsibility
//! - Define the data-access contract every consumer depends on.
//! - Isolate store and SQL details from projection/service orchestration.
//!
//! # Invariants
//! - Every repository operation is wrapped by the busy counter for its
//!   full duration, error paths included.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   storage transport errors.

pub mod reminder_repo;

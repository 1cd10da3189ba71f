//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive one draft-save-list round trip against an in-memory database
//!   to verify `georemind_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use georemind_core::db::open_db_in_memory;
use georemind_core::{
    BusyCounter, LocalReminderRepository, ReminderDraft, ReminderListProjection, ReminderService,
    SqliteReminderStore,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("georemind_core version={}", georemind_core::core_version());

    let conn = open_db_in_memory()?;
    let store = SqliteReminderStore::try_new(conn)?;
    let busy = BusyCounter::new();
    let repo = Arc::new(LocalReminderRepository::new(store, busy.clone()));

    let service = ReminderService::new(repo.clone());
    let projection = ReminderListProjection::new(repo);

    let draft = ReminderDraft::new()
        .with_title("smoke reminder")
        .with_description("created by the cli probe")
        .with_location("probe point", 52.63, 4.75);

    let outcome = service.save_draft(draft).await?;
    println!(
        "saved title={} location={} geofence_lat={} geofence_lon={}",
        outcome.reminder.title,
        outcome.reminder.location_name,
        outcome.geofence.latitude,
        outcome.geofence.longitude
    );

    busy.wait_idle().await;

    let rows = projection.reminders().await?;
    println!("listed rows={}", rows.len());
    for row in rows {
        println!("row title={} location={}", row.title, row.location_name);
    }

    Ok(())
}

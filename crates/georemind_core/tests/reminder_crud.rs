use georemind_core::db::migrations::latest_version;
use georemind_core::db::open_db_in_memory;
use georemind_core::{
    promote, BusyCounter, LocalReminderRepository, Reminder, ReminderDraft, ReminderRepository,
    RepoError, SqliteReminderStore, StoreError,
};
use rusqlite::Connection;
use uuid::Uuid;

#[tokio::test]
async fn save_then_list_shows_exactly_the_saved_record() {
    let repo = fresh_repo();
    assert!(repo.get_reminders().await.unwrap().is_empty());

    let reminder = sample_reminder("groceries", "central market");
    repo.save_reminder(&reminder).await.unwrap();

    let listed = repo.get_reminders().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], reminder);
}

#[tokio::test]
async fn save_with_same_id_replaces_the_record() {
    let repo = fresh_repo();

    let mut reminder = sample_reminder("original title", "old spot");
    repo.save_reminder(&reminder).await.unwrap();

    reminder.title = "updated title".to_string();
    reminder.location_name = "new spot".to_string();
    repo.save_reminder(&reminder).await.unwrap();

    let listed = repo.get_reminders().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "updated title");
    assert_eq!(listed[0].location_name, "new spot");
}

#[tokio::test]
async fn get_reminder_returns_saved_record_by_id() {
    let repo = fresh_repo();

    let reminder = sample_reminder("pick up parcel", "post office");
    repo.save_reminder(&reminder).await.unwrap();

    let loaded = repo.get_reminder(reminder.id).await.unwrap();
    assert_eq!(loaded, reminder);
}

#[tokio::test]
async fn get_reminder_for_unknown_id_is_not_found() {
    let repo = fresh_repo();
    let unknown = Uuid::new_v4();

    let err = repo.get_reminder(unknown).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == unknown));
}

#[tokio::test]
async fn delete_all_on_empty_store_is_idempotent() {
    let repo = fresh_repo();

    repo.delete_all_reminders().await.unwrap();
    repo.delete_all_reminders().await.unwrap();

    assert!(repo.get_reminders().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_all_clears_existing_records() {
    let repo = fresh_repo();

    repo.save_reminder(&sample_reminder("one", "a")).await.unwrap();
    repo.save_reminder(&sample_reminder("two", "b")).await.unwrap();
    assert_eq!(repo.get_reminders().await.unwrap().len(), 2);

    repo.delete_all_reminders().await.unwrap();
    assert!(repo.get_reminders().await.unwrap().is_empty());
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteReminderStore::try_new(conn) {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn store_rejects_connection_without_reminders_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteReminderStore::try_new(conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredTable("reminders"))
    ));
}

#[test]
fn store_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE reminders (
            uuid TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteReminderStore::try_new(conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredColumn {
            table: "reminders",
            column: "description"
        })
    ));
}

#[test]
fn store_insert_and_get_all_keep_creation_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::try_new(conn).unwrap();

    let first = reminder_with_fixed_id("00000000-0000-4000-8000-000000000001", "first");
    let second = reminder_with_fixed_id("00000000-0000-4000-8000-000000000002", "second");
    store.insert(&first).unwrap();
    store.insert(&second).unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[test]
fn store_rejects_persisted_row_with_malformed_uuid() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO reminders (uuid, title, description, location_name, latitude, longitude)
         VALUES ('not-a-uuid', 'corrupt row', NULL, 'somewhere', 52.0, 4.0);",
        [],
    )
    .unwrap();

    let store = SqliteReminderStore::try_new(conn).unwrap();
    let err = store.get_all().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(message) if message.contains("not-a-uuid")));
}

#[test]
fn store_rejects_persisted_row_with_whitespace_title() {
    let id = Uuid::new_v4();
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO reminders (uuid, title, description, location_name, latitude, longitude)
         VALUES (?1, '   ', NULL, 'somewhere', 52.0, 4.0);",
        [id.to_string()],
    )
    .unwrap();

    let store = SqliteReminderStore::try_new(conn).unwrap();

    let err = store.get_all().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(ref message) if message.contains("title")));

    let err = store.get_by_id(id).unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(ref message) if message.contains("title")));
}

#[test]
fn store_get_by_id_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::try_new(conn).unwrap();

    assert!(store.get_by_id(Uuid::new_v4()).unwrap().is_none());
}

fn fresh_repo() -> LocalReminderRepository {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::try_new(conn).unwrap();
    LocalReminderRepository::new(store, BusyCounter::new())
}

fn sample_reminder(title: &str, location_name: &str) -> Reminder {
    promote(
        ReminderDraft::new()
            .with_title(title)
            .with_location(location_name, 52.0, 4.0),
    )
    .unwrap()
}

fn reminder_with_fixed_id(id: &str, title: &str) -> Reminder {
    let mut reminder = sample_reminder(title, "fixed spot");
    reminder.id = Uuid::parse_str(id).unwrap();
    reminder
}

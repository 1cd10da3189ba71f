//! Durable reminder store over SQLite.
//!
//! # Responsibility
//! - Own all SQL that touches the `reminders` table.
//! - Provide atomic per-call insert/read/clear primitives for the
//!   repository layer.
//!
//! # Invariants
//! - Insert is an idempotent upsert keyed on `uuid`.
//! - Each operation is a single statement, so no reader ever observes a
//!   partially-written record.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::reminder::{Reminder, ReminderId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const REMINDER_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    description,
    location_name,
    latitude,
    longitude
FROM reminders";

const REQUIRED_COLUMNS: &[&str] = &[
    "uuid",
    "title",
    "description",
    "location_name",
    "latitude",
    "longitude",
];

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure surfaced by the reminder store.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted reminder data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// SQLite-backed reminder collection.
///
/// Owns its connection; the repository serializes access from async
/// callers, so the store itself stays synchronous.
pub struct SqliteReminderStore {
    conn: Connection,
}

impl SqliteReminderStore {
    /// Wraps a migrated connection after verifying the schema this store
    /// depends on is actually present.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not carry the reminders shape.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        verify_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Inserts a reminder, replacing any existing record with the same id.
    pub fn insert(&self, reminder: &Reminder) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO reminders (
                uuid,
                title,
                description,
                location_name,
                latitude,
                longitude
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(uuid) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                location_name = excluded.location_name,
                latitude = excluded.latitude,
                longitude = excluded.longitude,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                reminder.id.to_string(),
                reminder.title.as_str(),
                reminder.description.as_deref(),
                reminder.location_name.as_str(),
                reminder.latitude,
                reminder.longitude,
            ],
        )?;

        Ok(())
    }

    /// Returns every stored reminder in stable creation order.
    pub fn get_all(&self) -> StoreResult<Vec<Reminder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} ORDER BY created_at ASC, uuid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut reminders = Vec::new();
        while let Some(row) = rows.next()? {
            reminders.push(parse_reminder_row(row)?);
        }

        Ok(reminders)
    }

    /// Returns one reminder by id, or `None` when no record matches.
    ///
    /// Absence is a valid outcome here; the repository layer turns it into
    /// its not-found error where the contract demands one.
    pub fn get_by_id(&self, id: ReminderId) -> StoreResult<Option<Reminder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_reminder_row(row)?));
        }

        Ok(None)
    }

    /// Removes every stored reminder. Idempotent; clearing an empty table
    /// succeeds.
    pub fn delete_all(&self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM reminders;", [])?;
        Ok(())
    }
}

fn parse_reminder_row(row: &Row<'_>) -> StoreResult<Reminder> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{uuid_text}` in reminders.uuid"))
    })?;

    let title: String = row.get("title")?;
    if title.trim().is_empty() {
        return Err(StoreError::InvalidData(format!(
            "empty title for reminder `{uuid_text}`"
        )));
    }

    let location_name: String = row.get("location_name")?;
    if location_name.trim().is_empty() {
        return Err(StoreError::InvalidData(format!(
            "empty location_name for reminder `{uuid_text}`"
        )));
    }

    Ok(Reminder {
        id,
        title,
        description: row.get("description")?,
        location_name,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}

fn verify_schema(conn: &Connection) -> StoreResult<()> {
    let expected_version = crate::db::migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'reminders'
        );",
        [],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(StoreError::MissingRequiredTable("reminders"));
    }

    for &column in REQUIRED_COLUMNS {
        let column_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM pragma_table_info('reminders') WHERE name = ?1
            );",
            [column],
            |row| row.get(0),
        )?;
        if column_exists == 0 {
            return Err(StoreError::MissingRequiredColumn {
                table: "reminders",
                column,
            });
        }
    }

    Ok(())
}

//! SQLite-backed catalogue store with change history.
//!
//! The store owns persistence only: the engine consumes the immutable
//! snapshot returned by [`CatalogueStore::snapshot`] and never touches the
//! database. Every mutation writes the row and its change-log entry in one
//! transaction.

use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Transaction, params};

use crate::defaults;
use crate::profile::appliance::{ApplianceRecord, Priority, RecordError, SlotMask};

/// Errors from catalogue storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A persisted row no longer satisfies the record invariants.
    #[error("stored row {id}: {source}")]
    InvalidRow { id: i64, source: RecordError },

    /// An invalid record was handed to a write operation; nothing is stored.
    #[error(transparent)]
    InvalidRecord(RecordError),

    #[error("no appliance with id {0}")]
    NotFound(i64),

    #[error("change log row {id} has unknown change type \"{kind}\"")]
    UnknownChangeKind { id: i64, kind: String },
}

/// Kind of catalogue mutation recorded in the change log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

impl ChangeKind {
    /// Stable storage name.
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Insert => "insert",
            ChangeKind::Update => "update",
            ChangeKind::Delete => "delete",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "insert" => Some(ChangeKind::Insert),
            "update" => Some(ChangeKind::Update),
            "delete" => Some(ChangeKind::Delete),
            _ => None,
        }
    }
}

/// One change-log entry.
#[derive(Debug, Clone)]
pub struct ChangeEntry {
    pub id: i64,
    pub kind: ChangeKind,
    pub appliance_id: i64,
    pub appliance_name: String,
    pub details: String,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
}

/// Catalogue storage backed by SQLite.
pub struct CatalogueStore {
    conn: Connection,
}

impl CatalogueStore {
    /// Opens (or creates) the store at `path` and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the database cannot be opened.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Opens an in-memory store, mainly for tests.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the database cannot be created.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA foreign_keys=ON;

             CREATE TABLE IF NOT EXISTS appliances (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 name TEXT NOT NULL,
                 quantity INTEGER NOT NULL,
                 rated_power_w REAL NOT NULL,
                 duty_cycle_pct REAL NOT NULL,
                 power_factor REAL NOT NULL,
                 use_time_pct REAL NOT NULL,
                 priority TEXT NOT NULL,
                 active_slots INTEGER NOT NULL,
                 room TEXT NOT NULL DEFAULT ''
             );

             CREATE TABLE IF NOT EXISTS change_log (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 change_type TEXT NOT NULL,
                 appliance_id INTEGER NOT NULL,
                 appliance_name TEXT NOT NULL,
                 details TEXT NOT NULL,
                 timestamp TEXT NOT NULL
             );",
        )?;
        Ok(Self { conn })
    }

    /// Whether the appliances table has no rows.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM appliances", [], |row| row.get(0))?;
        Ok(count == 0)
    }

    /// Populates an empty store with the built-in default catalogue.
    ///
    /// Returns the number of rows inserted: 0 when the store already has
    /// data. Seeding writes no change-log entries.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on database failure.
    pub fn seed_defaults(&mut self) -> Result<usize, StoreError> {
        if !self.is_empty()? {
            return Ok(0);
        }

        let records = defaults::default_catalogue();
        let tx = self.conn.transaction()?;
        for record in &records {
            insert_row(&tx, record)?;
        }
        tx.commit()?;
        Ok(records.len())
    }

    /// Reads the full catalogue as validated records, in row-id order.
    ///
    /// This is the immutable snapshot the engine consumes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidRow`] if a persisted row violates the
    /// record invariants; rows are never silently coerced back into range.
    pub fn snapshot(&self) -> Result<Vec<ApplianceRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, quantity, rated_power_w, duty_cycle_pct, power_factor,
                    use_time_pct, priority, active_slots, room
             FROM appliances ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RawRow {
                id: row.get(0)?,
                name: row.get(1)?,
                quantity: row.get(2)?,
                rated_power_w: row.get(3)?,
                duty_cycle_pct: row.get(4)?,
                power_factor: row.get(5)?,
                use_time_pct: row.get(6)?,
                priority: row.get(7)?,
                active_slots: row.get(8)?,
                room: row.get(9)?,
            })
        })?;

        let mut records = Vec::new();
        for raw in rows {
            records.push(raw?.into_record()?);
        }
        Ok(records)
    }

    /// Inserts a new record or updates an existing one, logging the change.
    ///
    /// Returns the row id of the written record.
    ///
    /// # Errors
    ///
    /// Rejects invalid records with [`StoreError::InvalidRecord`] before
    /// touching the database; updating a missing id is
    /// [`StoreError::NotFound`].
    pub fn upsert(
        &mut self,
        id: Option<i64>,
        record: &ApplianceRecord,
    ) -> Result<i64, StoreError> {
        record.validate().map_err(StoreError::InvalidRecord)?;

        let tx = self.conn.transaction()?;
        let id = match id {
            None => {
                let id = insert_row(&tx, record)?;
                log_change(
                    &tx,
                    ChangeKind::Insert,
                    id,
                    &record.name,
                    &format!("added appliance \"{}\"", record.name),
                )?;
                id
            }
            Some(id) => {
                let existing: Option<String> = tx
                    .query_row(
                        "SELECT name FROM appliances WHERE id = ?1",
                        params![id],
                        |row| row.get(0),
                    )
                    .optional()?;
                if existing.is_none() {
                    return Err(StoreError::NotFound(id));
                }

                tx.execute(
                    "UPDATE appliances
                     SET name = ?1, quantity = ?2, rated_power_w = ?3, duty_cycle_pct = ?4,
                         power_factor = ?5, use_time_pct = ?6, priority = ?7,
                         active_slots = ?8, room = ?9
                     WHERE id = ?10",
                    params![
                        record.name,
                        record.quantity,
                        record.rated_power_w,
                        record.duty_cycle_pct,
                        record.power_factor,
                        record.use_time_pct,
                        record.priority.as_str(),
                        record.active_slots.bits(),
                        record.room,
                        id,
                    ],
                )?;
                log_change(
                    &tx,
                    ChangeKind::Update,
                    id,
                    &record.name,
                    &format!("updated appliance \"{}\"", record.name),
                )?;
                id
            }
        };
        tx.commit()?;
        Ok(id)
    }

    /// Deletes a record, logging the deletion.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row has the given id.
    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        let name: Option<String> = tx
            .query_row(
                "SELECT name FROM appliances WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        let Some(name) = name else {
            return Err(StoreError::NotFound(id));
        };

        tx.execute("DELETE FROM appliances WHERE id = ?1", params![id])?;
        log_change(
            &tx,
            ChangeKind::Delete,
            id,
            &name,
            &format!("deleted appliance \"{name}\""),
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Lists change-log entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on database failure or an unrecognized
    /// change type.
    pub fn changes(&self) -> Result<Vec<ChangeEntry>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, change_type, appliance_id, appliance_name, details, timestamp
             FROM change_log ORDER BY id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, kind, appliance_id, appliance_name, details, timestamp) = row?;
            let kind = ChangeKind::parse(&kind)
                .ok_or(StoreError::UnknownChangeKind { id, kind })?;
            entries.push(ChangeEntry {
                id,
                kind,
                appliance_id,
                appliance_name,
                details,
                timestamp,
            });
        }
        Ok(entries)
    }
}

struct RawRow {
    id: i64,
    name: String,
    quantity: i64,
    rated_power_w: f64,
    duty_cycle_pct: f64,
    power_factor: f64,
    use_time_pct: f64,
    priority: String,
    active_slots: i64,
    room: String,
}

impl RawRow {
    fn into_record(self) -> Result<ApplianceRecord, StoreError> {
        let invalid = |field: &'static str, message: &str| StoreError::InvalidRow {
            id: self.id,
            source: RecordError {
                appliance: self.name.clone(),
                field,
                message: message.to_string(),
            },
        };

        let quantity = u32::try_from(self.quantity)
            .map_err(|_| invalid("quantity", "out of range for u32"))?;
        let priority = Priority::parse(&self.priority)
            .ok_or_else(|| invalid("priority", "unknown priority name"))?;
        let bits = u16::try_from(self.active_slots)
            .ok()
            .and_then(SlotMask::from_bits)
            .ok_or_else(|| invalid("active_slots", "not a 12-bit mask"))?;

        let record = ApplianceRecord {
            name: self.name.clone(),
            quantity,
            rated_power_w: self.rated_power_w,
            duty_cycle_pct: self.duty_cycle_pct,
            power_factor: self.power_factor,
            use_time_pct: self.use_time_pct,
            priority,
            active_slots: bits,
            room: self.room.clone(),
        };

        record.validate().map_err(|source| StoreError::InvalidRow {
            id: self.id,
            source,
        })?;
        Ok(record)
    }
}

fn insert_row(tx: &Transaction<'_>, record: &ApplianceRecord) -> Result<i64, StoreError> {
    tx.execute(
        "INSERT INTO appliances
             (name, quantity, rated_power_w, duty_cycle_pct, power_factor,
              use_time_pct, priority, active_slots, room)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            record.name,
            record.quantity,
            record.rated_power_w,
            record.duty_cycle_pct,
            record.power_factor,
            record.use_time_pct,
            record.priority.as_str(),
            record.active_slots.bits(),
            record.room,
        ],
    )?;
    Ok(tx.last_insert_rowid())
}

fn log_change(
    tx: &Transaction<'_>,
    kind: ChangeKind,
    appliance_id: i64,
    appliance_name: &str,
    details: &str,
) -> Result<(), StoreError> {
    tx.execute(
        "INSERT INTO change_log (change_type, appliance_id, appliance_name, details, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            kind.as_str(),
            appliance_id,
            appliance_name,
            details,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

//! SQLite storage implementation

use std::path::{Path, PathBuf};
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, params};
use crate::{Error, Result};
use crate::parcel::{NewParcel, Parcel, ParcelStatus, StockRow};
use super::schema;

/// Format of the `entry_date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Format of the `entry_time` column
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// SQLite-backed store of parcel records.
///
/// Holds only the database path. Every operation opens its own connection
/// and drops it before returning.
#[derive(Debug, Clone)]
pub struct ParcelStore {
    path: PathBuf,
}

impl ParcelStore {
    /// Create a store for the database at `path` without touching the file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store and bring the schema up to date
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Create the parcels table if needed and apply missing migrations.
    ///
    /// Idempotent. Returns the columns that were added.
    pub fn ensure_schema(&self) -> Result<Vec<&'static str>> {
        let conn = self.connect()?;
        schema::ensure_schema(&conn)
    }

    // ========== Record Operations ==========

    /// Insert a new parcel as `Stored`, stamped with the current local time
    pub fn create(&self, parcel: &NewParcel) -> Result<i64> {
        self.create_at(parcel, Local::now().naive_local())
    }

    /// Insert a new parcel as `Stored`, stamped with `now`
    pub fn create_at(&self, parcel: &NewParcel, now: NaiveDateTime) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            r#"
            INSERT INTO parcels (code, description, quantity, status, entry_date, entry_time)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                parcel.code,
                parcel.description,
                parcel.quantity,
                ParcelStatus::Stored.as_str(),
                now.format(DATE_FORMAT).to_string(),
                now.format(TIME_FORMAT).to_string(),
            ],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!("Stored parcel {} as id {}", parcel.code, id);
        Ok(id)
    }

    /// Mark every parcel with `code` as retrieved by `exit_method`.
    ///
    /// Returns the number of rows updated. An unknown code updates nothing
    /// and is not an error.
    pub fn mark_retrieved(&self, code: &str, exit_method: &str) -> Result<usize> {
        let conn = self.connect()?;
        let updated = conn.execute(
            "UPDATE parcels SET status = ?1, exit_method = ?2 WHERE code = ?3",
            params![ParcelStatus::Retrieved.as_str(), exit_method, code],
        )?;
        tracing::debug!("Marked {} parcel(s) with code {} as retrieved via {}", updated, code, exit_method);
        Ok(updated)
    }

    /// Delete every parcel. Returns the number of rows deleted.
    pub fn clear_all(&self) -> Result<usize> {
        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM parcels", [])?;
        tracing::debug!("Cleared {} parcel(s)", deleted);
        Ok(deleted)
    }

    /// List every parcel in storage order
    pub fn list_all(&self) -> Result<Vec<StockRow>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT code, description, quantity, status,
                   COALESCE(exit_method, ''), COALESCE(entry_date, ''), COALESCE(entry_time, '')
            FROM parcels
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(StockRow {
                    code: row.get(0)?,
                    description: row.get(1)?,
                    quantity: row.get(2)?,
                    status: row.get(3)?,
                    exit_method: row.get(4)?,
                    entry_date: row.get(5)?,
                    entry_time: row.get(6)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Find all parcels sharing `code`
    pub fn find_by_code(&self, code: &str) -> Result<Vec<Parcel>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, code, description, quantity, status, exit_method, entry_date, entry_time
            FROM parcels WHERE code = ?1 ORDER BY id
            "#,
        )?;

        let parcels = stmt
            .query_map([code], row_to_parcel)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(parcels)
    }

    /// Count all parcels
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM parcels", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get stock statistics
    pub fn stats(&self) -> Result<StockStats> {
        let conn = self.connect()?;
        let (total, stored, quantity_in_stock): (i64, i64, i64) = conn.query_row(
            r#"
            SELECT COUNT(*),
                   COALESCE(SUM(CASE WHEN status = ?1 THEN 1 ELSE 0 END), 0),
                   COALESCE(SUM(CASE WHEN status = ?1 THEN quantity ELSE 0 END), 0)
            FROM parcels
            "#,
            [ParcelStatus::Stored.as_str()],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;

        Ok(StockStats {
            total: total as usize,
            stored: stored as usize,
            retrieved: (total - stored) as usize,
            quantity_in_stock,
        })
    }
}

/// Helper to convert a row to a Parcel
fn row_to_parcel(row: &rusqlite::Row) -> rusqlite::Result<Parcel> {
    let status_str: String = row.get(4)?;
    let status: ParcelStatus = status_str.parse().map_err(|e: Error| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Parcel {
        id: row.get(0)?,
        code: row.get(1)?,
        description: row.get(2)?,
        quantity: row.get(3)?,
        status,
        exit_method: row.get(5)?,
        entry_date: row.get(6)?,
        entry_time: row.get(7)?,
    })
}

/// Stock statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockStats {
    pub total: usize,
    pub stored: usize,
    pub retrieved: usize,
    /// Sum of quantities of parcels still stored
    pub quantity_in_stock: i64,
}

impl std::fmt::Display for StockStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Stock Statistics:")?;
        writeln!(f, "  Parcels: {}", self.total)?;
        writeln!(f, "  Stored: {}", self.stored)?;
        writeln!(f, "  Retrieved: {}", self.retrieved)?;
        writeln!(f, "  Units in stock: {}", self.quantity_in_stock)
    }
}

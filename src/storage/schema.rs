//! Database schema definitions and additive migrations

use rusqlite::Connection;
use crate::Result;

/// Name of the single parcel table
pub const PARCELS_TABLE: &str = "parcels";

/// SQL to create the parcels table
pub const CREATE_PARCELS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS parcels (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    code TEXT NOT NULL,
    description TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    status TEXT NOT NULL DEFAULT 'Stored',
    exit_method TEXT,
    entry_date TEXT,
    entry_time TEXT
)
"#;

/// A column added after the first release of the table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMigration {
    pub table: &'static str,
    pub column: &'static str,
    /// Column type and constraints, as written after the name in `ADD COLUMN`
    pub definition: &'static str,
}

impl ColumnMigration {
    fn alter_sql(&self) -> String {
        format!("ALTER TABLE {} ADD COLUMN {} {}", self.table, self.column, self.definition)
    }
}

/// Additive migrations, applied in order. New columns must be nullable.
pub const MIGRATIONS: &[ColumnMigration] = &[
    ColumnMigration { table: PARCELS_TABLE, column: "entry_date", definition: "TEXT" },
    ColumnMigration { table: PARCELS_TABLE, column: "entry_time", definition: "TEXT" },
];

/// Column names of `table`, in declaration order
pub fn column_names(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}

/// Create the table if absent and apply every missing migration.
///
/// Returns the columns that were added; empty when the schema is current.
pub fn ensure_schema(conn: &Connection) -> Result<Vec<&'static str>> {
    conn.execute(CREATE_PARCELS_TABLE, [])?;

    let mut applied = Vec::new();
    for migration in MIGRATIONS {
        let existing = column_names(conn, migration.table)?;
        if existing.iter().any(|c| c == migration.column) {
            continue;
        }
        conn.execute(&migration.alter_sql(), [])?;
        tracing::info!("Added column {}.{}", migration.table, migration.column);
        applied.push(migration.column);
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY_TABLE: &str = r#"
        CREATE TABLE parcels (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            code TEXT NOT NULL,
            description TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            status TEXT NOT NULL,
            exit_method TEXT
        )
    "#;

    #[test]
    fn test_fresh_schema_needs_no_migration() {
        let conn = Connection::open_in_memory().unwrap();
        let applied = ensure_schema(&conn).unwrap();
        assert!(applied.is_empty());

        let cols = column_names(&conn, PARCELS_TABLE).unwrap();
        assert_eq!(
            cols,
            vec!["id", "code", "description", "quantity", "status", "exit_method", "entry_date", "entry_time"]
        );
    }

    #[test]
    fn test_legacy_table_gets_missing_columns() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute(LEGACY_TABLE, []).unwrap();

        let applied = ensure_schema(&conn).unwrap();
        assert_eq!(applied, vec!["entry_date", "entry_time"]);

        let again = ensure_schema(&conn).unwrap();
        assert!(again.is_empty());
        assert_eq!(column_names(&conn, PARCELS_TABLE).unwrap().len(), 8);
    }

    #[test]
    fn test_partial_legacy_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute(LEGACY_TABLE, []).unwrap();
        conn.execute("ALTER TABLE parcels ADD COLUMN entry_date TEXT", []).unwrap();

        let applied = ensure_schema(&conn).unwrap();
        assert_eq!(applied, vec!["entry_time"]);
    }
}

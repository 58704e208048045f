use chrono::NaiveDate;
use parcelstock::storage::schema;
use parcelstock::{NewParcel, ParcelStore, StockRow};
use rusqlite::{params, Connection};
use tempfile::TempDir;

fn row(status: &str, exit_method: &str) -> StockRow {
    StockRow {
        code: "A1".into(),
        description: "Widget".into(),
        quantity: 5,
        status: status.into(),
        exit_method: exit_method.into(),
        entry_date: "2024-01-01".into(),
        entry_time: "12:00:00".into(),
    }
}

#[test]
fn store_then_retrieve() {
    let dir = TempDir::new().unwrap();
    let store = ParcelStore::open(dir.path().join("stock.db")).unwrap();
    let noon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();

    store.create_at(&NewParcel::new("A1", "Widget", 5), noon).unwrap();
    assert_eq!(store.list_all().unwrap(), vec![row("Stored", "")]);

    store.mark_retrieved("A1", "99").unwrap();
    assert_eq!(store.list_all().unwrap(), vec![row("Retrieved", "99")]);

    store.clear_all().unwrap();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn ensure_schema_twice_keeps_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stock.db");
    let store = ParcelStore::open(&path).unwrap();
    store.create(&NewParcel::new("A1", "Widget", 5)).unwrap();
    let before = store.list_all().unwrap();

    assert!(store.ensure_schema().unwrap().is_empty());
    assert!(ParcelStore::open(&path).unwrap().ensure_schema().unwrap().is_empty());

    let conn = Connection::open(&path).unwrap();
    assert_eq!(schema::column_names(&conn, schema::PARCELS_TABLE).unwrap().len(), 8);
    assert_eq!(store.list_all().unwrap(), before);
}

#[test]
fn legacy_database_is_migrated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute(
            r#"
            CREATE TABLE parcels (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                code TEXT NOT NULL,
                description TEXT NOT NULL,
                quantity INTEGER NOT NULL,
                status TEXT NOT NULL,
                exit_method TEXT
            )
            "#,
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO parcels (code, description, quantity, status, exit_method) VALUES (?1, ?2, ?3, ?4, ?5)",
            params!["OLD", "Crate", 2, "Retrieved", "Uber"],
        )
        .unwrap();
    }

    let store = ParcelStore::new(&path);
    assert_eq!(store.ensure_schema().unwrap(), vec!["entry_date", "entry_time"]);

    let rows = store.list_all().unwrap();
    assert_eq!(
        rows,
        vec![StockRow {
            code: "OLD".into(),
            description: "Crate".into(),
            quantity: 2,
            status: "Retrieved".into(),
            exit_method: "Uber".into(),
            entry_date: String::new(),
            entry_time: String::new(),
        }]
    );

    store.create(&NewParcel::new("NEW", "Box", 1)).unwrap();
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn shared_codes_are_updated_together() {
    let dir = TempDir::new().unwrap();
    let store = ParcelStore::open(dir.path().join("stock.db")).unwrap();
    store.create(&NewParcel::new("A1", "Widget", 5)).unwrap();
    store.create(&NewParcel::new("A1", "Widget", 5)).unwrap();

    assert_eq!(store.mark_retrieved("X", "Uber").unwrap(), 0);
    assert_eq!(store.mark_retrieved("A1", "Carrier").unwrap(), 2);

    for row in store.list_all().unwrap() {
        assert_eq!(row.status, "Retrieved");
        assert_eq!(row.exit_method, "Carrier");
    }
}

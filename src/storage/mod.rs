//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite table:
//! - parcels(id, code, description, quantity, status, exit_method, entry_date, entry_time)

pub mod schema;
pub mod sqlite;

pub use sqlite::{ParcelStore, StockStats};

//! # Parcelstock - Parcel Inventory Log
//!
//! Tracks parcels entering a storage area and leaving it again.
//!
//! Parcelstock provides:
//! - A single SQLite table of parcel records with additive schema migrations
//! - A record store: create, mark retrieved, clear all, list all
//! - Shell-side form validation for the CLI front end

pub mod parcel;
pub mod storage;
pub mod validate;
pub mod config;
pub mod ui;


// Re-exports for convenient access
pub use parcel::{ExitMethod, NewParcel, Parcel, ParcelStatus, StockRow};
pub use storage::{ParcelStore, StockStats};

/// Result type alias for Parcelstock operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Parcelstock operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

//! Parcel types
//!
//! A parcel moves through exactly two states:
//! - `Stored`: received into the storage area
//! - `Retrieved`: left the storage area by one of the exit methods

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a parcel. Transitions only `Stored` -> `Retrieved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParcelStatus {
    Stored,
    Retrieved,
}

impl ParcelStatus {
    /// Get the string representation stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            ParcelStatus::Stored => "Stored",
            ParcelStatus::Retrieved => "Retrieved",
        }
    }
}

impl FromStr for ParcelStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "stored" => Ok(ParcelStatus::Stored),
            "retrieved" => Ok(ParcelStatus::Retrieved),
            _ => Err(Error::InvalidValue(format!("Unknown parcel status: {}", s))),
        }
    }
}

impl std::fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a parcel left the storage area.
///
/// This is a convention of the front end; the record store accepts any text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExitMethod {
    /// The "99" ride-hailing courier
    NinetyNine,
    Uber,
    Lalamove,
    Carrier,
    CustomerPickup,
}

impl ExitMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitMethod::NinetyNine => "99",
            ExitMethod::Uber => "Uber",
            ExitMethod::Lalamove => "Lalamove",
            ExitMethod::Carrier => "Carrier",
            ExitMethod::CustomerPickup => "Customer Pickup",
        }
    }

    /// All exit methods, in the order the front end offers them
    pub fn all() -> &'static [ExitMethod] {
        &[
            ExitMethod::NinetyNine,
            ExitMethod::Uber,
            ExitMethod::Lalamove,
            ExitMethod::Carrier,
            ExitMethod::CustomerPickup,
        ]
    }
}

impl FromStr for ExitMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "99" => Ok(ExitMethod::NinetyNine),
            "uber" => Ok(ExitMethod::Uber),
            "lalamove" => Ok(ExitMethod::Lalamove),
            "carrier" => Ok(ExitMethod::Carrier),
            "customer pickup" | "customer-pickup" | "pickup" => Ok(ExitMethod::CustomerPickup),
            _ => Err(Error::InvalidValue(format!("Unknown exit method: {}", s))),
        }
    }
}

impl std::fmt::Display for ExitMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input for creating a parcel record. Already validated by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParcel {
    pub code: String,
    pub description: String,
    pub quantity: i64,
}

impl NewParcel {
    pub fn new(code: impl Into<String>, description: impl Into<String>, quantity: i64) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            quantity,
        }
    }
}

/// One row of the stock listing.
///
/// Absent exit method, entry date and entry time are always empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRow {
    pub code: String,
    pub description: String,
    pub quantity: i64,
    pub status: String,
    pub exit_method: String,
    pub entry_date: String,
    pub entry_time: String,
}

/// A full parcel record, including its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    pub id: i64,
    pub code: String,
    pub description: String,
    pub quantity: i64,
    pub status: ParcelStatus,
    pub exit_method: Option<String>,
    pub entry_date: Option<String>,
    pub entry_time: Option<String>,
}

impl Parcel {
    pub fn is_stored(&self) -> bool {
        self.status == ParcelStatus::Stored
    }
}

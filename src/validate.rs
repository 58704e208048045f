//! Form validation for the front end.
//!
//! The record store trusts its input; these checks run before it is called.

use crate::parcel::{ExitMethod, NewParcel};
use crate::{Error, Result};

/// Validate the receiving form: code, description and quantity text
pub fn validate_entry(code: &str, description: &str, quantity: &str) -> Result<NewParcel> {
    let (code, description, quantity) = (code.trim(), description.trim(), quantity.trim());
    if code.is_empty() || description.is_empty() || quantity.is_empty() {
        return Err(Error::Validation("all fields are required".to_string()));
    }

    let quantity: i64 = quantity.parse().map_err(|_| {
        Error::Validation(format!("invalid quantity '{}': use digits only", quantity))
    })?;

    Ok(NewParcel::new(code, description, quantity))
}

/// Validate the exit form: parcel code and exit method
pub fn validate_exit(code: &str, method: &str) -> Result<(String, ExitMethod)> {
    let (code, method) = (code.trim(), method.trim());
    if code.is_empty() || method.is_empty() {
        return Err(Error::Validation("parcel code and exit method are required".to_string()));
    }

    let method: ExitMethod = method.parse().map_err(|_| {
        let accepted: Vec<&str> = ExitMethod::all().iter().map(ExitMethod::as_str).collect();
        Error::Validation(format!(
            "unknown exit method '{}' (expected one of: {})",
            method,
            accepted.join(", ")
        ))
    })?;

    Ok((code.to_string(), method))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ok() {
        let parcel = validate_entry(" A1 ", "Widget", "5").unwrap();
        assert_eq!(parcel, NewParcel::new("A1", "Widget", 5));
    }

    #[test]
    fn test_entry_missing_field() {
        assert!(matches!(validate_entry("A1", "", "5"), Err(Error::Validation(_))));
        assert!(matches!(validate_entry("  ", "Widget", "5"), Err(Error::Validation(_))));
        assert!(matches!(validate_entry("A1", "Widget", ""), Err(Error::Validation(_))));
    }

    #[test]
    fn test_entry_quantity_must_be_whole_number() {
        assert!(matches!(validate_entry("A1", "Widget", "2.5"), Err(Error::Validation(_))));
        assert!(matches!(validate_entry("A1", "Widget", "five"), Err(Error::Validation(_))));
        assert_eq!(validate_entry("A1", "Widget", "-3").unwrap().quantity, -3);
    }

    #[test]
    fn test_exit() {
        let (code, method) = validate_exit("A1", "lalamove").unwrap();
        assert_eq!(code, "A1");
        assert_eq!(method, ExitMethod::Lalamove);

        assert!(matches!(validate_exit("", "Uber"), Err(Error::Validation(_))));
        let err = validate_exit("A1", "drone").unwrap_err();
        assert!(err.to_string().contains("Customer Pickup"));
    }
}

// SPDX-License-Identifier: MIT

//! Input validation at the handler boundary.
//!
//! The document store is schema-flexible, so required-field and type checks
//! live here as pure functions, testable without a live store.

use crate::error::AppError;

/// Require a non-empty text field.
pub fn require_text(field: &'static str, value: Option<&str>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(AppError::BadRequest(format!("'{}' is required", field))),
    }
}

/// Coerce a duration field to a positive, finite number of minutes.
///
/// Clients send durations either as a JSON number or as a numeric string.
pub fn coerce_duration(value: Option<&serde_json::Value>) -> Result<f64, AppError> {
    let parsed = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(AppError::BadRequest(
            "'duration' must be a positive number".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_text_accepts_non_empty() {
        assert_eq!(
            require_text("username", Some("fcc_test")).unwrap(),
            "fcc_test"
        );
    }

    #[test]
    fn test_require_text_rejects_missing_or_blank() {
        assert!(require_text("username", None).is_err());
        assert!(require_text("username", Some("")).is_err());
        assert!(require_text("username", Some("   ")).is_err());
    }

    #[test]
    fn test_coerce_duration_from_number() {
        assert_eq!(coerce_duration(Some(&json!(30))).unwrap(), 30.0);
        assert_eq!(coerce_duration(Some(&json!(12.5))).unwrap(), 12.5);
    }

    #[test]
    fn test_coerce_duration_from_string() {
        assert_eq!(coerce_duration(Some(&json!("30"))).unwrap(), 30.0);
        assert_eq!(coerce_duration(Some(&json!(" 45 "))).unwrap(), 45.0);
    }

    #[test]
    fn test_coerce_duration_rejects_non_positive() {
        assert!(coerce_duration(Some(&json!(0))).is_err());
        assert!(coerce_duration(Some(&json!("0"))).is_err());
        assert!(coerce_duration(Some(&json!(-5))).is_err());
        assert!(coerce_duration(Some(&json!("-5"))).is_err());
    }

    #[test]
    fn test_coerce_duration_rejects_non_numeric() {
        assert!(coerce_duration(None).is_err());
        assert!(coerce_duration(Some(&json!("abc"))).is_err());
        assert!(coerce_duration(Some(&json!(""))).is_err());
        assert!(coerce_duration(Some(&json!("NaN"))).is_err());
        assert!(coerce_duration(Some(&json!("inf"))).is_err());
        assert!(coerce_duration(Some(&json!(true))).is_err());
        assert!(coerce_duration(Some(&json!(null))).is_err());
    }
}

//! Exercise model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

/// Exercise record stored in Firestore.
///
/// The document ID is a generated UUID that is never exposed through the
/// API, so it is not carried on the struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Owning user's ID
    pub user_id: String,
    /// What was done
    pub description: String,
    /// Duration in minutes
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    /// Calendar date of the exercise (stored as `YYYY-MM-DD`)
    pub date: NaiveDate,
}

/// Serialize a whole-valued duration as a JSON integer (`30`, not `30.0`).
pub fn serialize_duration<S>(duration: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if duration.fract() == 0.0 && duration.abs() < (i64::MAX as f64) {
        serializer.serialize_i64(*duration as i64)
    } else {
        serializer.serialize_f64(*duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_duration_renders_as_integer() {
        let exercise = Exercise {
            user_id: "u1".to_string(),
            description: "test run".to_string(),
            duration: 30.0,
            date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        };

        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["duration"], serde_json::json!(30));
        assert_eq!(json["date"], "2023-01-15");
    }

    #[test]
    fn test_fractional_duration_keeps_fraction() {
        let exercise = Exercise {
            user_id: "u1".to_string(),
            description: "short walk".to_string(),
            duration: 12.5,
            date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        };

        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["duration"], serde_json::json!(12.5));
    }
}

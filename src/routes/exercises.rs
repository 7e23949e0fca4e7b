// SPDX-License-Identifier: MIT

//! Exercise logging and log retrieval routes.

use crate::error::{AppError, Result};
use crate::models::exercise::{serialize_duration, Exercise};
use crate::time_utils::{format_date_string, parse_date, today};
use crate::validate::{coerce_duration, require_text};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/{user_id}/exercises", post(add_exercise))
        .route("/api/users/{user_id}/logs", get(get_logs))
}

// ─── Exercise Creation ───────────────────────────────────────

/// Request body for logging an exercise.
#[derive(Deserialize)]
pub struct AddExercisePayload {
    pub description: Option<String>,
    /// Accepted as a JSON number or a numeric string.
    pub duration: Option<serde_json::Value>,
    pub date: Option<String>,
}

/// Response for a newly logged exercise: the user's identity combined
/// with the exercise fields.
#[derive(Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

/// Log an exercise against a user.
async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(payload): Json<AddExercisePayload>,
) -> Result<Json<ExerciseResponse>> {
    // Validation order: unknown user wins over a bad body.
    let user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let description = require_text("description", payload.description.as_deref())?;
    let duration = coerce_duration(payload.duration.as_ref())?;

    let date = match payload.date.as_deref().map(str::trim) {
        None | Some("") => today(),
        Some(raw) => parse_date(raw).ok_or_else(|| {
            AppError::BadRequest(format!("'date' is not a valid calendar date: {}", raw))
        })?,
    };

    let exercise = Exercise {
        user_id: user.id.clone(),
        description,
        duration,
        date,
    };
    state.db.create_exercise(&exercise).await?;

    tracing::debug!(user_id = %user.id, date = %exercise.date, "Exercise logged");

    Ok(Json(ExerciseResponse {
        id: user.id,
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: format_date_string(exercise.date),
    }))
}

// ─── Log Retrieval ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct LogsQuery {
    /// Inclusive lower date bound
    pub from: Option<String>,
    /// Inclusive upper date bound
    pub to: Option<String>,
    /// Maximum number of log entries to return
    pub limit: Option<String>,
}

/// One entry in a user's exercise log.
#[derive(Serialize)]
pub struct LogEntry {
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

#[derive(Serialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

fn parse_date_param(field: &'static str, raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_date(raw).map(Some).ok_or_else(|| {
            AppError::BadRequest(format!("'{}' is not a valid calendar date: {}", field, raw))
        }),
    }
}

fn parse_limit(raw: Option<&str>) -> Result<Option<u32>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if n >= 1 => Ok(Some(n)),
            _ => Err(AppError::BadRequest(format!(
                "'limit' must be a positive integer: {}",
                raw
            ))),
        },
    }
}

/// Retrieve a user's exercise log with optional date-range and count filters.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<LogsQuery>,
) -> Result<Json<LogResponse>> {
    let user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let from = parse_date_param("from", params.from.as_deref())?;
    let to = parse_date_param("to", params.to.as_deref())?;
    let limit = parse_limit(params.limit.as_deref())?;

    tracing::debug!(
        user_id = %user.id,
        from = ?from,
        to = ?to,
        limit = ?limit,
        "Fetching exercise log"
    );

    let exercises = state
        .db
        .get_exercises_for_user(&user.id, from, to, limit)
        .await?;

    let log: Vec<LogEntry> = exercises
        .into_iter()
        .map(|exercise| LogEntry {
            description: exercise.description,
            duration: exercise.duration,
            date: format_date_string(exercise.date),
        })
        .collect();

    Ok(Json(LogResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None).unwrap(), None);
        assert_eq!(parse_limit(Some("")).unwrap(), None);
        assert_eq!(parse_limit(Some("5")).unwrap(), Some(5));

        assert!(parse_limit(Some("0")).is_err());
        assert!(parse_limit(Some("-1")).is_err());
        assert!(parse_limit(Some("abc")).is_err());
        assert!(parse_limit(Some("2.5")).is_err());
    }

    #[test]
    fn test_parse_date_param() {
        assert_eq!(parse_date_param("from", None).unwrap(), None);
        assert_eq!(parse_date_param("from", Some("")).unwrap(), None);
        assert_eq!(
            parse_date_param("from", Some("2023-01-15")).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
        assert!(parse_date_param("from", Some("nonsense")).is_err());
    }
}

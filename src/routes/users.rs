// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User and exercise-log API routes.

use crate::error::{AppError, Result};
use crate::extract::JsonOrForm;
use crate::models::Exercise;
use crate::time_utils::{format_date_string, parse_calendar_date, today_utc};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// User and exercise routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/{_id}/exercises", post(add_exercise))
        .route("/api/users/{_id}/logs", get(get_logs))
}

// ─── Request Parsing ─────────────────────────────────────────

/// A numeric body field that clients send either as a JSON number or as
/// a string ("30"). Form bodies always produce the string variant.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Resolve the exercise date: absent or empty means today.
fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        None => Ok(today_utc()),
        Some(raw) if raw.trim().is_empty() => Ok(today_utc()),
        Some(raw) => parse_calendar_date(raw).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "'date' must be a calendar date in YYYY-MM-DD form, got '{}'",
                raw
            ))
        }),
    }
}

/// Parse an optional date-range bound from the query string.
fn parse_query_date(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    value
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| {
            parse_calendar_date(raw).ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "'{}' must be a calendar date in YYYY-MM-DD form, got '{}'",
                    name, raw
                ))
            })
        })
        .transpose()
}

/// Parse the log limit leniently: absent or non-numeric means 0, which
/// the persistence layer treats as unbounded.
fn parse_limit(value: Option<&str>) -> u32 {
    value.and_then(|raw| raw.trim().parse().ok()).unwrap_or(0)
}

// ─── Create / List Users ─────────────────────────────────────

#[derive(Deserialize)]
struct CreateUserRequest {
    /// Stored verbatim: empty strings and duplicates are accepted.
    username: String,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Create a new user.
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonOrForm(payload): JsonOrForm<CreateUserRequest>,
) -> Result<Json<UserResponse>> {
    tracing::debug!(username = %payload.username, "Creating user");

    let user = state.db.insert_user(&payload.username).await?;

    let id = user
        .id
        .ok_or_else(|| AppError::Database("insert returned no document ID".to_string()))?;

    Ok(Json(UserResponse {
        username: user.username,
        id,
    }))
}

/// List all users.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.db.list_users().await?;

    let users = users
        .into_iter()
        .map(|u| UserResponse {
            username: u.username,
            id: u.id.unwrap_or_default(),
        })
        .collect();

    Ok(Json(users))
}

// ─── Add Exercise ────────────────────────────────────────────

#[derive(Deserialize)]
struct AddExerciseRequest {
    duration: NumberOrString,
    description: String,
    #[serde(default)]
    date: Option<String>,
}

#[derive(Serialize)]
pub struct ExerciseResponse {
    /// The *user's* document ID, echoing the path parameter.
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    /// Human-readable date string, e.g. "Mon Jan 01 2024"
    pub date: String,
    pub duration: f64,
    pub description: String,
}

/// Log an exercise against a user.
async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    JsonOrForm(payload): JsonOrForm<AddExerciseRequest>,
) -> Result<Json<ExerciseResponse>> {
    // Validate inputs before touching the store.
    let date = resolve_date(payload.date.as_deref())?;
    let duration = payload
        .duration
        .as_f64()
        .ok_or_else(|| AppError::InvalidInput("'duration' must be a number".to_string()))?;

    let user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    tracing::debug!(
        user_id = %user_id,
        duration,
        date = %date,
        "Adding exercise"
    );

    let exercise = Exercise {
        id: None,
        user_id: user_id.clone(),
        date,
        duration,
        description: payload.description,
    };
    let stored = state.db.insert_exercise(&exercise).await?;

    Ok(Json(ExerciseResponse {
        id: user_id,
        username: user.username,
        date: format_date_string(stored.date),
        duration: stored.duration,
        description: stored.description,
    }))
}

// ─── Exercise Log ────────────────────────────────────────────

#[derive(Deserialize)]
struct LogsQuery {
    from: Option<String>,
    to: Option<String>,
    /// Parsed leniently; kept as a raw string so a non-numeric value
    /// falls back to "no limit" instead of rejecting the request.
    limit: Option<String>,
}

#[derive(Serialize)]
pub struct LogEntry {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub user_id: String,
    /// Human-readable date string, e.g. "Mon Jan 01 2024"
    pub date: String,
    pub duration: f64,
    pub description: String,
}

#[derive(Serialize)]
pub struct LogsResponse {
    pub username: String,
    /// Length of the returned log (after limiting), not the total stored.
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntry>,
}

/// Get a user's exercise log, optionally bounded and limited.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<LogsQuery>,
) -> Result<Json<LogsResponse>> {
    let from = parse_query_date("from", params.from.as_deref())?;
    let to = parse_query_date("to", params.to.as_deref())?;
    let limit = parse_limit(params.limit.as_deref());

    let user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    tracing::debug!(
        user_id = %user_id,
        from = ?from,
        to = ?to,
        limit,
        "Fetching exercise log"
    );

    let exercises = state
        .db
        .get_exercises_for_user(&user_id, from, to, limit)
        .await?;

    let log: Vec<LogEntry> = exercises
        .into_iter()
        .map(|e| LogEntry {
            id: e.id,
            user_id: e.user_id,
            date: format_date_string(e.date),
            duration: e.duration,
            description: e.description,
        })
        .collect();

    Ok(Json(LogsResponse {
        username: user.username,
        count: log.len(),
        id: user_id,
        log,
    }))
}

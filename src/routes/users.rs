// SPDX-License-Identifier: MIT

//! User creation and listing routes.

use crate::error::Result;
use crate::models::User;
use crate::validate::require_text;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", post(create_user).get(list_users))
}

/// Request body for user creation.
#[derive(Deserialize)]
pub struct CreateUserPayload {
    pub username: Option<String>,
}

/// User as returned by the API.
#[derive(Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Create a new user.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<Json<UserResponse>> {
    let username = require_text("username", payload.username.as_deref())?;

    let user = state.db.create_user(username).await?;
    tracing::debug!(user_id = %user.id, "User created");

    Ok(Json(user.into()))
}

/// List all users.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.db.list_users().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

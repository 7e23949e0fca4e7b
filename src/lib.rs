// SPDX-License-Identifier: MIT

//! Exercise Tracker: a small REST API for logging exercises per user.
//!
//! This crate provides the backend API for creating users, recording
//! exercises against them, and retrieving a user's exercise log with
//! optional date-range and count filters.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod time_utils;
pub mod validate;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}

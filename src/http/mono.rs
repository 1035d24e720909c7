//! Single-value routes under `/api/mono`.
//!
//! Each handler resolves exactly one `Mono` from the user service.

use std::convert::Infallible;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::http::response::{single_json, single_text, ApiError};
use crate::http::server::AppState;
use crate::model::User;
use crate::reactive::Mono;
use crate::service::UserError;

/// Body returned by `user-email` when the lookup yields nothing.
pub const EMAIL_FALLBACK: &str = "User not found";
/// Body returned by `user-summary` when the lookup fails.
pub const SUMMARY_FALLBACK: &str = "Error fetching user";

/// Single-value routes, mounted under `/api/mono`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user/{id}", get(get_user_by_id))
        .route("/user-immediate/{id}", get(get_user_by_id_immediate))
        .route("/user-validated/{id}", get(get_user_by_id_validated))
        .route("/user-email/{id}", get(get_user_email))
        .route("/user-summary/{id}", get(get_user_summary))
}

/// Delayed lookup.
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    single_json(state.users.get_user_by_id(id)).await
}

pub async fn get_user_by_id_immediate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    single_json(state.users.get_user_by_id_immediate(id)).await
}

/// Fails with a server error for negative ids.
pub async fn get_user_by_id_validated(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    single_json(state.users.get_user_by_id_with_error(id)).await
}

pub async fn get_user_email(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, ApiError> {
    single_text(email_of(state.users.get_user_by_id(id))).await
}

pub async fn get_user_summary(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, ApiError> {
    single_text(summary_of(state.users.get_user_by_id(id))).await
}

/// The user's email, or [`EMAIL_FALLBACK`] when the lookup yields nothing.
pub fn email_of(user: Mono<User, UserError>) -> Mono<String, UserError> {
    user.map(|user| user.email)
        .default_if_empty(EMAIL_FALLBACK.to_string())
}

/// The user's summary line, or [`SUMMARY_FALLBACK`] when the lookup fails.
pub fn summary_of(user: Mono<User, UserError>) -> Mono<String, Infallible> {
    user.map(|user| user.summary())
        .on_error_return(SUMMARY_FALLBACK.to_string())
}

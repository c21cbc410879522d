//! User profile REST API handlers

use crate::{ApiError, ApiResult, AppState, SessionUser};

use ei_core::{Tier, UserRecord};
use ei_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State, http::HeaderMap};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct VerifyUserRequest {
    pub email: String,
}

/// Either a rename (`userId` + `name`) or a password change (`password`).
/// Both act on the session user only.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TierResponse {
    pub tier: Tier,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/user/verify
///
/// Look up the canonical record for a cached email.
pub async fn verify_user(
    State(state): State<AppState>,
    Json(request): Json<VerifyUserRequest>,
) -> ApiResult<Json<UserRecord>> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("email is required", "email"));
    }

    let repo = UserRepository::new(state.pool.clone());
    let account = repo
        .find_by_email(email)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No user with email {}", email)))?;

    Ok(Json(account.record))
}

/// POST /api/user/update
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserRecord>> {
    let repo = UserRepository::new(state.pool.clone());

    if let Some(password) = request.password {
        let session = SessionUser::from_headers(&headers, &state)?;
        return update_password(&repo, session.user_id(), password).await;
    }

    match (request.user_id, request.name) {
        (Some(user_id), Some(name)) => {
            let session = SessionUser::from_headers(&headers, &state)?;
            if session.user_id() != user_id {
                log::warn!(
                    "User {} attempted to rename user {}",
                    session.user_id(),
                    user_id
                );
                return Err(ApiError::forbidden("Cannot update another user"));
            }
            rename(&repo, &user_id, &name).await
        }
        (None, Some(_)) => Err(ApiError::validation("userId is required", "userId")),
        _ => Err(ApiError::BadRequest {
            message: "Nothing to update: expected name or password".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

async fn rename(repo: &UserRepository, user_id: &str, name: &str) -> ApiResult<Json<UserRecord>> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("name cannot be empty", "name"));
    }

    let account = repo
        .update_name(user_id, name)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))?;

    log::info!("User {} renamed", user_id);
    Ok(Json(account.record))
}

async fn update_password(
    repo: &UserRepository,
    user_id: &str,
    password: String,
) -> ApiResult<Json<UserRecord>> {
    if password.is_empty() {
        return Err(ApiError::validation("password cannot be empty", "password"));
    }

    let hash = tokio::task::spawn_blocking(move || ei_auth::hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal {
            message: format!("Password hashing task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })??;

    if !repo.update_password_hash(user_id, &hash).await? {
        return Err(ApiError::not_found(format!("User {} not found", user_id)));
    }

    let account = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))?;

    log::info!("Password updated for user {}", user_id);
    Ok(Json(account.record))
}

/// GET /api/GetUserStatus
///
/// Current tier of the session user.
pub async fn get_user_status(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<TierResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let account = repo
        .find_by_id(session.user_id())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", session.user_id())))?;

    Ok(Json(TierResponse {
        tier: account.record.tier,
    }))
}

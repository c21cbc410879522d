//! Axum extractor for the authenticated caller

use crate::{ApiError, AppState};

use ei_auth::{Session, bearer_token};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

pub const USER_ID_HEADER: &str = "X-User-Id";

/// The session user making the request.
///
/// With auth enabled the `Authorization: Bearer <jwt>` header is validated
/// and `sub` identifies the user. With auth disabled the `X-User-Id` header
/// is trusted as-is.
pub struct SessionUser(pub Session);

impl SessionUser {
    pub fn from_headers(headers: &HeaderMap, state: &AppState) -> Result<Self, ApiError> {
        match &state.jwt_validator {
            Some(validator) => {
                let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
                let token = bearer_token(header)?;
                let claims = validator.validate(token)?;
                Ok(SessionUser(Session::from_claims(claims)))
            }
            None => {
                let user_id = headers
                    .get(USER_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| ApiError::unauthorized("Missing X-User-Id header"))?;

                log::debug!("Using user ID from X-User-Id header: {}", user_id);
                Ok(SessionUser(Session::trusted(user_id)))
            }
        }
    }

    pub fn user_id(&self) -> &str {
        &self.0.user_id
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = Self::from_headers(&parts.headers, state);
        async move { result }
    }
}

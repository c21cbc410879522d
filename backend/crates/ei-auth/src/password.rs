use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Hash a password using bcrypt
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    hash_password_with_cost(password, bcrypt::DEFAULT_COST)
}

#[track_caller]
pub fn hash_password_with_cost(password: &str, cost: u32) -> AuthErrorResult<String> {
    bcrypt::hash(password, cost).map_err(|source| AuthError::PasswordHash {
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub fn verify_password(password: &str, hash: &str) -> AuthErrorResult<bool> {
    bcrypt::verify(password, hash).map_err(|source| AuthError::PasswordHash {
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

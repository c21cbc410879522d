use crate::{
    ApiError, AppState, CancellationReceipt, PaymentProvider, PaymentResult, SessionUser,
};

use ei_auth::{Claims, JwtValidator};
use ei_config::ApiConfig;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::SqlitePool;

const SECRET: &[u8] = b"session-user-test-secret-32-bytes";

struct NoPayments;

#[async_trait]
impl PaymentProvider for NoPayments {
    async fn cancel_at_period_end(&self, _: &str) -> PaymentResult<CancellationReceipt> {
        unreachable!("session extraction never touches payments")
    }
}

fn state(jwt: bool) -> AppState {
    AppState {
        pool: SqlitePool::connect_lazy("sqlite::memory:").unwrap(),
        jwt_validator: jwt.then(|| Arc::new(JwtValidator::with_hs256(SECRET))),
        payments: Arc::new(NoPayments),
        api_config: ApiConfig::default(),
    }
}

fn token(sub: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    encode(
        &Header::default(),
        &Claims {
            sub: sub.to_string(),
            email: Some("user@example.com".to_string()),
            exp: now + 600,
            iat: now,
        },
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

fn headers(pairs: &[(&'static str, String)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, HeaderValue::from_str(value).unwrap());
    }
    map
}

#[tokio::test]
async fn given_auth_disabled_and_user_header_then_session_is_trusted() {
    let session =
        SessionUser::from_headers(&headers(&[("x-user-id", " user-1 ".into())]), &state(false))
            .unwrap();

    assert_eq!(session.user_id(), "user-1");
    assert_eq!(session.0.email, None);
}

#[tokio::test]
async fn given_auth_disabled_and_no_header_then_unauthorized() {
    let result = SessionUser::from_headers(&HeaderMap::new(), &state(false));

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_auth_enabled_and_valid_token_then_subject_is_user() {
    let map = headers(&[("authorization", format!("Bearer {}", token("user-42")))]);

    let session = SessionUser::from_headers(&map, &state(true)).unwrap();

    assert_eq!(session.user_id(), "user-42");
    assert_eq!(session.0.email.as_deref(), Some("user@example.com"));
}

#[tokio::test]
async fn given_auth_enabled_and_garbage_token_then_unauthorized() {
    let mut map = HeaderMap::new();
    map.insert(AUTHORIZATION, HeaderValue::from_static("Bearer not.a.jwt"));

    let result = SessionUser::from_headers(&map, &state(true));

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

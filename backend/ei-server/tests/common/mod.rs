#![allow(dead_code)]

//! Test infrastructure for ei-server API tests

use ei_server::{AppState, CancellationReceipt, PaymentError, PaymentProvider, PaymentResult};

use ei_config::ApiConfig;
use ei_core::{Repo, StatusChange, Tier, UserAccount};
use ei_db::{StatusChangeRepository, UserRepository};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Payment provider double: records every call, answers with a fixed period end
#[derive(Default)]
pub struct RecordingPayments {
    pub period_end: i64,
    pub calls: Mutex<Vec<String>>,
}

impl RecordingPayments {
    pub fn ending_at(period_end: i64) -> Arc<Self> {
        Arc::new(Self {
            period_end,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentProvider for RecordingPayments {
    async fn cancel_at_period_end(&self, subscription_id: &str) -> PaymentResult<CancellationReceipt> {
        self.calls.lock().unwrap().push(subscription_id.to_string());
        if self.period_end <= 0 {
            return Err(PaymentError::not_configured("test provider has no period end"));
        }
        Ok(CancellationReceipt {
            subscription_id: subscription_id.to_string(),
            current_period_end: self.period_end,
        })
    }
}

/// In-memory SQLite with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/ei-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_payments(RecordingPayments::ending_at(1_700_000_000)).await
}

pub async fn create_test_app_state_with_payments(payments: Arc<dyn PaymentProvider>) -> AppState {
    AppState {
        pool: create_test_pool().await,
        jwt_validator: None,
        payments,
        api_config: ApiConfig::default(),
    }
}

/// Insert a user; `subscription_id` makes them Premium
pub async fn create_test_user(
    pool: &SqlitePool,
    email: &str,
    subscription_id: Option<&str>,
) -> UserAccount {
    let repo = UserRepository::new(pool.clone());
    let account = UserAccount::new("Test User".to_string(), email.to_string());
    repo.create(&account, None)
        .await
        .expect("Failed to create test user");

    if let Some(subscription_id) = subscription_id {
        repo.set_subscription(account.id(), Tier::Premium, Some(subscription_id))
            .await
            .expect("Failed to set subscription");
    }

    repo.find_by_id(account.id())
        .await
        .expect("Failed to reload test user")
        .expect("Test user missing")
}

pub async fn create_status_change(
    pool: &SqlitePool,
    repo: Repo,
    eip: &str,
    to_status: &str,
    (year, month, day): (i32, u32, u32),
    category: &str,
) -> StatusChange {
    let change = StatusChange::new(
        eip,
        "Draft",
        to_status,
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
        format!("Proposal {}", eip),
        category,
    );
    StatusChangeRepository::new(pool.clone())
        .insert(repo, &change)
        .await
        .expect("Failed to insert status change");
    change
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn with_user(mut request: Request<Body>, user_id: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert("x-user-id", user_id.parse().unwrap());
    request
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

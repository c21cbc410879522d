use crate::{
    CancelSubscriptionResponse, ClientError, ClientResult, DownloadCountResponse,
    UserStatusResponse,
};

use ei_core::{FinalStatusByYear, StatusAggregation, UserPatch};

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the ei-server REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    pub user_id: Option<String>,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `user_id` - Optional user ID sent as `X-User-Id` (servers with auth disabled)
    pub fn new(base_url: &str, user_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.map(String::from),
            token: None,
            client: ReqwestClient::new(),
        }
    }

    /// Attach a session token sent as `Authorization: Bearer`
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }
        if let Some(ref user_id) = self.user_id {
            req = req.header("X-User-Id", user_id);
        }

        req
    }

    /// Send, map non-2xx to `ClientError::Api`, decode the body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(api_error(status, &bytes));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send and map non-2xx to `ClientError::Api`; any 2xx body is ignored
    async fn execute_empty(&self, req: reqwest::RequestBuilder) -> ClientResult<()> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let bytes = response.bytes().await?;
            return Err(api_error(status, &bytes));
        }

        Ok(())
    }

    // =========================================================================
    // Account
    // =========================================================================

    /// POST /api/user/verify
    pub async fn verify_user(&self, email: &str) -> ClientResult<UserPatch> {
        #[derive(Serialize)]
        struct VerifyRequest<'a> {
            email: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/user/verify")
            .json(&VerifyRequest { email });
        self.execute(req).await
    }

    /// GET /api/GetUserStatus
    pub async fn get_user_status(&self) -> ClientResult<UserStatusResponse> {
        let req = self.request(Method::GET, "/api/GetUserStatus");
        self.execute(req).await
    }

    /// POST /api/user/update with `{userId, name}`
    pub async fn update_name(&self, user_id: &str, name: &str) -> ClientResult<UserPatch> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct RenameRequest<'a> {
            user_id: &'a str,
            name: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/user/update")
            .json(&RenameRequest { user_id, name });
        self.execute(req).await
    }

    /// POST /api/user/update with `{password}`. Only the status matters.
    pub async fn update_password(&self, password: &str) -> ClientResult<()> {
        #[derive(Serialize)]
        struct PasswordRequest<'a> {
            password: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/user/update")
            .json(&PasswordRequest { password });
        self.execute_empty(req).await
    }

    /// POST /api/stripe/cancel-subscription
    pub async fn cancel_subscription(&self) -> ClientResult<CancelSubscriptionResponse> {
        let req = self.request(Method::POST, "/api/stripe/cancel-subscription");
        self.execute(req).await
    }

    // =========================================================================
    // Chart data
    // =========================================================================

    /// GET /api/new/graphsv3
    pub async fn get_status_changes(&self) -> ClientResult<StatusAggregation> {
        let req = self.request(Method::GET, "/api/new/graphsv3");
        self.execute(req).await
    }

    /// GET /api/new/final-status-by-year
    pub async fn get_final_status_by_year(&self) -> ClientResult<FinalStatusByYear> {
        let req = self.request(Method::GET, "/api/new/final-status-by-year");
        self.execute(req).await
    }

    /// POST /api/DownloadCounter
    pub async fn increment_download_counter(&self) -> ClientResult<DownloadCountResponse> {
        let req = self.request(Method::POST, "/api/DownloadCounter");
        self.execute(req).await
    }
}

/// Error bodies come as `{"error": {"code", "message"}}`, `{"error": "..."}`
/// or plain text (405).
#[track_caller]
fn api_error(status: StatusCode, body: &[u8]) -> ClientError {
    let parsed: Option<Value> = serde_json::from_slice(body).ok();
    let error = parsed.as_ref().and_then(|v| v.get("error"));

    let (code, message) = match error {
        Some(Value::Object(fields)) => (
            fields
                .get("code")
                .and_then(Value::as_str)
                .unwrap_or("UNKNOWN")
                .to_string(),
            fields
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string(),
        ),
        Some(Value::String(message)) => ("UNKNOWN".to_string(), message.clone()),
        _ => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            let message = if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            } else {
                text
            };
            ("HTTP_ERROR".to_string(), message)
        }
    };

    ClientError::api_error(status.as_u16(), code, message)
}

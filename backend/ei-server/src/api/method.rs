//! Explicit 405 responses naming the allowed method

use axum::{
    http::{HeaderValue, Method, StatusCode, header::ALLOW},
    response::{IntoResponse, Response},
};

fn method_not_allowed(method: &Method, allow: &'static str) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(ALLOW, HeaderValue::from_static(allow))],
        format!("Method {} not allowed", method),
    )
        .into_response()
}

/// Fallback for GET-only routes
pub async fn get_only(method: Method) -> Response {
    method_not_allowed(&method, "GET")
}

/// Fallback for POST-only routes
pub async fn post_only(method: Method) -> Response {
    method_not_allowed(&method, "POST")
}

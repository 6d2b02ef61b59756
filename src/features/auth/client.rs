//! Client wrappers for the SmartStudy auth endpoints. These helpers own the
//! endpoint paths so flows never build URLs themselves. Payloads contain
//! plaintext passwords and must never be logged.

use crate::{
    app_lib::{ApiClient, AppError},
    features::auth::types::{LoginRequest, RegisterRequest},
};
use serde_json::Value;

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";

/// Creates an account. The success body is arbitrary and returned as is.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<Value, AppError> {
    client.post_json(REGISTER_PATH, request).await
}

/// Submits credentials and returns the raw response body, which should
/// carry a `user` object.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<Value, AppError> {
    client.post_json(LOGIN_PATH, request).await
}

//! HTTP client for the SmartStudy JSON API with uniform error handling. Every
//! flow goes through one [`ApiClient`] so request setup and failure mapping
//! stay in one place. There is no retry or timeout policy beyond the
//! platform default. Request and response bodies may carry passwords, so
//! they are never logged.

use super::errors::AppError;
use reqwest::{Client, Method, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Stateless transport bound to the configured backend origin. Cloning is
/// cheap and clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for an absolute `http`/`https` base URL.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the base URL cannot be parsed or uses
    /// another scheme.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = base_url.trim();
        let parsed = Url::parse(base_url)
            .map_err(|err| AppError::Config(format!("Invalid API base URL: {err}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AppError::Config(format!(
                    "Unsupported API base URL scheme: {scheme}"
                )));
            }
        }

        Ok(Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a request to `path` (relative to the base URL) with an optional
    /// JSON body and returns the parsed response body.
    ///
    /// # Errors
    /// `AppError::Http` for non-2xx responses, carrying the backend's
    /// `detail` string when present. `AppError::Network` when the backend
    /// cannot be reached.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, AppError> {
        let url = build_url_with_base(&self.base_url, path);
        debug!(method = %method, path, "sending request");

        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| {
            warn!(method = %method, path, "request did not reach the server");
            map_request_error(&err)
        })?;

        handle_response(response, &method, path).await
    }

    /// Posts a serializable body and decodes the response into `T`.
    ///
    /// # Errors
    /// Same as [`ApiClient::send`], plus `AppError::Serialization` and
    /// `AppError::Parse` for encoding and decoding failures.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let payload = serde_json::to_value(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let value = self.send(Method::POST, path, Some(&payload)).await?;
        serde_json::from_value(value)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: &reqwest::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Parses 2xx bodies and turns everything else into `AppError::Http`.
async fn handle_response(
    response: Response,
    method: &Method,
    path: &str,
) -> Result<Value, AppError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|err| AppError::Network(format!("Failed to read response: {err}")))?;

    if status.is_success() {
        debug!(method = %method, path, status = status.as_u16(), "request succeeded");
        Ok(parse_success_body(&text))
    } else {
        warn!(method = %method, path, status = status.as_u16(), "request failed");
        Err(AppError::Http {
            status: status.as_u16(),
            detail: error_detail(&text),
        })
    }
}

/// Success bodies are arbitrary: empty means `null`, and text that is not
/// JSON is passed through as a JSON string.
fn parse_success_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Extracts `{"detail": "..."}` from an error body. Non-string details
/// (such as validation error lists) are not surfaced.
fn error_detail(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    let detail = value.get("detail")?.as_str()?.trim();
    if detail.is_empty() {
        None
    } else {
        Some(detail.to_string())
    }
}

//! Login flow: collects credentials, submits them and, on success, persists
//! the returned user as the session record before handing navigation to the
//! router.
//!
//! Flow Overview: `Idle` → `Submitting` on submit. Success tears the flow
//! down with a navigation to the dashboard; any failure lands in
//! `Failed("Invalid email or password")` and keeps the email for a retry.

use crate::{
    app_lib::ApiClient,
    features::auth::{
        client,
        errors::AuthError,
        session::SessionStore,
        types::{LoginRequest, SessionRecord},
    },
    routes::paths,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

/// Transient login form. Never persisted.
#[derive(Debug)]
pub struct LoginFlow {
    email: String,
    password: SecretString,
    status: LoginStatus,
}

/// What the page does after a login attempt resolves.
#[derive(Debug)]
pub enum LoginStep {
    Navigate(&'static str),
    Stay(LoginFlow),
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: empty_secret(),
            status: LoginStatus::Idle,
        }
    }
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_password(self, password: impl Into<String>) -> Self {
        Self {
            password: SecretString::from(password.into()),
            ..self
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn has_password(&self) -> bool {
        !self.password.expose_secret().is_empty()
    }

    pub fn status(&self) -> &LoginStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == LoginStatus::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoginStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Moves the credentials into a request. The form keeps the email and
    /// drops the password.
    #[must_use]
    pub fn submit(self) -> (Self, LoginRequest) {
        let request = LoginRequest {
            email: self.email.clone(),
            password: self.password,
        };
        let flow = Self {
            email: self.email,
            password: empty_secret(),
            status: LoginStatus::Submitting,
        };
        (flow, request)
    }

    pub fn resolve(self, result: &Result<SessionRecord, AuthError>) -> LoginStep {
        match result {
            Ok(_) => LoginStep::Navigate(paths::DASHBOARD),
            Err(err) => LoginStep::Stay(Self {
                password: empty_secret(),
                status: LoginStatus::Failed(err.login_message().to_string()),
                ..self
            }),
        }
    }

    /// Location of the registration form. Following it has no side effects.
    pub fn register_link() -> &'static str {
        paths::REGISTER
    }
}

/// Submits credentials and writes the returned user to `store`. The record
/// is persisted before this returns, so callers may navigate to the
/// dashboard as soon as it resolves.
///
/// # Errors
/// `AuthenticationRejected` when the backend declines, `TransportFailure`
/// for network errors, a response without a `user` object, or a storage
/// failure. The store is untouched on every error.
pub async fn login(
    api: &ApiClient,
    store: &dyn SessionStore,
    request: &LoginRequest,
) -> Result<SessionRecord, AuthError> {
    let body = client::login(api, request).await.map_err(|err| {
        let err = AuthError::from_login(err);
        info!(reason = %err, "login failed");
        err
    })?;

    let record = SessionRecord::from_login_response(&body).ok_or_else(|| {
        info!("login response did not include a user");
        AuthError::TransportFailure("Login response did not include a user.".to_string())
    })?;

    store
        .set(&record)
        .map_err(|err| AuthError::TransportFailure(err.to_string()))?;

    info!(fields = record.fields().len(), "session established");
    Ok(record)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{LoginFlow, LoginStatus, LoginStep, login};
    use crate::{
        app_lib::ApiClient,
        features::auth::{
            errors::{AuthError, LOGIN_FAILED_MESSAGE},
            session::{MemorySessionStore, SessionStore},
            types::{LoginRequest, SessionRecord},
        },
        routes::paths,
    };
    use anyhow::{Result, bail};
    use secrecy::ExposeSecret;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn credentials() -> LoginRequest {
        let (_, request) = LoginFlow::new()
            .with_email("a@b.com")
            .with_password("x")
            .submit();
        request
    }

    async fn respond_with(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn submit_moves_to_submitting_and_drops_the_password() {
        let flow = LoginFlow::new().with_email("a@b.com").with_password("x");
        assert_eq!(flow.status(), &LoginStatus::Idle);

        let (flow, request) = flow.submit();

        assert!(flow.is_submitting());
        assert_eq!(flow.email(), "a@b.com");
        assert!(!flow.has_password());
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.password.expose_secret(), "x");
    }

    #[test]
    fn failure_keeps_email_and_collapses_message() {
        let (flow, _) = LoginFlow::new()
            .with_email("a@b.com")
            .with_password("x")
            .submit();

        let LoginStep::Stay(flow) = flow.resolve(&Err(AuthError::AuthenticationRejected)) else {
            panic!("expected the flow to stay on the form");
        };

        assert_eq!(flow.error(), Some(LOGIN_FAILED_MESSAGE));
        assert_eq!(flow.email(), "a@b.com");
        assert!(!flow.has_password());
    }

    #[test]
    fn success_navigates_to_dashboard() {
        let (flow, _) = LoginFlow::new().with_email("a@b.com").submit();
        let step = flow.resolve(&Ok(SessionRecord::default()));
        assert!(matches!(step, LoginStep::Navigate(target) if target == paths::DASHBOARD));
    }

    #[test]
    fn register_link_points_at_registration() {
        assert_eq!(LoginFlow::register_link(), paths::REGISTER);
    }

    #[tokio::test]
    async fn login_persists_the_user_verbatim() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({ "email": "a@b.com", "password": "x" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Login successful",
                "user": {
                    "username": "alice",
                    "role": "student",
                    "created_at": "2024-01-01"
                }
            })))
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri())?;
        let store = MemorySessionStore::new();
        let record = login(&api, &store, &credentials()).await?;

        let stored: serde_json::Value = serde_json::from_str(&store.raw().unwrap())?;
        assert_eq!(
            stored,
            json!({ "username": "alice", "role": "student", "created_at": "2024-01-01" })
        );
        assert_eq!(store.get(), Some(record));
        Ok(())
    }

    #[tokio::test]
    async fn login_writes_a_user_without_role() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "username": "bob", "created_at": "2024-03-03" }
        })))
        .await;

        let api = ApiClient::new(&server.uri())?;
        let store = MemorySessionStore::new();
        login(&api, &store, &credentials()).await?;

        let Some(record) = store.get() else {
            bail!("expected a session record");
        };
        assert_eq!(record.username(), "bob");
        assert_eq!(record.role(), "");
        assert!(!record.fields().contains_key("role"));
        Ok(())
    }

    #[tokio::test]
    async fn login_stores_unusual_user_shapes_unchanged() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let users = [
            json!({ "role": "student", "created_at": "2024-01-01" }),
            json!({ "username": "alice", "role": null, "created_at": "2024-01-01" }),
            json!({ "username": "alice", "role": "student", "created_at": 1704067200 }),
        ];

        for user in users {
            let server = respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Login successful",
                "user": user.clone()
            })))
            .await;
            let api = ApiClient::new(&server.uri())?;
            let store = MemorySessionStore::new();

            let (flow, request) = LoginFlow::new()
                .with_email("a@b.com")
                .with_password("x")
                .submit();
            let result = login(&api, &store, &request).await;

            let LoginStep::Navigate(target) = flow.resolve(&result) else {
                bail!("expected {user} to sign the user in");
            };
            assert_eq!(target, paths::DASHBOARD);
            let stored: serde_json::Value = serde_json::from_str(&store.raw().unwrap())?;
            assert_eq!(stored, user);
        }
        Ok(())
    }

    #[tokio::test]
    async fn every_failure_collapses_and_leaves_the_store_alone() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let templates = [
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid email or password" })),
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "No such account" })),
            ResponseTemplate::new(500).set_body_string("Internal Server Error"),
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Login successful" })),
        ];

        for template in templates {
            let server = respond_with(template).await;
            let api = ApiClient::new(&server.uri())?;
            let store = MemorySessionStore::with_raw(r#"{"username":"previous"}"#);

            let (flow, request) = LoginFlow::new()
                .with_email("a@b.com")
                .with_password("x")
                .submit();
            let result = login(&api, &store, &request).await;

            let LoginStep::Stay(flow) = flow.resolve(&result) else {
                bail!("expected failure to keep the form");
            };
            assert_eq!(flow.error(), Some(LOGIN_FAILED_MESSAGE));
            assert_eq!(store.raw().as_deref(), Some(r#"{"username":"previous"}"#));
        }
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_backend_collapses_too() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0")?;
            listener.local_addr()?.port()
        };
        let api = ApiClient::new(&format!("http://127.0.0.1:{port}"))?;
        let store = MemorySessionStore::new();

        let result = login(&api, &store, &credentials()).await;

        assert!(matches!(result, Err(AuthError::TransportFailure(_))));
        assert_eq!(result.unwrap_err().login_message(), LOGIN_FAILED_MESSAGE);
        assert_eq!(store.get(), None);
        Ok(())
    }
}

//! Registration flow. All substantive validation (uniqueness, password
//! strength) belongs to the backend; the form only forwards what the user
//! typed. Registration never signs the user in.
//!
//! Flow Overview: `Idle` → `Submitting` → `Succeeded` or `Failed(reason)`.
//! The form stays in place in both cases and may be submitted again.

use crate::{
    app_lib::ApiClient,
    features::auth::{
        client,
        errors::AuthError,
        types::{RegisterRequest, Role},
    },
};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

/// Confirmation shown after the backend accepts a registration.
pub const REGISTRATION_SUCCEEDED_MESSAGE: &str = "User registered successfully!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RegisterStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// Transient registration form. Never persisted.
#[derive(Debug)]
pub struct RegisterFlow {
    username: String,
    email: String,
    password: SecretString,
    role: Role,
    status: RegisterStatus,
}

impl Default for RegisterFlow {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: SecretString::from(String::new()),
            role: Role::default(),
            status: RegisterStatus::Idle,
        }
    }
}

impl RegisterFlow {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_username(self, username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..self
        }
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

    #[must_use]
    pub fn with_role(self, role: Role) -> Self {
        Self { role, ..self }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn has_password(&self) -> bool {
        !self.password.expose_secret().is_empty()
    }

    pub fn status(&self) -> &RegisterStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == RegisterStatus::Submitting
    }

    /// Message to show under the form, for either outcome.
    pub fn message(&self) -> Option<&str> {
        match &self.status {
            RegisterStatus::Succeeded(message) | RegisterStatus::Failed(message) => Some(message),
            RegisterStatus::Idle | RegisterStatus::Submitting => None,
        }
    }

    /// Moves the form into a request. The password leaves the form here.
    #[must_use]
    pub fn submit(self) -> (Self, RegisterRequest) {
        let request = RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password,
            role: self.role,
        };
        let flow = Self {
            username: self.username,
            email: self.email,
            password: SecretString::from(String::new()),
            role: self.role,
            status: RegisterStatus::Submitting,
        };
        (flow, request)
    }

    #[must_use]
    pub fn resolve(self, result: &Result<(), AuthError>) -> Self {
        let status = match result {
            Ok(()) => RegisterStatus::Succeeded(REGISTRATION_SUCCEEDED_MESSAGE.to_string()),
            Err(err) => RegisterStatus::Failed(err.registration_message()),
        };
        Self { status, ..self }
    }
}

/// Submits a registration.
///
/// # Errors
/// `ValidationRejected` when the backend declines the fields (carrying its
/// detail if any), `TransportFailure` when it cannot be reached.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<(), AuthError> {
    client::register(api, request).await.map_err(|err| {
        let err = AuthError::from_registration(err);
        info!(reason = %err, "registration failed");
        err
    })?;

    info!(role = %request.role, "account registered");
    Ok(())
}

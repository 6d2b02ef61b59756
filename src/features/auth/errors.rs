//! Failure taxonomy for the auth flows. Flows convert every failure into one
//! of these at their boundary and then into a user-facing message; nothing
//! propagates further.

use crate::app_lib::AppError;
use std::fmt;

/// Message shown for every login failure, whatever the cause.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password";
/// Message shown for registration failures without a backend detail.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The backend declined the registration fields.
    ValidationRejected(Option<String>),
    /// The backend declined the login credentials.
    AuthenticationRejected,
    /// The request never produced a usable answer: network, malformed
    /// response or browser storage.
    TransportFailure(String),
}

impl AuthError {
    pub fn from_registration(err: AppError) -> Self {
        if matches!(err, AppError::Http { .. }) {
            return AuthError::ValidationRejected(err.detail().map(str::to_string));
        }
        AuthError::TransportFailure(err.to_string())
    }

    pub fn from_login(err: AppError) -> Self {
        match err {
            AppError::Http { .. } => AuthError::AuthenticationRejected,
            other => AuthError::TransportFailure(other.to_string()),
        }
    }

    /// Message for the registration form: the backend detail when there is
    /// one.
    pub fn registration_message(&self) -> String {
        match self {
            AuthError::ValidationRejected(Some(detail)) => detail.clone(),
            _ => REGISTRATION_FAILED_MESSAGE.to_string(),
        }
    }

    /// Message for the login form. Every cause collapses to the same text so
    /// the form does not reveal which accounts exist.
    pub fn login_message(&self) -> &'static str {
        LOGIN_FAILED_MESSAGE
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::ValidationRejected(Some(detail)) => {
                write!(formatter, "Registration rejected: {detail}")
            }
            AuthError::ValidationRejected(None) => formatter.write_str("Registration rejected"),
            AuthError::AuthenticationRejected => formatter.write_str("Authentication rejected"),
            AuthError::TransportFailure(message) => write!(formatter, "Transport failure: {message}"),
        }
    }
}

impl std::error::Error for AuthError {}

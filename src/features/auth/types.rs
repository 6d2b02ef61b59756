//! Request, response and session types for the auth API. Request payloads
//! carry plaintext passwords wrapped in `SecretString`, so their `Debug`
//! output is redacted and they must never be logged in serialized form.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Account role chosen at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Instructor,
    Tutor,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Instructor, Role::Tutor];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Tutor => "tutor",
        }
    }

    /// Human-readable label for select options.
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Instructor => "Instructor",
            Role::Tutor => "Tutor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            "tutor" => Ok(Role::Tutor),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

fn serialize_secret<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

/// `SecretString` is not `Clone`, but Leptos actions hand their input over
/// by reference, so requests copy the password explicitly.
fn copy_secret(secret: &SecretString) -> SecretString {
    SecretString::from(secret.expose_secret().to_owned())
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
    pub role: Role,
}

impl Clone for RegisterRequest {
    fn clone(&self) -> Self {
        Self {
            username: self.username.clone(),
            email: self.email.clone(),
            password: copy_secret(&self.password),
            role: self.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
}

impl Clone for LoginRequest {
    fn clone(&self) -> Self {
        Self {
            email: self.email.clone(),
            password: copy_secret(&self.password),
        }
    }
}

/// Identity cached in the browser after a successful login: the backend's
/// `user` object, kept exactly as returned. No field is required or typed,
/// so missing fields stay missing and unknown fields are carried along.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionRecord(Map<String, Value>);

impl SessionRecord {
    /// Wraps a user object. Anything other than a JSON object is rejected.
    pub fn from_user(user: Value) -> Option<Self> {
        match user {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Extracts the `user` object from a login response body.
    pub fn from_login_response(body: &Value) -> Option<Self> {
        Self::from_user(body.get("user")?.clone())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn username(&self) -> String {
        self.display("username")
    }

    pub fn role(&self) -> String {
        self.display("role")
    }

    pub fn created_at(&self) -> String {
        self.display("created_at")
    }

    /// Strings render as-is, other JSON values in their compact form, and
    /// missing or null fields as empty text.
    fn display(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Http {
        status: u16,
        detail: Option<String>,
    },
    Parse(String),
    Serialization(String),
    Storage(String),
}

impl AppError {
    /// Server-provided error detail, if the failed response carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Http {
                detail: Some(detail),
                ..
            } => Some(detail.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Http {
                status,
                detail: Some(detail),
            } => write!(formatter, "Request failed ({status}): {detail}"),
            AppError::Http {
                status,
                detail: None,
            } => write!(formatter, "Request failed ({status})"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
            AppError::Storage(message) => write!(formatter, "Storage error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn detail_only_comes_from_http_errors() {
        let http = AppError::Http {
            status: 400,
            detail: Some("Username already taken".to_string()),
        };
        assert_eq!(http.detail(), Some("Username already taken"));

        let bare = AppError::Http {
            status: 500,
            detail: None,
        };
        assert_eq!(bare.detail(), None);
        assert_eq!(AppError::Network("refused".to_string()).detail(), None);
    }

    #[test]
    fn display_includes_status_and_detail() {
        let err = AppError::Http {
            status: 401,
            detail: Some("Invalid email or password".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Request failed (401): Invalid email or password"
        );
        let err = AppError::Http {
            status: 502,
            detail: None,
        };
        assert_eq!(err.to_string(), "Request failed (502)");
    }
}

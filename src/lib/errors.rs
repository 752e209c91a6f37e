use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Client-side validation failure; no request was sent.
    Input(String),
    Network(String),
    Timeout(String),
    /// Non-2xx response; `detail` is the backend's error message when the
    /// body carried one.
    Http { status: u16, detail: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Status code for HTTP failures, `None` for everything else.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Input(message) => write!(formatter, "{message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, detail } => {
                if detail.is_empty() {
                    write!(formatter, "Request failed ({status})")
                } else {
                    write!(formatter, "{detail}")
                }
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_display_prefers_backend_detail() {
        let err = AppError::Http {
            status: 401,
            detail: "Wrong username or password".to_string(),
        };
        assert_eq!(err.to_string(), "Wrong username or password");
    }

    #[test]
    fn http_display_falls_back_to_status() {
        let err = AppError::Http {
            status: 500,
            detail: String::new(),
        };
        assert_eq!(err.to_string(), "Request failed (500)");
    }

    #[test]
    fn status_is_only_set_for_http_errors() {
        let http = AppError::Http {
            status: 400,
            detail: "bad".to_string(),
        };
        assert_eq!(http.status(), Some(400));
        assert_eq!(AppError::Input("missing".to_string()).status(), None);
    }
}

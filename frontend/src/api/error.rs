use std::fmt;

/// Failure of a data-service round-trip. Nothing here is retried; the
/// caller decides whether the user sees a toast or an empty section.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The service answered with a non-success status.
    Http { status: u16, body: String },
    /// The request never completed (connection refused, CORS, offline).
    Network(String),
    /// The response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, body } => {
                if body.is_empty() {
                    write!(f, "request failed with status {status}")
                } else {
                    write!(f, "request failed with status {status}: {body}")
                }
            }
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Decode(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status_and_body() {
        let err = ApiError::Http {
            status: 409,
            body: "duplicate key".into(),
        };
        assert_eq!(err.to_string(), "request failed with status 409: duplicate key");

        let bare = ApiError::Http {
            status: 500,
            body: String::new(),
        };
        assert_eq!(bare.to_string(), "request failed with status 500");
    }
}

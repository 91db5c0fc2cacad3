use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("connect timeout")]
    ConnectTimeout,

    #[error("request timeout")]
    RequestTimeout,

    #[error("too many redirects")]
    RedirectLoop,

    #[error("http error {status}")]
    Http { status: StatusCode, retriable: bool },

    #[error("body too large ({0} bytes)")]
    BodyTooLarge(u64),

    #[error("unsupported content-type: {0}")]
    UnsupportedContentType(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("unknown: {0}")]
    Unknown(String),
}

impl FetchError {
    /// Whether another attempt, possibly through a different fetcher, could
    /// succeed.
    pub fn should_retry(&self) -> bool {
        match self {
            Self::InvalidUrl(_) => false,
            Self::UnsupportedScheme(_) => false,
            Self::BodyTooLarge(_) => false,
            Self::UnsupportedContentType(_) => false,
            Self::Http { retriable, .. } => *retriable,

            Self::Connect(_) => true,
            Self::ConnectTimeout => true,
            Self::RequestTimeout => true,
            Self::RedirectLoop => true,
            Self::Io(_) => true,
            Self::Unknown(_) => true,
        }
    }

    /// Server errors, rate limiting and bot blocking are worth another try.
    pub fn from_status(status: StatusCode) -> Self {
        Self::Http {
            status,
            retriable: status.is_server_error()
                || status == StatusCode::FORBIDDEN
                || status == StatusCode::TOO_MANY_REQUESTS,
        }
    }

    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::RequestTimeout
            }
        } else if err.is_redirect() {
            Self::RedirectLoop
        } else if let Some(status) = err.status() {
            Self::from_status(status)
        } else if err.is_connect() || err.is_request() {
            Self::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Io(err.to_string())
        } else {
            Self::Unknown(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(!FetchError::from_status(StatusCode::NOT_FOUND).should_retry());
        assert!(!FetchError::from_status(StatusCode::GONE).should_retry());
        assert!(FetchError::from_status(StatusCode::FORBIDDEN).should_retry());
        assert!(FetchError::from_status(StatusCode::TOO_MANY_REQUESTS).should_retry());
        assert!(FetchError::from_status(StatusCode::BAD_GATEWAY).should_retry());
    }

    #[test]
    fn test_fatal_errors_are_not_retried() {
        assert!(!FetchError::UnsupportedScheme("ftp".into()).should_retry());
        assert!(!FetchError::BodyTooLarge(10).should_retry());
        assert!(FetchError::Connect("refused".into()).should_retry());
    }
}

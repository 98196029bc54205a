use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the `cms-client` library.
pub enum CmsError {
    /// HTTP transport error (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested document does not exist in the selected snapshot.
    #[error("not found")]
    NotFound,

    /// The CMS rejected the request (4xx other than 404).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The CMS answered with an unexpected status or payload.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Result alias for `cms-client` operations.
pub type CmsResult<T> = Result<T, CmsError>;

impl CmsError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| format!("http status {status}"));
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            s if s.is_client_error() => Self::InvalidRequest(message),
            _ => Self::UnexpectedResponse(message),
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::CmsError;

    #[test]
    fn status_404_maps_to_not_found() {
        let err = CmsError::from_http_status(reqwest::StatusCode::NOT_FOUND, None);
        assert!(matches!(err, CmsError::NotFound));
    }

    #[test]
    fn client_errors_keep_the_message() {
        let err = CmsError::from_http_status(
            reqwest::StatusCode::BAD_REQUEST,
            Some("bad ref".to_string()),
        );
        match err {
            CmsError::InvalidRequest(message) => assert_eq!(message, "bad ref"),
            _ => panic!("expected CmsError::InvalidRequest"),
        }
    }

    #[test]
    fn server_errors_map_to_unexpected_response() {
        let err = CmsError::from_http_status(reqwest::StatusCode::BAD_GATEWAY, None);
        assert!(matches!(err, CmsError::UnexpectedResponse(_)));
    }
}

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use cms_client::CmsError;
use thiserror::Error;
use tracing::error;

use crate::presentation::templates::ErrorTemplate;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("not found")]
    NotFound,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("content api error: {0}")]
    Upstream(CmsError),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

impl From<CmsError> for AppError {
    fn from(err: CmsError) -> Self {
        match err {
            CmsError::NotFound => Self::NotFound,
            CmsError::InvalidRequest(message) => Self::BadRequest(message),
            other => Self::Upstream(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Post não encontrado".to_string()),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream(err) => {
                error!("content api request failed: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "O conteúdo está temporariamente indisponível".to_string(),
                )
            }
            AppError::Internal(err) => {
                error!("internal error: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro interno".to_string())
            }
        };

        let template = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        match template.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => (status, "internal error").into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use cms_client::CmsError;

    use super::AppError;

    #[test]
    fn missing_document_becomes_not_found() {
        let err = AppError::from(CmsError::NotFound);
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn transport_errors_become_upstream() {
        let err = AppError::from(CmsError::UnexpectedResponse("boom".to_string()));
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[test]
    fn invalid_requests_keep_the_message() {
        let err = AppError::from(CmsError::InvalidRequest("bad cursor".to_string()));
        match err {
            AppError::BadRequest(message) => assert_eq!(message, "bad cursor"),
            _ => panic!("expected AppError::BadRequest"),
        }
    }
}

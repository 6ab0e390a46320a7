use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error response body
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Everything that can go wrong while serving a search request.
///
/// Upstream response bodies are kept for logging at the response boundary
/// but never forwarded to the caller; the client only ever sees the
/// `#[error]` message.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search query is required")]
    MissingQuery,

    #[error("missing authorization header")]
    MissingAuth,

    #[error("unauthorized")]
    Unauthorized,

    #[error("rate limits exceeded, please try again later")]
    RateLimited,

    #[error("payment required, please add funds to your AI workspace")]
    PaymentRequired,

    #[error("data store request failed with status {status}")]
    Store { status: StatusCode, body: String },

    #[error("AI search failed with status {status}")]
    Model { status: StatusCode, body: String },

    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl SearchError {
    pub fn status(&self) -> StatusCode {
        match self {
            SearchError::MissingQuery => StatusCode::BAD_REQUEST,
            SearchError::MissingAuth | SearchError::Unauthorized => StatusCode::UNAUTHORIZED,
            SearchError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            SearchError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            SearchError::Store { .. } | SearchError::Model { .. } | SearchError::Http(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            SearchError::Store { status: upstream, body } => {
                tracing::error!("data store returned {upstream}: {body}");
            }
            SearchError::Model { status: upstream, body } => {
                tracing::error!("model endpoint returned {upstream}: {body}");
            }
            _ if status.is_server_error() => {
                tracing::error!("search failed: {self}");
            }
            _ => {
                tracing::warn!("search rejected: {self}");
            }
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

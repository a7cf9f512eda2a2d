use std::path::PathBuf;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Rail and bus sources must be given in the config file or with --rail and --bus")]
    MissingSources,
    #[error(transparent)]
    Routes(#[from] ctamap_core::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Loading task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Error returned from request handlers
#[derive(Debug)]
pub struct ApiError(pub ctamap_core::Error);

impl From<ctamap_core::Error> for ApiError {
    fn from(err: ctamap_core::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ctamap_core::Error::InvalidMode(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

//! API エラー型
//!
//! リクエスト単位の失敗はすべてここに集約し、ステータスコードへ変換します。
//! エラーレスポンスのボディは空で、結果はステータスコードのみで伝えます。
//! デコード失敗やシリアライズ失敗でプロセスが落ちることはありません。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            ApiError::BadRequest(reason) => tracing::debug!(%reason, "rejecting request"),
            ApiError::Internal(reason) => tracing::error!(%reason, "request failed"),
            _ => {}
        }

        status.into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("invalid JSON: {e}"))
    }
}

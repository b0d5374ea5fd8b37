use crate::ports::book_repository::RepositoryError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::{ErrorResponse, MessageResponse};

/// API層のエラー型
///
/// 「見つからない」とストア障害の2種類のみ。
/// ストア障害の詳細はログに記録し、クライアントには一般的なメッセージのみを返す。
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Repository(RepositoryError),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::Repository(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // 404 Not Found - リクエストされた書籍が存在しない
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new("Book not found")),
            )
                .into_response(),

            // 500 Internal Server Error - 不正なIDを含むすべてのストア障害
            ApiError::Repository(ref e) => {
                match std::error::Error::source(e) {
                    Some(source) => tracing::error!("Repository error: {}: {}", e, source),
                    None => tracing::error!("Repository error: {}", e),
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

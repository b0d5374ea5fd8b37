use crate::application::book::{
    ServiceDependencies, create_book as execute_create_book, delete_book as execute_delete_book,
    get_all_books as execute_get_all_books, get_book_by_id as execute_get_book_by_id,
    update_book as execute_update_book,
};
use crate::domain::{BookId, BookRecord, BookUpdate};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{BookCreatedResponse, CreateBookRequest, MessageResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers
// ============================================================================

/// POST /books - 書籍を登録
///
/// ストアが割り当てたIDを201で返す。
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookCreatedResponse>), ApiError> {
    let book_id = execute_create_book(&state.service_deps, req.to_command()).await?;

    let response = BookCreatedResponse {
        message: "Book created successfully".to_string(),
        book_id,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /books/:id - 書籍を部分更新
///
/// 一致する書籍がない、または値が変わらなかった場合は404を返す。
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
    Json(update): Json<BookUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    let book_id = BookId::new(book_id);

    if !execute_update_book(&state.service_deps, &book_id, update).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse::new("Book updated successfully")))
}

/// DELETE /books/:id - 書籍を削除
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let book_id = BookId::new(book_id);

    if !execute_delete_book(&state.service_deps, &book_id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse::new("Book deleted successfully")))
}

// ============================================================================
// Query handlers
// ============================================================================

/// GET /books - 全書籍を取得
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookRecord>>, ApiError> {
    let books = execute_get_all_books(&state.service_deps).await?;
    Ok(Json(books))
}

/// GET /books/:id - 書籍をIDで取得
///
/// 見つかった場合は書籍を返し、見つからない場合は404を返す。
pub async fn get_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<Json<BookRecord>, ApiError> {
    let book_id = BookId::new(book_id);

    execute_get_book_by_id(&state.service_deps, &book_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

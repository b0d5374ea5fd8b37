use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_book, delete_book, get_book_by_id, list_books, update_book,
};

/// Creates the API router with all book endpoints
///
/// - POST /books - Create a book
/// - GET /books - List all books
/// - GET /books/:id - Get a book by id
/// - PUT /books/:id - Update some fields of a book
/// - DELETE /books/:id - Delete a book
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:id",
            get(get_book_by_id).put(update_book).delete(delete_book),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

use serde::{Deserialize, Serialize};

use crate::domain::{BookId, commands::CreateBook};

/// 書籍登録リクエスト（POST /books）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub price: f64,
    pub isbn: String,
    pub language: String,
    pub num_pages: u32,
    pub publisher: String,
}

impl CreateBookRequest {
    pub fn to_command(&self) -> CreateBook {
        CreateBook {
            title: self.title.clone(),
            author: self.author.clone(),
            price: self.price,
            isbn: self.isbn.clone(),
            language: self.language.clone(),
            num_pages: self.num_pages,
            publisher: self.publisher.clone(),
        }
    }
}

/// 書籍登録レスポンス
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreatedResponse {
    pub message: String,
    pub book_id: BookId,
}

/// メッセージのみのレスポンス（更新・削除成功、404）
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

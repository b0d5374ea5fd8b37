use crate::domain::{Book, BookId, BookRecord, BookUpdate};
use crate::ports::book_repository::{
    BookRepository as BookRepositoryTrait, RepositoryError, Result, parse_native_id,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// BookRepositoryのインメモリ実装
///
/// UUIDをキーとするマップに書籍を保持する（UUIDがストア固有IDの役割を持つ）。
/// データベースなしのローカル実行とHTTP層のテストで使用する。
pub struct BookRepository {
    books: Mutex<HashMap<Uuid, Book>>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }

    /// ロック取得に失敗した場合はストア障害として扱う
    fn books(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Book>>> {
        self.books
            .lock()
            .map_err(|e| RepositoryError::storage(e.to_string()))
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn create(&self, book: Book) -> Result<BookId> {
        let id = Uuid::new_v4();
        self.books()?.insert(id, book);
        Ok(BookId::new(id.to_string()))
    }

    async fn get_all(&self) -> Result<Vec<BookRecord>> {
        let books = self.books()?;
        Ok(books
            .iter()
            .map(|(id, book)| BookRecord {
                id: BookId::new(id.to_string()),
                book: book.clone(),
            })
            .collect())
    }

    async fn get_by_id(&self, id: &BookId) -> Result<Option<BookRecord>> {
        let native_id: Uuid = parse_native_id(id)?;
        let books = self.books()?;
        Ok(books.get(&native_id).map(|book| BookRecord {
            id: id.clone(),
            book: book.clone(),
        }))
    }

    async fn update(&self, id: &BookId, update: BookUpdate) -> Result<bool> {
        let native_id: Uuid = parse_native_id(id)?;
        let mut books = self.books()?;
        Ok(books
            .get_mut(&native_id)
            .map(|book| book.apply(&update))
            .unwrap_or(false))
    }

    async fn delete(&self, id: &BookId) -> Result<bool> {
        let native_id: Uuid = parse_native_id(id)?;
        Ok(self.books()?.remove(&native_id).is_some())
    }
}

use crate::domain::{Book, BookId, BookRecord, BookUpdate};
use crate::ports::book_repository::{
    BookRepository as BookRepositoryTrait, RepositoryError, Result, parse_native_id,
};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow, types::Json};
use uuid::Uuid;

/// PostgreSQLの行データをBookRecordに変換する
///
/// `document`列はJSONBで、`Book`のキー名（camelCase）のまま保存されている。
fn map_row_to_book_record(row: &PgRow) -> Result<BookRecord> {
    let id: Uuid = row.try_get("id").map_err(RepositoryError::storage)?;
    let Json(book): Json<Book> = row.try_get("document").map_err(RepositoryError::storage)?;

    Ok(BookRecord {
        id: BookId::new(id.to_string()),
        book,
    })
}

/// BookRepositoryのPostgreSQL実装
///
/// `books`テーブルに書籍をJSONBドキュメントとして保存する。
/// ドキュメントストアと同じく、書き込み前のスキーマ検証は行わない。
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// PostgreSQLコネクションプールから新しいBookRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn create(&self, book: Book) -> Result<BookId> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO books (id, document)
            VALUES ($1, $2)
            "#,
        )
        .bind(id)
        .bind(Json(&book))
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        tracing::debug!(book_id = %id, "Inserted book row");

        Ok(BookId::new(id.to_string()))
    }

    async fn get_all(&self) -> Result<Vec<BookRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, document
            FROM books
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        rows.iter().map(map_row_to_book_record).collect()
    }

    async fn get_by_id(&self, id: &BookId) -> Result<Option<BookRecord>> {
        let native_id: Uuid = parse_native_id(id)?;

        let row = sqlx::query(
            r#"
            SELECT id, document
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(native_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        row.as_ref().map(map_row_to_book_record).transpose()
    }

    /// JSONBの`||`で指定フィールドをマージする
    ///
    /// 既に同じ値を含むドキュメント（`@>`）は更新対象外とし、
    /// 影響行数が「変更件数」になるようにする。
    async fn update(&self, id: &BookId, update: BookUpdate) -> Result<bool> {
        let native_id: Uuid = parse_native_id(id)?;

        if update.is_empty() {
            return Ok(false);
        }

        let result = sqlx::query(
            r#"
            UPDATE books
            SET document = document || $2
            WHERE id = $1 AND NOT (document @> $2)
            "#,
        )
        .bind(native_id)
        .bind(Json(&update))
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &BookId) -> Result<bool> {
        let native_id: Uuid = parse_native_id(id)?;

        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(native_id)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        Ok(result.rows_affected() > 0)
    }
}

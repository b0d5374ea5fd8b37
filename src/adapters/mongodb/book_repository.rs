use crate::domain::{Book, BookId, BookRecord, BookUpdate};
use crate::ports::book_repository::{
    BookRepository as BookRepositoryTrait, RepositoryError, Result, parse_native_id,
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, Document, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};

/// 書籍を保存するコレクション名
pub const COLLECTION_NAME: &str = "books";

/// コレクションに保存されたドキュメントの形
///
/// `_id`はMongoDBが割り当てるObjectId。その他のフィールドは`Book`と同じキー名。
/// コレクションはスキーマを持たないため、欠けているフィールドは既定値で埋める。
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    isbn: String,
    #[serde(default)]
    language: String,
    #[serde(default)]
    num_pages: u32,
    #[serde(default)]
    publisher: String,
}

/// 生のドキュメントをBookRecordに変換する
fn decode_book_document(
    document: Document,
) -> std::result::Result<BookRecord, bson::de::Error> {
    bson::from_document::<BookDocument>(document).map(BookRecord::from)
}

/// 一覧取得用のドキュメント変換
///
/// 他のクライアントが書き込んだ型の合わないドキュメントは警告を出して読み飛ばし、
/// 1件の不正データで一覧全体が失敗しないようにする。
fn decode_book_documents(documents: Vec<Document>) -> Vec<BookRecord> {
    documents
        .into_iter()
        .filter_map(|document| {
            let id = document.get("_id").cloned();
            match decode_book_document(document) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(document_id = ?id, "Skipping undecodable book document: {}", e);
                    None
                }
            }
        })
        .collect()
}

impl From<BookDocument> for BookRecord {
    fn from(doc: BookDocument) -> Self {
        BookRecord {
            id: BookId::new(doc.id.to_hex()),
            book: Book::new(
                doc.title,
                doc.author,
                doc.price,
                doc.isbn,
                doc.language,
                doc.num_pages,
                doc.publisher,
            ),
        }
    }
}

/// BookRepositoryのMongoDB実装
///
/// `books`コレクションに書籍をドキュメントとして保存する。
/// 書き込み前のスキーマ検証は行わない。
pub struct BookRepository {
    collection: Collection<Document>,
}

impl BookRepository {
    /// データベースハンドルから新しいBookRepositoryを作成
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    /// ドキュメントをそのまま挿入し、割り当てられたObjectIdを返す
    async fn create(&self, book: Book) -> Result<BookId> {
        let result = self
            .collection
            .clone_with_type::<Book>()
            .insert_one(&book)
            .await
            .map_err(RepositoryError::storage)?;

        let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::storage(format!(
                "unexpected inserted id: {}",
                result.inserted_id
            ))
        })?;

        tracing::debug!(book_id = %inserted_id, "Inserted book document");

        Ok(BookId::new(inserted_id.to_hex()))
    }

    /// コレクション全体を走査してVecに集める
    async fn get_all(&self) -> Result<Vec<BookRecord>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(RepositoryError::storage)?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(RepositoryError::storage)?;

        Ok(decode_book_documents(documents))
    }

    async fn get_by_id(&self, id: &BookId) -> Result<Option<BookRecord>> {
        let object_id: ObjectId = parse_native_id(id)?;

        let document = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(RepositoryError::storage)?;

        document
            .map(decode_book_document)
            .transpose()
            .map_err(RepositoryError::storage)
    }

    /// `$set`で指定フィールドのみを更新する
    ///
    /// 成否はmodified_countで判定する。値が変わらなかった場合も`false`。
    async fn update(&self, id: &BookId, update: BookUpdate) -> Result<bool> {
        let object_id: ObjectId = parse_native_id(id)?;

        // 空の$setはサーバーに拒否されるため、変更なしとして扱う
        if update.is_empty() {
            return Ok(false);
        }

        let fields = bson::to_document(&update).map_err(RepositoryError::storage)?;

        let result = self
            .collection
            .update_one(doc! { "_id": object_id }, doc! { "$set": fields })
            .await
            .map_err(RepositoryError::storage)?;

        Ok(result.modified_count > 0)
    }

    async fn delete(&self, id: &BookId) -> Result<bool> {
        let object_id: ObjectId = parse_native_id(id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(RepositoryError::storage)?;

        Ok(result.deleted_count > 0)
    }
}

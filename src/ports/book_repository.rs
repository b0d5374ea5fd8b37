use crate::domain::{Book, BookId, BookRecord, BookUpdate};
use async_trait::async_trait;
use std::str::FromStr;
use thiserror::Error;

/// リポジトリ操作のエラー
///
/// 「見つからない」はエラーではなく、`None`や`false`の戻り値で表現する。
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 書籍IDをストア固有のID型に変換できない
    #[error("Invalid book id: {0}")]
    InvalidId(String),

    /// ストア起因の障害（接続、書き込み競合など）
    #[error("Storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    pub fn storage(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        RepositoryError::Storage(err.into())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// 不透明な書籍IDをストア固有のID型へ変換する
///
/// すべてのアダプターはこの関数を経由してIDを変換する。
/// 変換に失敗した場合は`RepositoryError::InvalidId`を返す。
pub fn parse_native_id<N>(id: &BookId) -> Result<N>
where
    N: FromStr,
{
    id.as_str()
        .parse::<N>()
        .map_err(|_| RepositoryError::InvalidId(id.to_string()))
}

/// 書籍リポジトリポート
///
/// 永続化の詳細をアプリケーション層から隔離する。
/// どのストレージでも、この5つの操作を提供すれば差し替え可能。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 書籍を新規保存し、ストアが割り当てたIDを返す
    async fn create(&self, book: Book) -> Result<BookId>;

    /// 保存済みの全書籍を返す
    ///
    /// 順序は規定しない。書籍がなければ空のVecを返す。
    async fn get_all(&self) -> Result<Vec<BookRecord>>;

    /// IDで書籍を取得する
    ///
    /// 該当なしは`Ok(None)`であり、読み込み失敗とは区別される。
    async fn get_by_id(&self, id: &BookId) -> Result<Option<BookRecord>>;

    /// 指定フィールドを既存の書籍にマージする
    ///
    /// 1件が一致し実際に変更された場合のみ`true`を返す。
    async fn update(&self, id: &BookId, update: BookUpdate) -> Result<bool>;

    /// 書籍を削除する
    ///
    /// 1件削除された場合に`true`を返す。
    async fn delete(&self, id: &BookId) -> Result<bool>;
}

use crate::domain::{BookId, BookRecord, BookUpdate, commands::CreateBook};
use crate::ports::book_repository::{BookRepository, Result};
use std::sync::Arc;

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞いは持たず、各ユースケース関数に明示的に渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
}

/// 書籍を登録する
///
/// コマンドのフィールドから書籍エンティティを組み立て、リポジトリに渡す。
/// リポジトリが返したIDをそのまま返す。
pub async fn create_book(deps: &ServiceDependencies, cmd: CreateBook) -> Result<BookId> {
    let book = cmd.into_book();
    deps.book_repository.create(book).await
}

/// 全書籍を取得する
pub async fn get_all_books(deps: &ServiceDependencies) -> Result<Vec<BookRecord>> {
    deps.book_repository.get_all().await
}

/// IDで書籍を取得する
///
/// 見つからない場合も変換せず`None`をそのまま返す。
pub async fn get_book_by_id(deps: &ServiceDependencies, id: &BookId) -> Result<Option<BookRecord>> {
    deps.book_repository.get_by_id(id).await
}

/// 書籍を部分更新する
pub async fn update_book(
    deps: &ServiceDependencies,
    id: &BookId,
    update: BookUpdate,
) -> Result<bool> {
    deps.book_repository.update(id, update).await
}

/// 書籍を削除する
pub async fn delete_book(deps: &ServiceDependencies, id: &BookId) -> Result<bool> {
    deps.book_repository.delete(id).await
}

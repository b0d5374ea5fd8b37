use super::book::Book;

/// 書籍登録コマンド
///
/// HTTP層から受け取った個々のフィールドをそのまま運ぶ。
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub price: f64,
    pub isbn: String,
    pub language: String,
    pub num_pages: u32,
    pub publisher: String,
}

impl CreateBook {
    /// コマンドから書籍エンティティを組み立てる（フィールド順を保持）
    pub fn into_book(self) -> Book {
        Book::new(
            self.title,
            self.author,
            self.price,
            self.isbn,
            self.language,
            self.num_pages,
            self.publisher,
        )
    }
}

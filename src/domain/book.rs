use serde::{Deserialize, Serialize};

use super::value_objects::BookId;

/// 書籍エンティティ
///
/// 振る舞いを持たない純粋なデータ。永続化されるまでIDを持たない。
/// フィールドの存在以外の不変条件は強制しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub price: f64,
    pub isbn: String,
    pub language: String,
    pub num_pages: u32,
    pub publisher: String,
}

impl Book {
    pub fn new(
        title: String,
        author: String,
        price: f64,
        isbn: String,
        language: String,
        num_pages: u32,
        publisher: String,
    ) -> Self {
        Self {
            title,
            author,
            price,
            isbn,
            language,
            num_pages,
            publisher,
        }
    }

    /// 部分更新を適用する
    ///
    /// 指定されたフィールドのみを上書きし、実際に値が変わった場合に`true`を返す。
    /// ドキュメントストアの「変更件数」と同じ意味を持つ。
    pub fn apply(&mut self, update: &BookUpdate) -> bool {
        let mut modified = false;

        fn set<T: PartialEq + Clone>(field: &mut T, value: &Option<T>, modified: &mut bool) {
            if let Some(value) = value.as_ref().filter(|v| **v != *field) {
                *field = value.clone();
                *modified = true;
            }
        }

        set(&mut self.title, &update.title, &mut modified);
        set(&mut self.author, &update.author, &mut modified);
        set(&mut self.price, &update.price, &mut modified);
        set(&mut self.isbn, &update.isbn, &mut modified);
        set(&mut self.language, &update.language, &mut modified);
        set(&mut self.num_pages, &update.num_pages, &mut modified);
        set(&mut self.publisher, &update.publisher, &mut modified);

        modified
    }
}

/// 書籍の部分更新
///
/// `None`のフィールドは更新対象外で、シリアライズ時にも出力しない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl BookUpdate {
    /// 更新対象のフィールドが1つもない
    pub fn is_empty(&self) -> bool {
        self == &BookUpdate::default()
    }
}

/// 永続化済みの書籍（ストアが割り当てたIDを含む）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(rename = "_id")]
    pub id: BookId,
    #[serde(flatten)]
    pub book: Book,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book::new(
            "Test Book".to_string(),
            "Test Author".to_string(),
            9.99,
            "1234567890".to_string(),
            "English".to_string(),
            200,
            "Test Publisher".to_string(),
        )
    }

    #[test]
    fn test_new_keeps_field_order() {
        let book = sample_book();

        assert_eq!(book.title, "Test Book");
        assert_eq!(book.author, "Test Author");
        assert_eq!(book.price, 9.99);
        assert_eq!(book.isbn, "1234567890");
        assert_eq!(book.language, "English");
        assert_eq!(book.num_pages, 200);
        assert_eq!(book.publisher, "Test Publisher");
    }

    #[test]
    fn test_book_serializes_num_pages_as_camel_case() {
        let json = serde_json::to_value(sample_book()).unwrap();

        assert_eq!(json["numPages"], 200);
        assert!(json.get("num_pages").is_none());
    }

    #[test]
    fn test_apply_only_touches_given_fields() {
        let mut book = sample_book();
        let update = BookUpdate {
            title: Some("Updated Title".to_string()),
            ..Default::default()
        };

        assert!(book.apply(&update));
        assert_eq!(book.title, "Updated Title");
        assert_eq!(book.author, "Test Author");
        assert_eq!(book.num_pages, 200);
    }

    #[test]
    fn test_apply_with_identical_values_reports_no_modification() {
        let mut book = sample_book();
        let update = BookUpdate {
            title: Some("Test Book".to_string()),
            price: Some(9.99),
            ..Default::default()
        };

        assert!(!book.apply(&update));
        assert_eq!(book, sample_book());
    }

    #[test]
    fn test_update_skips_absent_fields_when_serialized() {
        let update = BookUpdate {
            title: Some("Updated Title".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&update).unwrap();

        assert_eq!(json, serde_json::json!({ "title": "Updated Title" }));
        assert!(!update.is_empty());
        assert!(BookUpdate::default().is_empty());
    }

    #[test]
    fn test_record_serializes_id_as_underscore_id() {
        let record = BookRecord {
            id: BookId::new("5feb2a94247b363028aefda5"),
            book: sample_book(),
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["_id"], "5feb2a94247b363028aefda5");
        assert_eq!(json["title"], "Test Book");
        assert_eq!(json["numPages"], 200);
    }
}

// MongoDBアダプターのテスト（modified_count / deleted_count の判定を含む）
//
// 実際のMongoDBが必要なため既定では#[ignore]。
// CI（.github/workflows/ci.yml）はmongoサービスを起動し、
//   DB_URI=mongodb://localhost:27017 cargo test -- --include-ignored
// で全テストを実行する。ローカルでも同じコマンドで実行できる。

mod common;

use book_catalog::adapters::mongodb::MongoBookRepository;
use book_catalog::domain::{BookId, BookUpdate};
use book_catalog::ports::{BookRepository, RepositoryError};
use mongodb::bson::{doc, oid::ObjectId};
use serial_test::serial;

#[tokio::test]
#[serial]
#[ignore = "requires a running MongoDB instance"]
async fn test_create_stores_document_with_exact_fields() {
    let database = common::create_test_database().await;
    let repo = MongoBookRepository::new(&database);

    let book_id = repo
        .create(common::test_book())
        .await
        .expect("Failed to create book");

    let object_id = ObjectId::parse_str(book_id.as_str()).unwrap();
    let stored = database
        .collection::<mongodb::bson::Document>("books")
        .find_one(doc! { "_id": object_id })
        .await
        .unwrap()
        .expect("Document not stored");

    assert_eq!(stored.get_str("title").unwrap(), "Test Book");
    assert_eq!(stored.get_str("author").unwrap(), "Test Author");
    assert_eq!(stored.get_f64("price").unwrap(), 9.99);
    assert_eq!(stored.get_str("isbn").unwrap(), "1234567890");
    assert_eq!(stored.get_str("language").unwrap(), "English");
    assert!(stored.contains_key("numPages"));
    assert_eq!(stored.get_str("publisher").unwrap(), "Test Publisher");
}

#[tokio::test]
#[serial]
#[ignore = "requires a running MongoDB instance"]
async fn test_get_all_on_empty_collection_returns_empty_vec() {
    let database = common::create_test_database().await;
    let repo = MongoBookRepository::new(&database);

    let books = repo.get_all().await.expect("Failed to list books");

    assert!(books.is_empty());
}

#[tokio::test]
#[serial]
#[ignore = "requires a running MongoDB instance"]
async fn test_get_by_id_missing_returns_none() {
    let database = common::create_test_database().await;
    let repo = MongoBookRepository::new(&database);

    let book = repo
        .get_by_id(&BookId::new(ObjectId::new().to_hex()))
        .await
        .expect("Lookup should not fail");

    assert!(book.is_none());
}

#[tokio::test]
#[serial]
#[ignore = "requires a running MongoDB instance"]
async fn test_update_reports_modified_count() {
    let database = common::create_test_database().await;
    let repo = MongoBookRepository::new(&database);
    let book_id = repo.create(common::test_book()).await.unwrap();

    let update = BookUpdate {
        title: Some("Updated Title".to_string()),
        ..Default::default()
    };

    // 1回目は変更あり、2回目は同じ値なのでmodified_count = 0
    assert!(repo.update(&book_id, update.clone()).await.unwrap());
    assert!(!repo.update(&book_id, update).await.unwrap());

    let record = repo.get_by_id(&book_id).await.unwrap().unwrap();
    assert_eq!(record.book.title, "Updated Title");
    assert_eq!(record.book.author, "Test Author");

    // 存在しないID
    let missing = BookId::new("5feb2a94247b363028aefda5");
    let update = BookUpdate {
        title: Some("Updated Title".to_string()),
        ..Default::default()
    };
    assert!(!repo.update(&missing, update).await.unwrap());
}

#[tokio::test]
#[serial]
#[ignore = "requires a running MongoDB instance"]
async fn test_delete_then_get_by_id_returns_none() {
    let database = common::create_test_database().await;
    let repo = MongoBookRepository::new(&database);
    let book_id = repo.create(common::test_book()).await.unwrap();

    assert!(repo.delete(&book_id).await.unwrap());
    assert!(repo.get_by_id(&book_id).await.unwrap().is_none());
    assert!(!repo.delete(&book_id).await.unwrap());
}

#[tokio::test]
#[serial]
#[ignore = "requires a running MongoDB instance"]
async fn test_malformed_id_is_invalid_id_error() {
    let database = common::create_test_database().await;
    let repo = MongoBookRepository::new(&database);

    let result = repo.delete(&BookId::new("123456")).await;

    assert!(matches!(result, Err(RepositoryError::InvalidId(_))));
}

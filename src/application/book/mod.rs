mod book_service;

pub use book_service::{
    ServiceDependencies, create_book, delete_book, get_all_books, get_book_by_id, update_book,
};

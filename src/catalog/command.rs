pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod load_catalog_cmd;
pub mod recommend_books_cmd;
pub mod save_catalog_cmd;

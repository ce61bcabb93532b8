pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, GenreShelfDto};
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto>;
    async fn list_books(&self) -> LibraryResult<Vec<GenreShelfDto>>;
    async fn recommend(&self, isbn: &str) -> LibraryResult<Vec<BookDto>>;
}

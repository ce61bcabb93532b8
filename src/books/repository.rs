pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    async fn find_by_title(&self, title: &str) -> LibraryResult<BookEntity>;

    // every genre in lexicographic order, books of a genre in insertion order
    async fn group_by_genre(&self) -> LibraryResult<Vec<(String, Vec<BookEntity>)>>;

    async fn update_stock(&self, isbn: &str, stock: i64) -> LibraryResult<BookEntity>;

    async fn count(&self) -> LibraryResult<usize>;
}

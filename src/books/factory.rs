use crate::books::repository::BookRepository;
use crate::core::repository::RepositoryStore;

pub(crate) async fn create_book_repository(store: &RepositoryStore) -> Box<dyn BookRepository> {
    Box::new(store.books.clone())
}

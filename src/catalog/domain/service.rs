use std::collections::HashMap;
use async_trait::async_trait;
use tracing::debug;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, GenreShelfDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::{branch_metadata, DomainEvent};
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.create(&BookEntity::from(book)).await?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "book_added", "books", book.id().as_str(), &branch_metadata(self.branch_id.as_str()), book)?).await?;
        let total = self.book_repository.count().await?;
        debug!(isbn = book.isbn.as_str(), total, "book added");
        Ok(book.clone())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto> {
        self.book_repository.find_by_title(title).await.map(|b| BookDto::from(&b))
    }

    async fn list_books(&self) -> LibraryResult<Vec<GenreShelfDto>> {
        let shelves = self.book_repository.group_by_genre().await?;
        Ok(shelves.iter()
            .map(|(genre, books)| GenreShelfDto::new(genre, books.iter().map(BookDto::from).collect()))
            .collect())
    }

    async fn recommend(&self, isbn: &str) -> LibraryResult<Vec<BookDto>> {
        let source = self.book_repository.get(isbn).await?;
        let res = self.book_repository.query(
            &HashMap::from([("genre".to_string(), source.genre().to_string())])).await?;
        let picks: Vec<BookDto> = res.iter()
            .filter(|b| b.isbn != source.isbn && b.in_stock())
            .map(BookDto::from)
            .collect();
        debug!(isbn, genre = source.genre(), picks = picks.len(), "recommendations");
        Ok(picks)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            stock: other.stock,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        BookEntity::new(other.isbn.as_str(), other.title.as_str(), other.author.as_str(), other.genre.as_str(), other.stock)
    }
}


#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::BookDto;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::catalog::factory;
    use crate::core::domain::{Configuration, Identifiable};
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;
    use crate::gateway::memory::publisher::MemoryPublisher;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new("test"), &RepositoryStore::in_memory()).await
            });
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = SUT_SVC.get().await.clone();

        let book = BookDto::new("svc-isbn-1", "Dune", "Herbert", "SciFi", 3);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let loaded = catalog_svc.find_book_by_isbn(book.isbn.as_str()).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_return_second_of_duplicate_isbn() {
        let catalog_svc = SUT_SVC.get().await.clone();

        let _ = catalog_svc.add_book(&BookDto::new("svc-isbn-2", "First", "A", "Dup", 1)).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("svc-isbn-2", "Second", "B", "Dup", 5)).await.expect("should add book");

        let loaded = catalog_svc.find_book_by_isbn("svc-isbn-2").await.expect("should return book");
        assert_eq!("Second", loaded.title.as_str());
        assert_eq!(5, loaded.stock);
        let shelves = catalog_svc.list_books().await.expect("should list");
        let dup = shelves.iter().find(|s| s.genre == "Dup").expect("should have genre");
        assert_eq!(1, dup.books.len());
    }

    #[tokio::test]
    async fn test_should_find_by_title() {
        let catalog_svc = SUT_SVC.get().await.clone();

        let book = BookDto::new("svc-isbn-3", "A Title Only Here", "Someone", "Poetry", 2);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let loaded = catalog_svc.find_book_by_title("A Title Only Here").await.expect("should return book");
        assert_eq!(book.isbn, loaded.isbn);
        assert!(catalog_svc.find_book_by_title("Missing Title").await.is_err());
    }

    #[tokio::test]
    async fn test_should_not_find_unknown_isbn() {
        let catalog_svc = SUT_SVC.get().await.clone();

        let res = catalog_svc.find_book_by_isbn("svc-unknown").await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        let res = catalog_svc.recommend("svc-unknown").await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_recommend_in_stock_books_of_same_genre() {
        let publisher = MemoryPublisher::new();
        let catalog_svc = CatalogServiceImpl::new(&Configuration::new("test"),
                                                  Box::new(MemoryBookRepository::new()), Box::new(publisher.clone()));
        let _ = catalog_svc.add_book(&BookDto::new("1", "Dune", "Herbert", "SciFi", 3)).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("2", "Hyperion", "Simmons", "SciFi", 0)).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("3", "Foundation", "Asimov", "SciFi", 2)).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("4", "Emma", "Austen", "Classic", 4)).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("5", "Solaris", "Lem", "SciFi", 1)).await.expect("should add book");

        let picks = catalog_svc.recommend("1").await.expect("should recommend");
        let isbns: Vec<&str> = picks.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(vec!["3", "5"], isbns);

        let picks = catalog_svc.recommend("4").await.expect("should recommend");
        assert!(picks.is_empty());
        assert_eq!(5, publisher.names().iter().filter(|n| n.as_str() == "book_added").count());
    }

    #[tokio::test]
    async fn test_should_list_genres_in_order() {
        let catalog_svc = CatalogServiceImpl::new(&Configuration::new("test"),
                                                  Box::new(MemoryBookRepository::new()), Box::new(MemoryPublisher::new()));
        assert!(catalog_svc.list_books().await.expect("should list").is_empty());
        let _ = catalog_svc.add_book(&BookDto::new("1", "Dune", "Herbert", "SciFi", 3)).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("2", "Emma", "Austen", "Classic", 4)).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("3", "Solaris", "Lem", "SciFi", 1)).await.expect("should add book");

        let shelves = catalog_svc.list_books().await.expect("should list");
        assert_eq!(2, shelves.len());
        assert_eq!("Classic", shelves[0].genre.as_str());
        assert_eq!("SciFi", shelves[1].genre.as_str());
        let scifi: Vec<&str> = shelves[1].books.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(vec!["1", "3"], scifi);
    }
}

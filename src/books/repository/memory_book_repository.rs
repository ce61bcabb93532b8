use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use tracing::{debug, warn};
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// BookArena owns every book record. The isbn, title and genre indexes refer to
// records by slot, never by reference, so detaching a record cannot dangle.
#[derive(Debug, Default)]
struct BookArena {
    slots: Vec<Option<BookEntity>>,
    by_isbn: HashMap<String, usize>,
    by_title: HashMap<String, usize>,
    by_genre: BTreeMap<String, Vec<usize>>,
}

impl BookArena {
    // insert returns the record it replaced when the isbn was already known
    fn insert(&mut self, book: &BookEntity) -> Option<BookEntity> {
        let replaced = self.detach(book.isbn.as_str());
        let slot = self.slots.len();
        self.slots.push(Some(book.clone()));
        self.by_isbn.insert(book.isbn.to_string(), slot);
        self.by_title.insert(book.title.to_string(), slot);
        self.by_genre.entry(book.genre.to_string()).or_default().push(slot);
        replaced
    }

    fn detach(&mut self, isbn: &str) -> Option<BookEntity> {
        let slot = self.by_isbn.remove(isbn)?;
        let old = self.slots.get_mut(slot).and_then(Option::take)?;
        // a later book may have taken over the title, otherwise it falls back to
        // the newest surviving book with the same title
        if self.by_title.get(old.title.as_str()) == Some(&slot) {
            match self.newest_titled(old.title.as_str()) {
                Some(prev) => self.by_title.insert(old.title.to_string(), prev),
                None => self.by_title.remove(old.title.as_str()),
            };
        }
        if let Some(shelf) = self.by_genre.get_mut(old.genre.as_str()) {
            shelf.retain(|s| *s != slot);
            if shelf.is_empty() {
                self.by_genre.remove(old.genre.as_str());
            }
        }
        Some(old)
    }

    fn newest_titled(&self, title: &str) -> Option<usize> {
        self.slots.iter().rposition(|b| b.as_ref().map_or(false, |b| b.title == title))
    }

    fn at(&self, slot: usize) -> Option<&BookEntity> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn by_isbn_mut(&mut self, isbn: &str) -> Option<&mut BookEntity> {
        let slot = *self.by_isbn.get(isbn)?;
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    fn shelf(&self, genre: &str) -> Vec<BookEntity> {
        self.by_genre.get(genre)
            .map(|slots| slots.iter().filter_map(|slot| self.at(*slot)).cloned().collect())
            .unwrap_or_default()
    }

    fn shelves(&self) -> Vec<(String, Vec<BookEntity>)> {
        self.by_genre.keys()
            .map(|genre| (genre.to_string(), self.shelf(genre)))
            .collect()
    }
}

// MemoryBookRepository keeps the catalog in process memory; clones share the same arena.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryBookRepository {
    arena: Arc<RwLock<BookArena>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> LibraryResult<RwLockReadGuard<'_, BookArena>> {
        self.arena.read().map_err(|_| LibraryError::lock_poisoned("books"))
    }

    fn write(&self) -> LibraryResult<RwLockWriteGuard<'_, BookArena>> {
        self.arena.write().map_err(|_| LibraryError::lock_poisoned("books"))
    }
}

fn matches_predicate(book: &BookEntity, predicate: &HashMap<String, String>) -> LibraryResult<bool> {
    for (k, v) in predicate {
        let field = match k.as_str() {
            "isbn" => &book.isbn,
            "title" => &book.title,
            "author" => &book.author,
            "genre" => &book.genre,
            _ => {
                return Err(LibraryError::validation(
                    format!("unsupported book attribute {}", k).as_str(), Some("400".to_string())));
            }
        };
        if field != v {
            return Ok(false);
        }
    }
    Ok(true)
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut arena = self.write()?;
        if let Some(old) = arena.insert(entity) {
            warn!(isbn = entity.isbn.as_str(), replaced_title = old.title.as_str(),
                "duplicate isbn, earlier record replaced");
        }
        debug!(isbn = entity.isbn.as_str(), genre = entity.genre.as_str(), "book stored");
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let arena = self.read()?;
        arena.by_isbn.get(id)
            .and_then(|slot| arena.at(*slot))
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book with isbn {} not found", id).as_str()))
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        let arena = self.read()?;
        let candidates = if let Some(genre) = predicate.get("genre") {
            arena.shelf(genre.as_str())
        } else {
            arena.shelves().into_iter().flat_map(|(_, books)| books).collect()
        };
        let mut records = vec![];
        for book in candidates {
            if matches_predicate(&book, predicate)? {
                records.push(book);
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_title(&self, title: &str) -> LibraryResult<BookEntity> {
        let arena = self.read()?;
        arena.by_title.get(title)
            .and_then(|slot| arena.at(*slot))
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book with title {} not found", title).as_str()))
    }

    async fn group_by_genre(&self) -> LibraryResult<Vec<(String, Vec<BookEntity>)>> {
        Ok(self.read()?.shelves())
    }

    async fn update_stock(&self, isbn: &str, stock: i64) -> LibraryResult<BookEntity> {
        let mut arena = self.write()?;
        let book = arena.by_isbn_mut(isbn).ok_or_else(|| LibraryError::not_found(
            format!("book with isbn {} not found", isbn).as_str()))?;
        book.stock = stock;
        Ok(book.clone())
    }

    async fn count(&self) -> LibraryResult<usize> {
        Ok(self.read()?.by_isbn.len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_get_book() {
        let repo = MemoryBookRepository::new();
        let book = BookEntity::new("978-1", "Dune", "Herbert", "SciFi", 3);
        assert_eq!(1, repo.create(&book).await.expect("should create book"));
        let loaded = repo.get("978-1").await.expect("should return book");
        assert_eq!(book, loaded);
        assert!(matches!(repo.get("978-x").await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_replace_duplicate_isbn() {
        let repo = MemoryBookRepository::new();
        let _ = repo.create(&BookEntity::new("978-1", "Dune", "Herbert", "SciFi", 3)).await.expect("should create book");
        let _ = repo.create(&BookEntity::new("978-1", "Dune Messiah", "Herbert", "Classic", 1)).await.expect("should create book");

        let loaded = repo.get("978-1").await.expect("should return book");
        assert_eq!("Dune Messiah", loaded.title.as_str());
        assert_eq!(1, repo.count().await.expect("should count"));
        let shelves = repo.group_by_genre().await.expect("should group");
        assert_eq!(1, shelves.len());
        assert_eq!("Classic", shelves[0].0.as_str());
        assert!(repo.find_by_title("Dune").await.is_err());
    }

    #[tokio::test]
    async fn test_should_keep_latest_title() {
        let repo = MemoryBookRepository::new();
        let _ = repo.create(&BookEntity::new("978-1", "Emma", "Austen", "Classic", 1)).await.expect("should create book");
        let _ = repo.create(&BookEntity::new("978-2", "Emma", "Tennant", "Modern", 2)).await.expect("should create book");
        let loaded = repo.find_by_title("Emma").await.expect("should find title");
        assert_eq!("978-2", loaded.isbn.as_str());

        // replacing the first emma must not drop the title entry owned by the second
        let _ = repo.create(&BookEntity::new("978-1", "Emma (annotated)", "Austen", "Classic", 4)).await.expect("should create book");
        let loaded = repo.find_by_title("Emma").await.expect("should find title");
        assert_eq!("978-2", loaded.isbn.as_str());
        let loaded = repo.find_by_title("Emma (annotated)").await.expect("should find title");
        assert_eq!("978-1", loaded.isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_group_by_genre_in_order() {
        let repo = MemoryBookRepository::new();
        for (isbn, genre) in [("1", "SciFi"), ("2", "Classic"), ("3", "SciFi"), ("4", "Art")] {
            let _ = repo.create(&BookEntity::new(isbn, isbn, "author", genre, 1)).await.expect("should create book");
        }
        let shelves = repo.group_by_genre().await.expect("should group");
        let genres: Vec<&str> = shelves.iter().map(|(g, _)| g.as_str()).collect();
        assert_eq!(vec!["Art", "Classic", "SciFi"], genres);
        let scifi: Vec<&str> = shelves[2].1.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(vec!["1", "3"], scifi);
    }

    #[tokio::test]
    async fn test_should_query_by_predicate() {
        let repo = MemoryBookRepository::new();
        let _ = repo.create(&BookEntity::new("1", "Dune", "Herbert", "SciFi", 1)).await.expect("should create book");
        let _ = repo.create(&BookEntity::new("2", "Hyperion", "Simmons", "SciFi", 1)).await.expect("should create book");
        let _ = repo.create(&BookEntity::new("3", "Emma", "Austen", "Classic", 1)).await.expect("should create book");

        let res = repo.query(&HashMap::from([("genre".to_string(), "SciFi".to_string())])).await.expect("should query");
        assert_eq!(2, res.len());
        let res = repo.query(&HashMap::from([("author".to_string(), "Austen".to_string())])).await.expect("should query");
        assert_eq!(1, res.len());
        let res = repo.query(&HashMap::new()).await.expect("should query");
        assert_eq!(3, res.len());
        assert!(repo.query(&HashMap::from([("color".to_string(), "red".to_string())])).await.is_err());
    }

    #[tokio::test]
    async fn test_should_fall_back_to_surviving_title() {
        let repo = MemoryBookRepository::new();
        let _ = repo.create(&BookEntity::new("978-1", "Emma", "Austen", "Classic", 1)).await.expect("should create book");
        let _ = repo.create(&BookEntity::new("978-2", "Emma", "Tennant", "Modern", 2)).await.expect("should create book");

        // replacing the title owner hands the title back to the older book
        let _ = repo.create(&BookEntity::new("978-2", "Emma Brown", "Tennant", "Modern", 2)).await.expect("should create book");
        let loaded = repo.find_by_title("Emma").await.expect("should find title");
        assert_eq!("978-1", loaded.isbn.as_str());
        assert_eq!("978-2", repo.find_by_title("Emma Brown").await.expect("should find title").isbn.as_str());

        let _ = repo.create(&BookEntity::new("978-1", "Persuasion", "Austen", "Classic", 1)).await.expect("should create book");
        assert!(matches!(repo.find_by_title("Emma").await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_update_stock() {
        let repo = MemoryBookRepository::new();
        let _ = repo.create(&BookEntity::new("978-1", "Dune", "Herbert", "SciFi", 3)).await.expect("should create book");
        let updated = repo.update_stock("978-1", 0).await.expect("should update stock");
        assert_eq!(0, updated.stock);
        assert_eq!(0, repo.get("978-1").await.expect("should return book").stock);
        assert!(matches!(repo.update_stock("978-x", 1).await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_share_arena_between_clones() {
        let repo = MemoryBookRepository::new();
        let other = repo.clone();
        let _ = repo.create(&BookEntity::new("978-1", "Dune", "Herbert", "SciFi", 3)).await.expect("should create book");
        assert_eq!(1, other.count().await.expect("should count"));
    }
}

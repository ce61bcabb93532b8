use async_trait::async_trait;
use std::collections::HashMap;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::circulation::repository::memory_action_history::MemoryActionHistory;
use crate::core::library::LibraryResult;
use crate::requests::repository::memory_request_queue::MemoryRequestQueue;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // find by attribute equality
    async fn query(&self, predicate: &HashMap::<String, String>) -> LibraryResult<Vec<Entity>>;
}

// RepositoryStore holds the process-local state shared by every service built from it.
// Cloning the store shares the state, it does not copy it.
#[derive(Debug, Clone, Default)]
pub(crate) struct RepositoryStore {
    pub(crate) books: MemoryBookRepository,
    pub(crate) requests: MemoryRequestQueue,
    pub(crate) actions: MemoryActionHistory,
}

impl RepositoryStore {
    pub fn in_memory() -> RepositoryStore {
        RepositoryStore::default()
    }
}

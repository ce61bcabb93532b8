use std::collections::VecDeque;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use crate::core::library::{LibraryError, LibraryResult};
use crate::requests::domain::model::RequestEntity;
use crate::requests::repository::RequestQueue;

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryRequestQueue {
    queue: Arc<RwLock<VecDeque<RequestEntity>>>,
}

impl MemoryRequestQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RequestQueue for MemoryRequestQueue {
    async fn enqueue(&self, request: &RequestEntity) -> LibraryResult<usize> {
        let mut queue = self.queue.write().map_err(|_| LibraryError::lock_poisoned("requests"))?;
        queue.push_back(request.clone());
        Ok(queue.len())
    }

    async fn dequeue(&self) -> LibraryResult<RequestEntity> {
        let mut queue = self.queue.write().map_err(|_| LibraryError::lock_poisoned("requests"))?;
        queue.pop_front().ok_or_else(|| LibraryError::empty("no pending requests"))
    }

    async fn pending(&self) -> LibraryResult<Vec<RequestEntity>> {
        let queue = self.queue.read().map_err(|_| LibraryError::lock_poisoned("requests"))?;
        Ok(queue.iter().cloned().collect())
    }

    async fn len(&self) -> LibraryResult<usize> {
        let queue = self.queue.read().map_err(|_| LibraryError::lock_poisoned("requests"))?;
        Ok(queue.len())
    }
}

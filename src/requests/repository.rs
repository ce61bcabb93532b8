pub mod memory_request_queue;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::requests::domain::model::RequestEntity;

// RequestQueue hands out pending requests strictly in arrival order
#[async_trait]
pub(crate) trait RequestQueue: Sync + Send {
    // enqueue returns the number of pending requests including the new one
    async fn enqueue(&self, request: &RequestEntity) -> LibraryResult<usize>;

    async fn dequeue(&self) -> LibraryResult<RequestEntity>;

    async fn pending(&self) -> LibraryResult<Vec<RequestEntity>>;

    async fn len(&self) -> LibraryResult<usize>;
}

use async_trait::async_trait;
use crate::circulation::dto::{ActionDto, ProcessOutcome, QueuedRequestDto, UndoOutcome};
use crate::core::library::LibraryResult;
use crate::requests::dto::RequestDto;

pub mod model;
pub mod service;

#[async_trait]
pub(crate) trait CirculationService: Sync + Send {
    async fn request_borrow(&self, user_id: &str, isbn: &str) -> LibraryResult<QueuedRequestDto>;
    async fn request_return(&self, user_id: &str, isbn: &str) -> LibraryResult<QueuedRequestDto>;
    async fn pending_requests(&self) -> LibraryResult<Vec<RequestDto>>;
    async fn process_next(&self) -> LibraryResult<ProcessOutcome>;
    async fn undo_last(&self) -> LibraryResult<UndoOutcome>;
    async fn last_action(&self) -> LibraryResult<ActionDto>;
}

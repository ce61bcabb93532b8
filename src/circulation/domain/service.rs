use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::circulation::domain::CirculationService;
use crate::circulation::domain::model::ActionEntity;
use crate::circulation::dto::{ActionDto, ProcessOutcome, QueuedRequestDto, UndoOutcome};
use crate::circulation::repository::ActionHistory;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::{branch_metadata, DomainEvent};
use crate::core::library::{LibraryError, LibraryResult, RequestKind};
use crate::gateway::events::EventPublisher;
use crate::requests::domain::model::RequestEntity;
use crate::requests::dto::RequestDto;
use crate::requests::repository::RequestQueue;

pub(crate) struct CirculationServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    request_queue: Box<dyn RequestQueue>,
    action_history: Box<dyn ActionHistory>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CirculationServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      request_queue: Box<dyn RequestQueue>, action_history: Box<dyn ActionHistory>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            request_queue,
            action_history,
            events_publisher,
        }
    }

    async fn submit(&self, user_id: &str, isbn: &str, kind: RequestKind) -> LibraryResult<QueuedRequestDto> {
        let book = self.book_repository.get(isbn).await?;
        let request = RequestEntity::new(user_id, isbn, kind);
        let position = self.request_queue.enqueue(&request).await?;
        if kind == RequestKind::Borrow && !book.in_stock() {
            info!(user_id, isbn, "no copy on the shelf, borrow request queued anyway");
        }
        let name = match kind {
            RequestKind::Borrow => "borrow_requested",
            RequestKind::Return => "return_requested",
        };
        let dto = RequestDto::from(&request);
        let _ = self.events_publisher.publish(&DomainEvent::added(
            name, "requests", request.id().as_str(), &branch_metadata(self.branch_id.as_str()), &dto)?).await?;
        Ok(QueuedRequestDto { request: dto, book: BookDto::from(&book), position })
    }

    async fn record(&self, name: &str, request: &RequestEntity, book: &BookEntity, stock: i64) -> LibraryResult<BookDto> {
        let updated = self.book_repository.update_stock(book.isbn.as_str(), stock).await?;
        let action = ActionEntity::from_request(request, book.stock);
        let _ = self.action_history.push(&action).await?;
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            name, "circulation", book.id().as_str(), &branch_metadata(self.branch_id.as_str()), &ActionDto::from(&action))?).await?;
        info!(action_id = %action.id(), user_id = request.user_id.as_str(), isbn = book.isbn.as_str(), kind = %action.kind,
            from = book.stock, to = stock, "stock changed");
        Ok(BookDto::from(&updated))
    }
}

#[async_trait]
impl CirculationService for CirculationServiceImpl {
    async fn request_borrow(&self, user_id: &str, isbn: &str) -> LibraryResult<QueuedRequestDto> {
        self.submit(user_id, isbn, RequestKind::Borrow).await
    }

    async fn request_return(&self, user_id: &str, isbn: &str) -> LibraryResult<QueuedRequestDto> {
        self.submit(user_id, isbn, RequestKind::Return).await
    }

    async fn pending_requests(&self) -> LibraryResult<Vec<RequestDto>> {
        let res = self.request_queue.pending().await?;
        Ok(res.iter().map(RequestDto::from).collect())
    }

    async fn process_next(&self) -> LibraryResult<ProcessOutcome> {
        let request = self.request_queue.dequeue().await?;
        let left = self.request_queue.len().await?;
        debug!(request_id = request.request_id.as_str(), left, "processing request");
        let book = match self.book_repository.get(request.book_isbn.as_str()).await {
            Ok(book) => book,
            Err(err) if err.is_not_found() => {
                warn!(isbn = request.book_isbn.as_str(), "book left the catalog, request dropped");
                return Ok(ProcessOutcome::Skipped { request: RequestDto::from(&request) });
            }
            Err(err) => return Err(err),
        };
        match request.kind {
            RequestKind::Borrow => {
                if !book.in_stock() {
                    info!(user_id = request.user_id.as_str(), isbn = book.isbn.as_str(), "out of stock, borrow request dropped");
                    let dto = RequestDto::from(&request);
                    let _ = self.events_publisher.publish(&DomainEvent::removed(
                        "borrow_rejected", "requests", dto.id().as_str(),
                        &branch_metadata(self.branch_id.as_str()), &dto)?).await?;
                    return Ok(ProcessOutcome::Rejected { request: dto, book: BookDto::from(&book) });
                }
                let updated = self.record("book_borrowed", &request, &book, book.stock - 1).await?;
                Ok(ProcessOutcome::Borrowed { request: RequestDto::from(&request), book: updated })
            }
            RequestKind::Return => {
                let stock = book.stock.checked_add(1).ok_or_else(|| LibraryError::validation(
                    format!("stock of book {} cannot grow further", book.isbn).as_str(), Some("400".to_string())))?;
                let updated = self.record("book_returned", &request, &book, stock).await?;
                Ok(ProcessOutcome::Returned { request: RequestDto::from(&request), book: updated })
            }
        }
    }

    async fn undo_last(&self) -> LibraryResult<UndoOutcome> {
        let action = self.action_history.pop().await?;
        let dto = ActionDto::from(&action);
        match self.book_repository.update_stock(action.book_isbn.as_str(), action.previous_stock).await {
            Ok(book) => {
                let _ = self.events_publisher.publish(&DomainEvent::removed(
                    "action_undone", "circulation", dto.id().as_str(),
                    &branch_metadata(self.branch_id.as_str()), &dto)?).await?;
                let remaining = self.action_history.len().await?;
                info!(isbn = action.book_isbn.as_str(), kind = %action.kind, stock = book.stock, remaining, "action undone");
                Ok(UndoOutcome::Reverted { action: dto, book: BookDto::from(&book) })
            }
            Err(err) if err.is_not_found() => {
                warn!(isbn = action.book_isbn.as_str(), "book left the catalog, action dropped");
                Ok(UndoOutcome::Skipped { action: dto })
            }
            Err(err) => Err(err),
        }
    }

    async fn last_action(&self) -> LibraryResult<ActionDto> {
        self.action_history.peek().await.map(|a| ActionDto::from(&a))
    }
}

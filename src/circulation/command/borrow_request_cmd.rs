use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::circulation::domain::CirculationService;
use crate::circulation::dto::QueuedRequestDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct BorrowRequestCommand {
    circulation_service: Box<dyn CirculationService>,
}

impl BorrowRequestCommand {
    pub(crate) fn new(circulation_service: Box<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BorrowRequestCommandRequest {
    pub(crate) user_id: String,
    pub(crate) isbn: String,
}

impl BorrowRequestCommandRequest {
    pub fn new(user_id: &str, isbn: &str) -> Self {
        Self {
            user_id: user_id.trim().to_string(),
            isbn: isbn.trim().to_string(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CommandError> {
        if self.user_id.is_empty() || self.isbn.is_empty() {
            return Err(CommandError::Validation {
                message: "user id and isbn are required".to_string(),
                reason_code: Some("400".to_string()),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BorrowRequestCommandResponse {
    pub queued: QueuedRequestDto,
    // false when the book had no copy on the shelf at submission time
    pub in_stock: bool,
}

#[async_trait]
impl Command<BorrowRequestCommandRequest, BorrowRequestCommandResponse> for BorrowRequestCommand {
    async fn execute(&self, req: BorrowRequestCommandRequest) -> Result<BorrowRequestCommandResponse, CommandError> {
        req.validate()?;
        let queued = self.circulation_service.request_borrow(req.user_id.as_str(), req.isbn.as_str()).await?;
        let in_stock = queued.book.in_stock();
        Ok(BorrowRequestCommandResponse { queued, in_stock })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::factory::create_catalog_service;
    use crate::circulation::command::borrow_request_cmd::{BorrowRequestCommand, BorrowRequestCommandRequest};
    use crate::circulation::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_borrow_request() {
        let store = RepositoryStore::in_memory();
        let catalog = create_catalog_service(&Configuration::new("test"), &store).await;
        let _ = catalog.add_book(&BookDto::new("1", "Dune", "Herbert", "SciFi", 1)).await.expect("should add book");
        let _ = catalog.add_book(&BookDto::new("2", "Emma", "Austen", "Classic", 0)).await.expect("should add book");

        let cmd = BorrowRequestCommand::new(factory::create_circulation_service(&Configuration::new("test"), &store).await);
        let res = cmd.execute(BorrowRequestCommandRequest::new(" u1 ", "1")).await.expect("should queue");
        assert!(res.in_stock);
        assert_eq!("u1", res.queued.request.user_id.as_str());
        assert_eq!(1, res.queued.position);

        let res = cmd.execute(BorrowRequestCommandRequest::new("u2", "2")).await.expect("should queue");
        assert!(!res.in_stock);
        assert_eq!(2, res.queued.position);
    }

    #[tokio::test]
    async fn test_should_refuse_blank_or_unknown() {
        let store = RepositoryStore::in_memory();
        let cmd = BorrowRequestCommand::new(factory::create_circulation_service(&Configuration::new("test"), &store).await);
        let res = cmd.execute(BorrowRequestCommandRequest::new("", "1")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
        let res = cmd.execute(BorrowRequestCommandRequest::new("u1", "missing")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::circulation::dto::ActionDto;
use crate::core::command::{Command, CommandError};
use crate::requests::dto::RequestDto;

pub(crate) struct PendingRequestsCommand {
    circulation_service: Box<dyn CirculationService>,
}

impl PendingRequestsCommand {
    pub(crate) fn new(circulation_service: Box<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PendingRequestsCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct PendingRequestsCommandResponse {
    pub requests: Vec<RequestDto>,
    // what undo would revert next, None when the history is empty
    pub last_action: Option<ActionDto>,
}

#[async_trait]
impl Command<PendingRequestsCommandRequest, PendingRequestsCommandResponse> for PendingRequestsCommand {
    async fn execute(&self, _req: PendingRequestsCommandRequest) -> Result<PendingRequestsCommandResponse, CommandError> {
        let requests = self.circulation_service.pending_requests().await?;
        let last_action = match self.circulation_service.last_action().await {
            Ok(action) => Some(action),
            Err(err) if err.is_empty() => None,
            Err(err) => return Err(err.into()),
        };
        Ok(PendingRequestsCommandResponse { requests, last_action })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::factory::create_catalog_service;
    use crate::circulation::command::pending_requests_cmd::{PendingRequestsCommand, PendingRequestsCommandRequest};
    use crate::circulation::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::ActionKind;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_pending_requests() {
        let store = RepositoryStore::in_memory();
        let catalog = create_catalog_service(&Configuration::new("test"), &store).await;
        let _ = catalog.add_book(&BookDto::new("1", "Dune", "Herbert", "SciFi", 1)).await.expect("should add book");
        let svc = factory::create_circulation_service(&Configuration::new("test"), &store).await;
        let _ = svc.request_borrow("u1", "1").await.expect("should queue");
        let _ = svc.request_return("u2", "1").await.expect("should queue");

        let cmd = PendingRequestsCommand::new(svc);
        let res = cmd.execute(PendingRequestsCommandRequest::default()).await.expect("should list");
        assert_eq!(vec!["u1", "u2"], res.requests.iter().map(|r| r.user_id.as_str()).collect::<Vec<_>>());
        assert!(res.last_action.is_none());

        let svc = factory::create_circulation_service(&Configuration::new("test"), &store).await;
        let _ = svc.process_next().await.expect("should process");
        let res = cmd.execute(PendingRequestsCommandRequest::default()).await.expect("should list");
        assert_eq!(1, res.requests.len());
        let action = res.last_action.expect("should have action");
        assert_eq!(ActionKind::Borrowed, action.kind);
        assert_eq!(1, action.previous_stock);
    }
}

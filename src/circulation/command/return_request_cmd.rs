use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::circulation::dto::QueuedRequestDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnRequestCommand {
    circulation_service: Box<dyn CirculationService>,
}

impl ReturnRequestCommand {
    pub(crate) fn new(circulation_service: Box<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnRequestCommandRequest {
    pub(crate) user_id: String,
    pub(crate) isbn: String,
}

impl ReturnRequestCommandRequest {
    pub fn new(user_id: &str, isbn: &str) -> Self {
        Self {
            user_id: user_id.trim().to_string(),
            isbn: isbn.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReturnRequestCommandResponse {
    pub queued: QueuedRequestDto,
}

#[async_trait]
impl Command<ReturnRequestCommandRequest, ReturnRequestCommandResponse> for ReturnRequestCommand {
    async fn execute(&self, req: ReturnRequestCommandRequest) -> Result<ReturnRequestCommandResponse, CommandError> {
        if req.user_id.is_empty() || req.isbn.is_empty() {
            return Err(CommandError::Validation {
                message: "user id and isbn are required".to_string(),
                reason_code: Some("400".to_string()),
            });
        }
        let queued = self.circulation_service.request_return(req.user_id.as_str(), req.isbn.as_str()).await?;
        Ok(ReturnRequestCommandResponse { queued })
    }
}

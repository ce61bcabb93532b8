use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::circulation::dto::ProcessOutcome;
use crate::core::command::{Command, CommandError};

pub(crate) struct ProcessRequestCommand {
    circulation_service: Box<dyn CirculationService>,
}

impl ProcessRequestCommand {
    pub(crate) fn new(circulation_service: Box<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProcessRequestCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct ProcessRequestCommandResponse {
    pub outcome: ProcessOutcome,
}

#[async_trait]
impl Command<ProcessRequestCommandRequest, ProcessRequestCommandResponse> for ProcessRequestCommand {
    async fn execute(&self, _req: ProcessRequestCommandRequest) -> Result<ProcessRequestCommandResponse, CommandError> {
        let outcome = self.circulation_service.process_next().await?;
        Ok(ProcessRequestCommandResponse { outcome })
    }
}

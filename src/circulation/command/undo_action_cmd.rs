use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::circulation::dto::UndoOutcome;
use crate::core::command::{Command, CommandError};

pub(crate) struct UndoActionCommand {
    circulation_service: Box<dyn CirculationService>,
}

impl UndoActionCommand {
    pub(crate) fn new(circulation_service: Box<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UndoActionCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct UndoActionCommandResponse {
    pub outcome: UndoOutcome,
}

#[async_trait]
impl Command<UndoActionCommandRequest, UndoActionCommandResponse> for UndoActionCommand {
    async fn execute(&self, _req: UndoActionCommandRequest) -> Result<UndoActionCommandResponse, CommandError> {
        let outcome = self.circulation_service.undo_last().await?;
        Ok(UndoActionCommandResponse { outcome })
    }
}

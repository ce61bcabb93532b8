pub mod memory_action_history;

use async_trait::async_trait;
use crate::circulation::domain::model::ActionEntity;
use crate::core::library::LibraryResult;

// ActionHistory keeps completed stock changes, most recent first out
#[async_trait]
pub(crate) trait ActionHistory: Sync + Send {
    async fn push(&self, action: &ActionEntity) -> LibraryResult<usize>;

    async fn pop(&self) -> LibraryResult<ActionEntity>;

    async fn peek(&self) -> LibraryResult<ActionEntity>;

    async fn len(&self) -> LibraryResult<usize>;
}

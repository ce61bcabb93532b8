use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use crate::circulation::domain::model::ActionEntity;
use crate::circulation::repository::ActionHistory;
use crate::core::library::{LibraryError, LibraryResult};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryActionHistory {
    actions: Arc<RwLock<Vec<ActionEntity>>>,
}

impl MemoryActionHistory {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActionHistory for MemoryActionHistory {
    async fn push(&self, action: &ActionEntity) -> LibraryResult<usize> {
        let mut actions = self.actions.write().map_err(|_| LibraryError::lock_poisoned("actions"))?;
        actions.push(action.clone());
        Ok(actions.len())
    }

    async fn pop(&self) -> LibraryResult<ActionEntity> {
        let mut actions = self.actions.write().map_err(|_| LibraryError::lock_poisoned("actions"))?;
        actions.pop().ok_or_else(|| LibraryError::empty("nothing to undo"))
    }

    async fn peek(&self) -> LibraryResult<ActionEntity> {
        let actions = self.actions.read().map_err(|_| LibraryError::lock_poisoned("actions"))?;
        actions.last().cloned().ok_or_else(|| LibraryError::empty("nothing to undo"))
    }

    async fn len(&self) -> LibraryResult<usize> {
        let actions = self.actions.read().map_err(|_| LibraryError::lock_poisoned("actions"))?;
        Ok(actions.len())
    }
}

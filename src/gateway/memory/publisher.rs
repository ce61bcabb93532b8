use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events so tests can assert on them; clones share the buffer
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryPublisher {
    events: Arc<RwLock<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.events.read()
            .map(|events| events.iter().map(|e| e.name.to_string()).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let mut events = self.events.write().map_err(|_| LibraryError::lock_poisoned("events"))?;
        events.push(event.clone());
        Ok(())
    }
}

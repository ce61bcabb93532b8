use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event to the structured log
#[derive(Debug)]
pub(crate) struct LogPublisher {
    branch_id: String,
}

impl LogPublisher {
    pub(crate) fn new(branch_id: &str) -> Self {
        Self {
            branch_id: branch_id.to_string(),
        }
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(branch = self.branch_id.as_str(), event = event.name.as_str(), key = event.key.as_str(), "{}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[tokio::test]
    async fn test_should_publish() {
        let publisher = LogPublisher::new("test");
        let data = HashMap::from([("stock", 2)]);
        let event = DomainEvent::updated("book_borrowed", "circulation", "978-1", &HashMap::new(), &data).expect("build event");
        publisher.publish(&event).await.expect("should publish");
    }
}

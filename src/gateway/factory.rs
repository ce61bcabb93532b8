use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::LogPublisher;

pub(crate) async fn create_publisher(branch_id: &str) -> Box<dyn EventPublisher> {
    Box::new(LogPublisher::new(branch_id))
}

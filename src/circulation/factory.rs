use crate::books::factory::create_book_repository;
use crate::circulation::domain::CirculationService;
use crate::circulation::domain::service::CirculationServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;

pub(crate) async fn create_circulation_service(config: &Configuration, store: &RepositoryStore) -> Box<dyn CirculationService> {
    let book_repo = create_book_repository(store).await;
    let publisher = create_publisher(config.branch_id.as_str()).await;
    Box::new(CirculationServiceImpl::new(config, book_repo,
                                         Box::new(store.requests.clone()),
                                         Box::new(store.actions.clone()), publisher))
}

use crate::checkout::factory::create_checkout_repository;
use crate::core::domain::Configuration;
use crate::fees::factory::create_late_fee_calculator;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::service::PatronServiceImpl;
use crate::utils::memdb::MemoryClient;

pub(crate) async fn create_patron_service(config: &Configuration, client: &MemoryClient) -> Box<dyn PatronService> {
    let checkout_repo = create_checkout_repository(client).await;
    let calculator = create_late_fee_calculator(config, client).await;
    Box::new(PatronServiceImpl::new(config, checkout_repo, calculator))
}

use crate::catalog::factory::create_catalog_service;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::checkout::repository::CheckoutRepository;
use crate::checkout::repository::memory_checkout_repository::MemoryCheckoutRepository;
use crate::core::domain::Configuration;
use crate::fees::factory::create_late_fee_calculator;
use crate::utils::memdb::MemoryClient;

pub(crate) async fn create_checkout_repository(client: &MemoryClient) -> Box<dyn CheckoutRepository> {
    client.create_table("checkout").await;
    Box::new(MemoryCheckoutRepository::new(client.clone(), "checkout"))
}

pub(crate) async fn create_checkout_service(config: &Configuration, client: &MemoryClient) -> Box<dyn CheckoutService> {
    let checkout_repo = create_checkout_repository(client).await;
    let catalog_svc = create_catalog_service(config, client).await;
    let calculator = create_late_fee_calculator(config, client).await;
    Box::new(CheckoutServiceImpl::new(config, checkout_repo, catalog_svc, calculator))
}

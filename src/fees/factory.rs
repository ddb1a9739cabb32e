use crate::catalog::factory::create_catalog_service;
use crate::checkout::factory::create_checkout_repository;
use crate::core::domain::Configuration;
use crate::fees::domain::{LateFeeCalculator, LateFeePaymentService, LateFeeRefundService};
use crate::fees::domain::calculator::LateFeeCalculatorImpl;
use crate::fees::domain::payment::LateFeePaymentServiceImpl;
use crate::fees::domain::refund::LateFeeRefundServiceImpl;
use crate::utils::memdb::MemoryClient;

pub(crate) async fn create_late_fee_calculator(config: &Configuration, client: &MemoryClient) -> Box<dyn LateFeeCalculator> {
    let checkout_repo = create_checkout_repository(client).await;
    Box::new(LateFeeCalculatorImpl::new(config, checkout_repo))
}

pub(crate) async fn create_late_fee_payment_service(config: &Configuration, client: &MemoryClient) -> Box<dyn LateFeePaymentService> {
    let catalog_svc = create_catalog_service(config, client).await;
    let calculator = create_late_fee_calculator(config, client).await;
    Box::new(LateFeePaymentServiceImpl::new(catalog_svc, calculator))
}

pub(crate) fn create_late_fee_refund_service(config: &Configuration) -> Box<dyn LateFeeRefundService> {
    Box::new(LateFeeRefundServiceImpl::new(config))
}

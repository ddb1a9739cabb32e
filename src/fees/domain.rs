use async_trait::async_trait;
use rust_decimal::Decimal;
use crate::fees::domain::model::LateFeeAssessment;
use crate::fees::dto::{LateFeePaymentDto, LateFeeRefundDto};
use crate::payments::domain::PaymentGateway;

pub mod calculator;
pub mod model;
pub mod payment;
pub mod refund;

#[async_trait]
pub(crate) trait LateFeeCalculator: Sync + Send {
    async fn calculate(&self, patron_id: &str, book_id: &str) -> LateFeeAssessment;
}

// Failures are reported inside the returned outcome; the gateway is only reached once the
// fee is known to be positive.
#[async_trait]
pub(crate) trait LateFeePaymentService: Sync + Send {
    async fn pay_late_fees(&self, patron_id: &str, book_id: &str, gateway: &dyn PaymentGateway) -> LateFeePaymentDto;
}

#[async_trait]
pub(crate) trait LateFeeRefundService: Sync + Send {
    async fn refund_late_fee(&self, transaction_id: &str, amount: Decimal, gateway: &dyn PaymentGateway) -> LateFeeRefundDto;
}

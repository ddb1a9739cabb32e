use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use crate::core::library::LibraryResult;
use crate::patrons::is_valid_patron_id;
use crate::payments::domain::{is_valid_transaction_id, PaymentGateway, PaymentResponse, RefundResponse, TRANSACTION_PREFIX};

// SimulatedPaymentGateway stands in for the card processor in dev deployments. It never
// fails at the transport level.
#[derive(Debug, Clone)]
pub(crate) struct SimulatedPaymentGateway {
    limit: Decimal,
}

impl SimulatedPaymentGateway {
    pub(crate) fn new(limit: Decimal) -> Self {
        Self {
            limit,
        }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn process_payment(&self, patron_id: &str, amount: Decimal, description: &str) -> LibraryResult<PaymentResponse> {
        if amount <= Decimal::ZERO {
            return Ok(PaymentResponse::Declined { message: "Invalid amount: must be positive".to_string() });
        }
        if amount > self.limit {
            return Ok(PaymentResponse::Declined { message: "Payment declined: amount exceeds limit".to_string() });
        }
        if !is_valid_patron_id(patron_id) {
            return Ok(PaymentResponse::Declined { message: "Invalid patron ID format".to_string() });
        }
        let transaction_id = format!("{}{}_{}", TRANSACTION_PREFIX, patron_id, Utc::now().timestamp_millis());
        debug!(transaction_id = transaction_id.as_str(), description, "simulated payment approved");
        Ok(PaymentResponse::Approved {
            message: format!("Payment of ${:.2} processed successfully", amount),
            transaction_id,
        })
    }

    async fn refund_payment(&self, transaction_id: &str, amount: Decimal) -> LibraryResult<RefundResponse> {
        if !is_valid_transaction_id(transaction_id) {
            return Ok(RefundResponse::Declined { message: "Invalid transaction ID".to_string() });
        }
        if amount <= Decimal::ZERO {
            return Ok(RefundResponse::Declined { message: "Invalid refund amount".to_string() });
        }
        let refund_id = format!("refund_{}_{}", transaction_id, Utc::now().timestamp_millis());
        Ok(RefundResponse::Refunded {
            message: format!("Refund of ${:.2} processed successfully. Refund ID: {}", amount, refund_id),
        })
    }
}

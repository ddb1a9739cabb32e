use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::fees::domain::LateFeeRefundService;
use crate::fees::dto::LateFeeRefundDto;
use crate::payments::domain::PaymentGateway;

pub(crate) struct RefundLateFeeCommand {
    refund_service: Box<dyn LateFeeRefundService>,
    gateway: Box<dyn PaymentGateway>,
}

impl RefundLateFeeCommand {
    pub(crate) fn new(refund_service: Box<dyn LateFeeRefundService>, gateway: Box<dyn PaymentGateway>) -> Self {
        Self {
            refund_service,
            gateway,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefundLateFeeCommandRequest {
    pub(crate) transaction_id: String,
    pub(crate) amount: Decimal,
}

#[derive(Debug, Serialize)]
pub(crate) struct RefundLateFeeCommandResponse {
    pub refund: LateFeeRefundDto,
}

#[async_trait]
impl Command<RefundLateFeeCommandRequest, RefundLateFeeCommandResponse> for RefundLateFeeCommand {
    async fn execute(&self, req: RefundLateFeeCommandRequest) -> Result<RefundLateFeeCommandResponse, CommandError> {
        let refund = self.refund_service.refund_late_fee(
            req.transaction_id.as_str(), req.amount, self.gateway.as_ref()).await;
        Ok(RefundLateFeeCommandResponse { refund })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::fees::command::refund_late_fee_cmd::{RefundLateFeeCommand, RefundLateFeeCommandRequest};
    use crate::fees::factory::create_late_fee_refund_service;
    use crate::payments::factory::create_payment_gateway;

    fn build_command() -> RefundLateFeeCommand {
        let config = Configuration::new("test");
        RefundLateFeeCommand::new(create_late_fee_refund_service(&config), create_payment_gateway(&config))
    }

    #[tokio::test]
    async fn test_should_run_refund_late_fee_with_simulated_gateway() {
        let res = build_command().execute(RefundLateFeeCommandRequest {
            transaction_id: "txn_123".to_string(),
            amount: dec!(4.00),
        }).await.expect("should refund");
        assert!(res.refund.success);
        assert!(res.refund.message.starts_with("Refund of $4.00 processed successfully. Refund ID: refund_txn_123_"));
    }

    #[tokio::test]
    async fn test_should_parse_refund_request() {
        let req: RefundLateFeeCommandRequest = serde_json::from_value(serde_json::json!({
            "transaction_id": "alessio was here",
            "amount": "4.00",
        })).expect("should parse request");
        let res = build_command().execute(req).await.expect("should refund");
        assert!(!res.refund.success);
        assert!(res.refund.message.contains("Invalid transaction ID"));
    }
}

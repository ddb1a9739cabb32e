use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{info, warn};
use crate::core::domain::Configuration;
use crate::fees::domain::LateFeeRefundService;
use crate::fees::dto::LateFeeRefundDto;
use crate::payments::domain::{is_valid_transaction_id, PaymentGateway, RefundResponse};

pub(crate) struct LateFeeRefundServiceImpl {
    max_late_fee: Decimal,
}

impl LateFeeRefundServiceImpl {
    pub(crate) fn new(config: &Configuration) -> Self {
        Self {
            max_late_fee: config.max_late_fee,
        }
    }

    fn validate(&self, transaction_id: &str, amount: Decimal) -> Result<(), &'static str> {
        if !is_valid_transaction_id(transaction_id) {
            return Err("Invalid transaction ID.");
        }
        if amount <= Decimal::ZERO {
            return Err("Refund amount must be greater than 0.");
        }
        if amount > self.max_late_fee {
            return Err("Refund amount exceeds maximum late fee.");
        }
        Ok(())
    }
}

#[async_trait]
impl LateFeeRefundService for LateFeeRefundServiceImpl {
    async fn refund_late_fee(&self, transaction_id: &str, amount: Decimal, gateway: &dyn PaymentGateway) -> LateFeeRefundDto {
        if let Err(message) = self.validate(transaction_id, amount) {
            return LateFeeRefundDto::failed(message);
        }
        match gateway.refund_payment(transaction_id, amount).await {
            Ok(RefundResponse::Refunded { message }) => {
                info!(transaction_id, amount = amount.to_string().as_str(), "late fee refunded");
                LateFeeRefundDto::succeeded(message.as_str())
            }
            Ok(RefundResponse::Declined { message }) => {
                info!(transaction_id, reason = message.as_str(), "late fee refund declined");
                LateFeeRefundDto::failed(format!("Refund failed: {}", message).as_str())
            }
            Err(err) => {
                warn!(transaction_id, error = err.to_string().as_str(), "payment processor unreachable");
                LateFeeRefundDto::failed(format!("Refund processing error: {}", err.message()).as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use crate::core::domain::Configuration;
    use crate::fees::domain::LateFeeRefundService;
    use crate::fees::domain::refund::LateFeeRefundServiceImpl;
    use crate::payments::gateway::scripted_gateway::{RefundCall, ScriptedPaymentGateway};

    fn build_service() -> LateFeeRefundServiceImpl {
        LateFeeRefundServiceImpl::new(&Configuration::new("test"))
    }

    #[tokio::test]
    async fn test_should_refund_late_fee() {
        let svc = build_service();
        let gateway = ScriptedPaymentGateway::approving("txn_123",
                                                        "Refund of $4.00 processed successfully. Refund ID: refund_txn_123");
        let res = svc.refund_late_fee("txn_123", dec!(4.00), &gateway).await;
        assert!(res.success);
        assert_eq!("Refund of $4.00 processed successfully. Refund ID: refund_txn_123", res.message.as_str());
        assert_eq!(vec![RefundCall { transaction_id: "txn_123".to_string(), amount: dec!(4.00) }], gateway.refund_calls());
    }

    #[tokio::test]
    async fn test_should_refund_up_to_fee_cap() {
        let svc = build_service();
        let gateway = ScriptedPaymentGateway::approving("txn_123", "ok");
        assert!(svc.refund_late_fee("txn_123", dec!(15.00), &gateway).await.success);
        assert!(svc.refund_late_fee("txn_123", dec!(0.01), &gateway).await.success);
        assert_eq!(2, gateway.refund_calls().len());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_refunds_without_gateway() {
        let svc = build_service();
        let gateway = ScriptedPaymentGateway::approving("txn_123", "ok");
        let cases = vec![
            ("txn_123", dec!(-4.00), "Refund amount must be greater than 0."),
            ("txn_123", dec!(0), "Refund amount must be greater than 0."),
            ("txn_123", dec!(20.00), "Refund amount exceeds maximum late fee."),
            ("txn_123", dec!(15.01), "Refund amount exceeds maximum late fee."),
            ("", dec!(4.00), "Invalid transaction ID."),
            ("alessio was here", dec!(4.00), "Invalid transaction ID."),
            ("txn_", dec!(4.00), "Invalid transaction ID."),
        ];
        for (transaction_id, amount, expected) in cases {
            let res = svc.refund_late_fee(transaction_id, amount, &gateway).await;
            assert!(!res.success);
            assert_eq!(expected, res.message.as_str());
        }
        assert!(gateway.refund_calls().is_empty());
    }

    #[tokio::test]
    async fn test_should_report_declined_refund() {
        let svc = build_service();
        let gateway = ScriptedPaymentGateway::declining("Invalid refund amount");
        let res = svc.refund_late_fee("txn_123", dec!(4.00), &gateway).await;
        assert!(!res.success);
        assert_eq!("Refund failed: Invalid refund amount", res.message.as_str());
    }

    #[tokio::test]
    async fn test_should_report_refund_processing_error() {
        let svc = build_service();
        let gateway = ScriptedPaymentGateway::disconnected();
        let res = svc.refund_late_fee("txn_123", dec!(4.00), &gateway).await;
        assert!(!res.success);
        assert!(res.message.starts_with("Refund processing error:"));
        assert_eq!(1, gateway.refund_calls().len());
    }
}

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

pub const TRANSACTION_PREFIX: &str = "txn_";

// PaymentResponse is the answer of a reachable payment processor.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) enum PaymentResponse {
    Approved {
        transaction_id: String,
        message: String,
    },
    Declined {
        message: String,
    },
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) enum RefundResponse {
    Refunded {
        message: String,
    },
    Declined {
        message: String,
    },
}

/// Port to the external payment processor.
///
/// A decline is an ordinary `Ok` response. `Err` is reserved for connectivity or transport
/// failures, reported as `LibraryError::CurrentlyUnavailable`; callers must not retry them.
#[async_trait]
pub(crate) trait PaymentGateway: Sync + Send {
    async fn process_payment(&self, patron_id: &str, amount: Decimal, description: &str) -> LibraryResult<PaymentResponse>;
    async fn refund_payment(&self, transaction_id: &str, amount: Decimal) -> LibraryResult<RefundResponse>;
}

// transaction ids look like txn_<suffix>, the suffix made of ascii alphanumerics, '_' or '-'
pub fn is_valid_transaction_id(transaction_id: &str) -> bool {
    match transaction_id.strip_prefix(TRANSACTION_PREFIX) {
        Some(suffix) => !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::payments::domain::is_valid_transaction_id;

    #[tokio::test]
    async fn test_should_validate_transaction_id() {
        assert!(is_valid_transaction_id("txn_123"));
        assert!(is_valid_transaction_id("txn_123456_1700000000"));
        assert!(is_valid_transaction_id("txn_a-b_C"));
        assert!(!is_valid_transaction_id("txn_"));
        assert!(!is_valid_transaction_id(""));
        assert!(!is_valid_transaction_id("alessio was here"));
        assert!(!is_valid_transaction_id("txn_12 3"));
        assert!(!is_valid_transaction_id("TXN_123"));
        assert!(!is_valid_transaction_id("refund_txn_123"));
    }
}

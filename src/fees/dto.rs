use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::fees::domain::model::LateFeeAssessment;

// LateFeeResultDto is the caller-visible result of a fee calculation.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct LateFeeResultDto {
    pub fee_amount: Decimal,
    pub days_overdue: i64,
    pub status: String,
}

impl LateFeeResultDto {
    pub fn is_success(&self) -> bool {
        LateFeeAssessment::zero().status() == self.status
    }
}

impl From<&LateFeeAssessment> for LateFeeResultDto {
    fn from(other: &LateFeeAssessment) -> Self {
        Self {
            fee_amount: other.fee_amount(),
            days_overdue: other.days_overdue(),
            status: other.status(),
        }
    }
}

// LateFeePaymentDto carries a transaction id only when the payment went through.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct LateFeePaymentDto {
    pub success: bool,
    pub message: String,
    pub transaction_id: Option<String>,
}

impl LateFeePaymentDto {
    pub fn succeeded(message: &str, transaction_id: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            transaction_id: Some(transaction_id.to_string()),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            transaction_id: None,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct LateFeeRefundDto {
    pub success: bool,
    pub message: String,
}

impl LateFeeRefundDto {
    pub fn succeeded(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::model::CheckoutEntity;
use crate::core::library::CheckoutStatus;
use crate::utils::date::{opt_serializer, serializer};


// CheckoutDto abstracts the borrow record of a book copy by a patron.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct CheckoutDto {
    pub checkout_id: String,
    pub version: i64,
    pub branch_id: String,
    pub book_id: String,
    pub patron_id: String,
    pub checkout_status: CheckoutStatus,
    #[serde(with = "serializer")]
    pub checkout_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    #[serde(with = "opt_serializer")]
    pub returned_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_overdue: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl From<&CheckoutEntity> for CheckoutDto {
    fn from(other: &CheckoutEntity) -> CheckoutDto {
        CheckoutDto {
            checkout_id: other.checkout_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            book_id: other.book_id.to_string(),
            patron_id: other.patron_id.to_string(),
            checkout_status: other.checkout_status,
            checkout_at: other.checkout_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
            is_overdue: other.is_overdue,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&CheckoutDto> for CheckoutEntity {
    fn from(other: &CheckoutDto) -> CheckoutEntity {
        CheckoutEntity {
            checkout_id: other.checkout_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            book_id: other.book_id.to_string(),
            patron_id: other.patron_id.to_string(),
            checkout_status: other.checkout_status,
            checkout_at: other.checkout_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
            is_overdue: other.is_overdue,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

// BorrowReceiptDto is returned when a book is borrowed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BorrowReceiptDto {
    pub checkout: CheckoutDto,
    pub message: String,
}

// ReturnReceiptDto carries the late fee owed at the time of return.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct ReturnReceiptDto {
    pub checkout: CheckoutDto,
    pub fee_amount: Decimal,
    pub days_overdue: i64,
    pub message: String,
}


#[cfg(test)]
mod tests {
    use crate::checkout::domain::model::CheckoutEntity;
    use crate::checkout::dto::CheckoutDto;
    use crate::core::library::CheckoutStatus;

    #[tokio::test]
    async fn test_should_convert_checkout() {
        let mut entity = CheckoutEntity::new("test", "book1", "123456", 14);
        entity.is_overdue = true;
        let checkout = CheckoutDto::from(&entity);
        assert_eq!("book1", checkout.book_id.as_str());
        assert_eq!("123456", checkout.patron_id.as_str());
        assert_eq!(CheckoutStatus::CheckedOut, checkout.checkout_status);
        assert!(checkout.is_overdue);
        assert_eq!(entity, CheckoutEntity::from(&checkout));
    }

    #[tokio::test]
    async fn test_should_serialize_checkout() {
        let checkout = CheckoutDto::from(&CheckoutEntity::new("test", "book1", "123456", 14));
        let val = serde_json::to_value(&checkout).expect("should serialize");
        assert!(val["returned_at"].is_null());
        let loaded: CheckoutDto = serde_json::from_value(val).expect("should deserialize");
        assert_eq!(checkout, loaded);
    }
}

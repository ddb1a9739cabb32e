use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::CheckoutStatus;
use crate::utils::date::{opt_serializer, serializer};

// CheckoutEntity abstracts the borrow record of a book copy by a patron.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct CheckoutEntity {
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
    // maintained by the repository when borrowed records are read
    #[serde(default)]
    pub is_overdue: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl CheckoutEntity {
    pub fn new(branch_id: &str, book_id: &str, patron_id: &str, loan_days: i64) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            checkout_id: Uuid::new_v4().to_string(),
            version: 0,
            branch_id: branch_id.to_string(),
            book_id: book_id.to_string(),
            patron_id: patron_id.to_string(),
            checkout_status: CheckoutStatus::CheckedOut,
            checkout_at: now,
            due_at: now + Duration::days(loan_days),
            returned_at: None,
            is_overdue: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn overdue_at(&self, now: NaiveDateTime) -> bool {
        self.returned_at.is_none() && now > self.due_at
    }
}

impl Identifiable for CheckoutEntity {
    fn id(&self) -> String {
        self.checkout_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::{CheckoutDto, ReturnReceiptDto};
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    patron_id: String,
    book_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub checkout: CheckoutDto,
    pub fee_amount: Decimal,
    pub days_overdue: i64,
    pub message: String,
}

impl From<ReturnReceiptDto> for ReturnBookCommandResponse {
    fn from(other: ReturnReceiptDto) -> Self {
        Self {
            checkout: other.checkout,
            fee_amount: other.fee_amount,
            days_overdue: other.days_overdue,
            message: other.message,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.checkout_service.returned(req.patron_id.as_str(), req.book_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::from)
    }
}

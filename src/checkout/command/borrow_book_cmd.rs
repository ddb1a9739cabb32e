use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::{BorrowReceiptDto, CheckoutDto};
use crate::core::command::{Command, CommandError};

pub(crate) struct BorrowBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl BorrowBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BorrowBookCommandRequest {
    patron_id: String,
    book_id: String,
}

impl BorrowBookCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct BorrowBookCommandResponse {
    pub checkout: CheckoutDto,
    pub message: String,
}

impl From<BorrowReceiptDto> for BorrowBookCommandResponse {
    fn from(other: BorrowReceiptDto) -> Self {
        Self {
            checkout: other.checkout,
            message: other.message,
        }
    }
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        self.checkout_service.borrow(req.patron_id.as_str(), req.book_id.as_str())
            .await.map_err(CommandError::from).map(BorrowBookCommandResponse::from)
    }
}

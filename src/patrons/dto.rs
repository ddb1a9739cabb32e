use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::checkout::dto::CheckoutDto;
use crate::fees::dto::LateFeeResultDto;

// BorrowedBookDto pairs a current borrow record with the late fee it has accrued.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BorrowedBookDto {
    pub checkout: CheckoutDto,
    pub late_fee: LateFeeResultDto,
}

// PatronReportDto summarizes the books a patron holds and what they owe.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct PatronReportDto {
    pub patron_id: String,
    pub borrow_count: usize,
    pub borrowed_books: Vec<BorrowedBookDto>,
    pub total_late_fees: Decimal,
    pub status: String,
}

impl PatronReportDto {
    pub fn new(patron_id: &str, borrowed_books: Vec<BorrowedBookDto>) -> Self {
        let total_late_fees = borrowed_books.iter().map(|b| b.late_fee.fee_amount).sum();
        Self {
            patron_id: patron_id.to_string(),
            borrow_count: borrowed_books.len(),
            borrowed_books,
            total_late_fees,
            status: "Successfully generated patron report!".to_string(),
        }
    }
}

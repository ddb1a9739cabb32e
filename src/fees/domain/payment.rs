use async_trait::async_trait;
use tracing::{info, warn};
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryError;
use crate::fees::domain::{LateFeeCalculator, LateFeePaymentService};
use crate::fees::domain::model::LateFeeAssessment;
use crate::fees::dto::LateFeePaymentDto;
use crate::patrons::{is_valid_patron_id, INVALID_PATRON_MESSAGE};
use crate::payments::domain::{PaymentGateway, PaymentResponse};

const DECLINED: &str = "payment declined";

pub(crate) struct LateFeePaymentServiceImpl {
    catalog_service: Box<dyn CatalogService>,
    calculator: Box<dyn LateFeeCalculator>,
}

impl LateFeePaymentServiceImpl {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>, calculator: Box<dyn LateFeeCalculator>) -> Self {
        Self {
            catalog_service,
            calculator,
        }
    }
}

#[async_trait]
impl LateFeePaymentService for LateFeePaymentServiceImpl {
    async fn pay_late_fees(&self, patron_id: &str, book_id: &str, gateway: &dyn PaymentGateway) -> LateFeePaymentDto {
        if !is_valid_patron_id(patron_id) {
            return LateFeePaymentDto::failed(INVALID_PATRON_MESSAGE);
        }
        let book = match self.catalog_service.find_book_by_id(book_id).await {
            Ok(book) => book,
            Err(LibraryError::NotFound { .. }) => return LateFeePaymentDto::failed("Book not found."),
            Err(err) => return LateFeePaymentDto::failed(format!("Book lookup failed: {}", err.message()).as_str()),
        };
        let fee_amount = match self.calculator.calculate(patron_id, book_id).await {
            LateFeeAssessment::Assessed { fee_amount, .. } => fee_amount,
            other => return LateFeePaymentDto::failed(other.status().as_str()),
        };
        if fee_amount.is_zero() {
            return LateFeePaymentDto::failed("No late fees to pay for this book.");
        }

        let description = format!("Late fees for '{}'", book.title);
        match gateway.process_payment(patron_id, fee_amount, description.as_str()).await {
            Ok(PaymentResponse::Approved { transaction_id, message }) => {
                info!(patron_id, book_id, transaction_id = transaction_id.as_str(),
                    amount = fee_amount.to_string().as_str(), "late fees paid");
                LateFeePaymentDto::succeeded(format!("Payment successful! {}", message).as_str(), transaction_id.as_str())
            }
            Ok(PaymentResponse::Declined { message }) => {
                info!(patron_id, book_id, reason = message.as_str(), "late fee payment declined");
                LateFeePaymentDto::failed(declined_message(message.as_str()).as_str())
            }
            Err(err) => {
                warn!(patron_id, book_id, error = err.to_string().as_str(), "payment processor unreachable");
                LateFeePaymentDto::failed(format!("Payment processing error: {}", err.message()).as_str())
            }
        }
    }
}

// a reason that already starts with "Payment declined" only contributes its remainder
fn declined_message(reason: &str) -> String {
    let detail = match reason.get(..DECLINED.len()) {
        Some(head) if head.eq_ignore_ascii_case(DECLINED) => reason.get(DECLINED.len()..).unwrap_or_default().to_string(),
        _ if reason.is_empty() => String::new(),
        _ => format!(": {}", reason),
    };
    format!("Payment failed: {}{}", DECLINED, detail)
}

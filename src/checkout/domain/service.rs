use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::model::CheckoutEntity;
use crate::checkout::dto::{BorrowReceiptDto, CheckoutDto, ReturnReceiptDto};
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};
use crate::fees::domain::LateFeeCalculator;
use crate::fees::domain::model::LateFeeAssessment;
use crate::patrons::{is_valid_patron_id, INVALID_PATRON_MESSAGE};
use crate::utils::date::format_day;

pub(crate) struct CheckoutServiceImpl {
    branch_id: String,
    max_borrowed: usize,
    loan_days: i64,
    checkout_repository: Box<dyn CheckoutRepository>,
    catalog_service: Box<dyn CatalogService>,
    calculator: Box<dyn LateFeeCalculator>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(config: &Configuration, checkout_repository: Box<dyn CheckoutRepository>,
                      catalog_service: Box<dyn CatalogService>, calculator: Box<dyn LateFeeCalculator>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            max_borrowed: config.max_borrowed,
            loan_days: config.book_loan_days,
            checkout_repository,
            catalog_service,
            calculator,
        }
    }

    async fn find_book(&self, patron_id: &str, book_id: &str) -> LibraryResult<BookDto> {
        if !is_valid_patron_id(patron_id) {
            return Err(LibraryError::validation(INVALID_PATRON_MESSAGE, Some("400".to_string())));
        }
        match self.catalog_service.find_book_by_id(book_id).await {
            Err(LibraryError::NotFound { .. }) => Err(LibraryError::not_found("Book not found.")),
            other => other,
        }
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn borrow(&self, patron_id: &str, book_id: &str) -> LibraryResult<BorrowReceiptDto> {
        let book = self.find_book(patron_id, book_id).await?;
        if !book.is_available() {
            return Err(LibraryError::validation("This book is currently not available.", Some("400".to_string())));
        }
        if self.checkout_repository.count_borrowed_by_patron(patron_id).await? >= self.max_borrowed {
            return Err(LibraryError::validation(
                format!("You have reached the maximum borrowing limit of {} books.", self.max_borrowed).as_str(),
                Some("400".to_string())));
        }
        let checkout = CheckoutEntity::new(self.branch_id.as_str(), book.id().as_str(), patron_id, self.loan_days);
        self.checkout_repository.create(&checkout).await?;
        if let Err(err) = self.catalog_service.update_availability(book_id, -1).await {
            // the last copy went to a concurrent borrower
            if let Err(undo) = self.checkout_repository.delete(checkout.checkout_id.as_str()).await {
                warn!(patron_id, book_id, checkout_id = checkout.checkout_id.as_str(),
                    error = undo.to_string().as_str(), "failed to discard borrow record");
            }
            return Err(err);
        }
        info!(patron_id, book_id, checkout_id = checkout.checkout_id.as_str(), "book borrowed");
        Ok(BorrowReceiptDto {
            message: format!("Successfully borrowed \"{}\". Due date: {}.", book.title(), format_day(checkout.due_at)),
            checkout: CheckoutDto::from(&checkout),
        })
    }

    async fn returned(&self, patron_id: &str, book_id: &str) -> LibraryResult<ReturnReceiptDto> {
        let book = self.find_book(patron_id, book_id).await?;
        let (fee_amount, days_overdue) = match self.calculator.calculate(patron_id, book_id).await {
            LateFeeAssessment::Assessed { fee_amount, days_overdue } => (fee_amount, days_overdue),
            LateFeeAssessment::NotBorrowed => return Err(LibraryError::not_found("Book not borrowed by patron.")),
            other => return Err(LibraryError::runtime(other.status().as_str(), None)),
        };
        let returned_at = Utc::now().naive_utc();
        self.catalog_service.update_availability(book_id, 1).await?;
        let checkout = match self.checkout_repository.mark_returned(patron_id, book_id, returned_at).await {
            Ok(checkout) => checkout,
            Err(err) => {
                if let Err(undo) = self.catalog_service.update_availability(book_id, -1).await {
                    warn!(patron_id, book_id, error = undo.to_string().as_str(),
                        "failed to restore availability of unrecorded return");
                }
                return Err(err);
            }
        };
        info!(patron_id, book_id, checkout_id = checkout.checkout_id.as_str(),
            fee = fee_amount.to_string().as_str(), "book returned");
        Ok(ReturnReceiptDto {
            message: format!("Successfully returned \"{}\" on {}. ${:.2} owed in late fees.",
                             book.title, format_day(returned_at), fee_amount),
            checkout: CheckoutDto::from(&checkout),
            fee_amount,
            days_overdue,
        })
    }
}

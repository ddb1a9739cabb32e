use async_trait::async_trait;
use tracing::{info, warn};
use crate::checkout::dto::CheckoutDto;
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::fees::domain::LateFeeCalculator;
use crate::fees::dto::LateFeeResultDto;
use crate::patrons::{is_valid_patron_id, INVALID_PATRON_MESSAGE};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::{BorrowedBookDto, PatronReportDto};

pub(crate) struct PatronServiceImpl {
    checkout_repository: Box<dyn CheckoutRepository>,
    calculator: Box<dyn LateFeeCalculator>,
}

impl PatronServiceImpl {
    pub(crate) fn new(_config: &Configuration, checkout_repository: Box<dyn CheckoutRepository>,
                      calculator: Box<dyn LateFeeCalculator>) -> Self {
        PatronServiceImpl {
            checkout_repository,
            calculator,
        }
    }
}

#[async_trait]
impl PatronService for PatronServiceImpl {
    async fn status_report(&self, patron_id: &str) -> LibraryResult<PatronReportDto> {
        if !is_valid_patron_id(patron_id) {
            return Err(LibraryError::validation(INVALID_PATRON_MESSAGE, Some("400".to_string())));
        }
        let borrowed = self.checkout_repository.find_borrowed_by_patron(patron_id).await?;
        let mut books = vec![];
        for record in borrowed.iter() {
            let res = self.calculator.calculate(patron_id, record.book_id.as_str()).await;
            if !res.is_success() {
                warn!(patron_id, book_id = record.book_id.as_str(), status = res.status().as_str(),
                    "late fee calculation failed for report");
                return Err(LibraryError::runtime("Error in late fee calculation.", None));
            }
            books.push(BorrowedBookDto {
                checkout: CheckoutDto::from(record),
                late_fee: LateFeeResultDto::from(&res),
            });
        }
        let report = PatronReportDto::new(patron_id, books);
        info!(patron_id, borrow_count = report.borrow_count,
            total_late_fees = report.total_late_fees.to_string().as_str(), "generated patron report");
        Ok(report)
    }
}

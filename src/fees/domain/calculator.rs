use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::Configuration;
use crate::fees::domain::LateFeeCalculator;
use crate::fees::domain::model::{assess, LateFeeAssessment};
use crate::patrons::is_valid_patron_id;

pub(crate) struct LateFeeCalculatorImpl {
    config: Configuration,
    checkout_repository: Box<dyn CheckoutRepository>,
}

impl LateFeeCalculatorImpl {
    pub(crate) fn new(config: &Configuration, checkout_repository: Box<dyn CheckoutRepository>) -> Self {
        Self {
            config: config.clone(),
            checkout_repository,
        }
    }
}

#[async_trait]
impl LateFeeCalculator for LateFeeCalculatorImpl {
    async fn calculate(&self, patron_id: &str, book_id: &str) -> LateFeeAssessment {
        if !is_valid_patron_id(patron_id) {
            return LateFeeAssessment::InvalidPatron;
        }
        let borrowed = match self.checkout_repository.find_borrowed_by_patron(patron_id).await {
            Ok(borrowed) => borrowed,
            Err(err) => {
                warn!(patron_id, book_id, error = err.to_string().as_str(), "failed to read borrow records");
                return LateFeeAssessment::Unavailable { reason: err.message().to_string() };
            }
        };
        let Some(record) = borrowed.iter().find(|c| c.book_id == book_id) else {
            return LateFeeAssessment::NotBorrowed;
        };
        let res = assess(record, Utc::now().naive_utc(), &self.config);
        info!(patron_id, book_id, fee = res.fee_amount().to_string().as_str(),
            days_overdue = res.days_overdue(), "assessed late fee");
        res
    }
}

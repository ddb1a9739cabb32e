use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub max_borrowed: usize,
    pub book_loan_days: i64,
    // late fees: linear rate for the first fee_tier_days, then a steeper daily rate, capped
    pub fee_tier_days: i64,
    pub fee_tier_daily: Decimal,
    pub fee_daily_after_tier: Decimal,
    pub max_late_fee: Decimal,
    // largest single charge the simulated payment processor accepts
    pub payment_limit: Decimal,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_borrowed: 5,
            book_loan_days: 14,
            fee_tier_days: 7,
            fee_tier_daily: dec!(0.50),
            fee_daily_after_tier: dec!(1.00),
            max_late_fee: dec!(15.00),
            payment_limit: dec!(1000.00),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(5, config.max_borrowed);
        assert_eq!(14, config.book_loan_days);
        assert_eq!(7, config.fee_tier_days);
        assert_eq!(dec!(0.50), config.fee_tier_daily);
        assert_eq!(dec!(1.00), config.fee_daily_after_tier);
        assert_eq!(dec!(15.00), config.max_late_fee);
    }
}

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::model::CheckoutEntity;
use crate::core::domain::Configuration;

pub const CALCULATION_SUCCEEDED: &str = "Late fee calculation completed successfully.";
pub const CALCULATION_INVALID_PATRON: &str = "Late fee calculation failed: Invalid patron ID. Must be exactly 6 digits.";
pub const CALCULATION_NOT_BORROWED: &str = "Late fee calculation failed: book not borrowed by patron.";

// LateFeeAssessment is the outcome of a fee calculation for one borrowed book.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) enum LateFeeAssessment {
    Assessed {
        fee_amount: Decimal,
        days_overdue: i64,
    },
    InvalidPatron,
    NotBorrowed,
    // the borrow records could not be read
    Unavailable {
        reason: String,
    },
}

impl LateFeeAssessment {
    pub fn zero() -> Self {
        LateFeeAssessment::Assessed { fee_amount: Decimal::ZERO, days_overdue: 0 }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LateFeeAssessment::Assessed { .. })
    }

    pub fn fee_amount(&self) -> Decimal {
        match self {
            LateFeeAssessment::Assessed { fee_amount, .. } => *fee_amount,
            _ => Decimal::ZERO,
        }
    }

    pub fn days_overdue(&self) -> i64 {
        match self {
            LateFeeAssessment::Assessed { days_overdue, .. } => *days_overdue,
            _ => 0,
        }
    }

    pub fn status(&self) -> String {
        match self {
            LateFeeAssessment::Assessed { .. } => CALCULATION_SUCCEEDED.to_string(),
            LateFeeAssessment::InvalidPatron => CALCULATION_INVALID_PATRON.to_string(),
            LateFeeAssessment::NotBorrowed => CALCULATION_NOT_BORROWED.to_string(),
            LateFeeAssessment::Unavailable { reason } => format!("Late fee calculation failed: {}", reason),
        }
    }
}

/// Fee owed for a number of overdue days.
///
/// The first `fee_tier_days` cost `fee_tier_daily` each, every later day costs
/// `fee_daily_after_tier`, and the total never exceeds `max_late_fee`.
pub(crate) fn fee_for_days(days_overdue: i64, config: &Configuration) -> Decimal {
    if days_overdue <= 0 {
        return Decimal::ZERO;
    }
    let fee = if days_overdue <= config.fee_tier_days {
        Decimal::from(days_overdue) * config.fee_tier_daily
    } else {
        Decimal::from(config.fee_tier_days) * config.fee_tier_daily
            + Decimal::from(days_overdue - config.fee_tier_days) * config.fee_daily_after_tier
    };
    fee.min(config.max_late_fee).round_dp(2)
}

// Only records flagged overdue by the repository accrue a fee; days are whole days past due.
pub(crate) fn assess(record: &CheckoutEntity, now: NaiveDateTime, config: &Configuration) -> LateFeeAssessment {
    if !record.is_overdue {
        return LateFeeAssessment::zero();
    }
    let days_overdue = (now - record.due_at).num_days().max(0);
    LateFeeAssessment::Assessed {
        fee_amount: fee_for_days(days_overdue, config),
        days_overdue,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use crate::checkout::domain::model::CheckoutEntity;
    use crate::core::domain::Configuration;
    use crate::fees::domain::model::{assess, fee_for_days, LateFeeAssessment, CALCULATION_SUCCEEDED};

    #[tokio::test]
    async fn test_should_charge_half_per_day_in_first_week() {
        let config = Configuration::new("test");
        for days in 0..=7 {
            assert_eq!(Decimal::from(days) * dec!(0.50), fee_for_days(days, &config));
        }
        assert_eq!(dec!(3.50), fee_for_days(7, &config));
    }

    #[tokio::test]
    async fn test_should_charge_full_rate_after_first_week() {
        let config = Configuration::new("test");
        assert_eq!(dec!(4.50), fee_for_days(8, &config));
        assert_eq!(dec!(6.50), fee_for_days(10, &config));
        assert_eq!(dec!(14.50), fee_for_days(18, &config));
    }

    #[tokio::test]
    async fn test_should_cap_fee() {
        let config = Configuration::new("test");
        assert_eq!(dec!(15.00), fee_for_days(19, &config));
        assert_eq!(dec!(15.00), fee_for_days(45, &config));
        assert_eq!(dec!(15.00), fee_for_days(10_000, &config));
        assert_eq!(Decimal::ZERO, fee_for_days(-3, &config));
    }

    #[tokio::test]
    async fn test_should_not_charge_records_not_flagged_overdue() {
        let config = Configuration::new("test");
        let mut record = CheckoutEntity::new("test", "book1", "123456", 14);
        record.due_at = Utc::now().naive_utc() - Duration::days(30);
        record.is_overdue = false;
        let res = assess(&record, Utc::now().naive_utc(), &config);
        assert_eq!(LateFeeAssessment::zero(), res);
        assert_eq!(Decimal::ZERO, res.fee_amount());
    }

    #[tokio::test]
    async fn test_should_assess_whole_days_overdue() {
        let config = Configuration::new("test");
        let now = Utc::now().naive_utc();
        let mut record = CheckoutEntity::new("test", "book1", "123456", 14);
        record.due_at = now - Duration::days(4) - Duration::hours(23);
        record.is_overdue = true;
        let res = assess(&record, now, &config);
        assert_eq!(LateFeeAssessment::Assessed { fee_amount: dec!(2.00), days_overdue: 4 }, res);
        assert_eq!(CALCULATION_SUCCEEDED, res.status().as_str());

        record.due_at = now - Duration::hours(5);
        assert_eq!(LateFeeAssessment::zero(), assess(&record, now, &config));
    }

    #[tokio::test]
    async fn test_should_report_failure_status() {
        assert!(!LateFeeAssessment::InvalidPatron.is_success());
        assert!(LateFeeAssessment::InvalidPatron.status().contains("Invalid patron ID"));
        assert!(LateFeeAssessment::NotBorrowed.status().ends_with("book not borrowed by patron."));
        let unavailable = LateFeeAssessment::Unavailable { reason: "table checkout does not exist".to_string() };
        assert_eq!("Late fee calculation failed: table checkout does not exist", unavailable.status().as_str());
        assert_eq!(0, unavailable.days_overdue());
    }
}

pub mod calculate_late_fee_cmd;
pub mod pay_late_fees_cmd;
pub mod refund_late_fee_cmd;

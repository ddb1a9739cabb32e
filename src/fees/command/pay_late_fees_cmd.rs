use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::fees::domain::LateFeePaymentService;
use crate::fees::dto::LateFeePaymentDto;
use crate::payments::domain::PaymentGateway;

pub(crate) struct PayLateFeesCommand {
    payment_service: Box<dyn LateFeePaymentService>,
    gateway: Box<dyn PaymentGateway>,
}

impl PayLateFeesCommand {
    pub(crate) fn new(payment_service: Box<dyn LateFeePaymentService>, gateway: Box<dyn PaymentGateway>) -> Self {
        Self {
            payment_service,
            gateway,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PayLateFeesCommandRequest {
    pub(crate) patron_id: String,
    pub(crate) book_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PayLateFeesCommandResponse {
    pub payment: LateFeePaymentDto,
}

#[async_trait]
impl Command<PayLateFeesCommandRequest, PayLateFeesCommandResponse> for PayLateFeesCommand {
    async fn execute(&self, req: PayLateFeesCommandRequest) -> Result<PayLateFeesCommandResponse, CommandError> {
        let payment = self.payment_service.pay_late_fees(
            req.patron_id.as_str(), req.book_id.as_str(), self.gateway.as_ref()).await;
        Ok(PayLateFeesCommandResponse { payment })
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::fees::domain::LateFeeCalculator;
use crate::fees::dto::LateFeeResultDto;

pub(crate) struct CalculateLateFeeCommand {
    calculator: Box<dyn LateFeeCalculator>,
}

impl CalculateLateFeeCommand {
    pub(crate) fn new(calculator: Box<dyn LateFeeCalculator>) -> Self {
        Self {
            calculator,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CalculateLateFeeCommandRequest {
    pub(crate) patron_id: String,
    pub(crate) book_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CalculateLateFeeCommandResponse {
    pub late_fee: LateFeeResultDto,
}

#[async_trait]
impl Command<CalculateLateFeeCommandRequest, CalculateLateFeeCommandResponse> for CalculateLateFeeCommand {
    async fn execute(&self, req: CalculateLateFeeCommandRequest) -> Result<CalculateLateFeeCommandResponse, CommandError> {
        let res = self.calculator.calculate(req.patron_id.as_str(), req.book_id.as_str()).await;
        Ok(CalculateLateFeeCommandResponse { late_fee: LateFeeResultDto::from(&res) })
    }
}

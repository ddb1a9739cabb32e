use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronReportDto;

pub(crate) struct GetPatronReportCommand {
    patron_service: Box<dyn PatronService>,
}

impl GetPatronReportCommand {
    pub(crate) fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetPatronReportCommandRequest {
    pub(crate) patron_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetPatronReportCommandResponse {
    pub report: PatronReportDto,
}

#[async_trait]
impl Command<GetPatronReportCommandRequest, GetPatronReportCommandResponse> for GetPatronReportCommand {
    async fn execute(&self, req: GetPatronReportCommandRequest) -> Result<GetPatronReportCommandResponse, CommandError> {
        self.patron_service.status_report(req.patron_id.as_str())
            .await.map_err(CommandError::from).map(|report| GetPatronReportCommandResponse { report })
    }
}

use axum::{
    extract::State,
    response::Json,
};
use serde_json::{Value};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::patrons::command::get_patron_report_cmd::{GetPatronReportCommand, GetPatronReportCommandRequest, GetPatronReportCommandResponse};
use crate::patrons::factory;

pub(crate) async fn patron_report(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<GetPatronReportCommandResponse>, ServerError> {
    let req: GetPatronReportCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = factory::create_patron_service(&state.config, &state.client).await;
    let res = GetPatronReportCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

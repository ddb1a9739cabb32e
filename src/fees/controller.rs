use axum::{
    extract::State,
    response::Json,
};
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::fees::command::calculate_late_fee_cmd::{CalculateLateFeeCommand, CalculateLateFeeCommandRequest, CalculateLateFeeCommandResponse};
use crate::fees::command::pay_late_fees_cmd::{PayLateFeesCommand, PayLateFeesCommandRequest, PayLateFeesCommandResponse};
use crate::fees::command::refund_late_fee_cmd::{RefundLateFeeCommand, RefundLateFeeCommandRequest, RefundLateFeeCommandResponse};
use crate::fees::factory;
use crate::payments::factory::create_payment_gateway;

pub(crate) async fn calculate_late_fee(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<CalculateLateFeeCommandResponse>, ServerError> {
    let req: CalculateLateFeeCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let calculator = factory::create_late_fee_calculator(&state.config, &state.client).await;
    let res = CalculateLateFeeCommand::new(calculator).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn pay_late_fees(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<PayLateFeesCommandResponse>, ServerError> {
    let req: PayLateFeesCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = factory::create_late_fee_payment_service(&state.config, &state.client).await;
    let res = PayLateFeesCommand::new(svc, create_payment_gateway(&state.config)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn refund_late_fee(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<RefundLateFeeCommandResponse>, ServerError> {
    let req: RefundLateFeeCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = factory::create_late_fee_refund_service(&state.config);
    let res = RefundLateFeeCommand::new(svc, create_payment_gateway(&state.config)).execute(req).await?;
    Ok(Json(res))
}

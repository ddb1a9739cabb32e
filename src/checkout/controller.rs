use axum::{
    extract::State,
    response::Json,
};
use serde_json::{Value};
use crate::checkout::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest, BorrowBookCommandResponse};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

async fn build_service(state: AppState) -> Box<dyn CheckoutService> {
    factory::create_checkout_service(&state.config, &state.client).await
}

pub(crate) async fn borrow_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<BorrowBookCommandResponse>, ServerError> {
    let req: BorrowBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = BorrowBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req: ReturnBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = ReturnBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

include!("../../lib.rs");
use axum::{
    routing::{get, post},
    Router,
};
use lambda_http::{run, Error};
use crate::catalog::controller::{add_book, find_book_by_id, search_books};
use crate::checkout::controller::{borrow_book, return_book};
use crate::core::controller::AppState;
use crate::fees::controller::{calculate_late_fee, pay_late_fees, refund_late_fee};
use crate::patrons::controller::patron_report;
use crate::utils::logs::setup_tracing;
use crate::utils::memdb::MemoryClient;

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    // all routes share one in-process store, so the whole lifecycle runs in a single function
    let state = if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        AppState::new("dev", MemoryClient::new())
    } else {
        AppState::new("prod", MemoryClient::new())
    };

    let app = Router::new()
        .route("/catalog/books", post(add_book))
        .route("/catalog/books/:id", get(find_book_by_id))
        .route("/catalog/search", post(search_books))
        .route("/checkout", post(borrow_book))
        .route("/checkout/return", post(return_book))
        .route("/fees/calculate", post(calculate_late_fee))
        .route("/fees/pay", post(pay_late_fees))
        .route("/fees/refund", post(refund_late_fee))
        .route("/patrons/report", post(patron_report))
        .with_state(state);

    run(app).await
}

// JSON log lines for the lambda runtime; CloudWatch adds the ingestion time.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // ANSI color codes show up as noise in CloudWatch logs.
        .with_ansi(false)
        .without_time()
        .json()
        .init();
}

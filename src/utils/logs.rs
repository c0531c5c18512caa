use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .json()
        .init();
}

// One line per request, routed or not, with the timestamp added by the subscriber.
pub async fn log_request<B>(req: Request<B>, next: Next<B>) -> Response {
    tracing::info!(method = %req.method(), path = req.uri().path(), "request");
    next.run(req).await
}

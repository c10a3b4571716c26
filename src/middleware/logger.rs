use axum::{http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{Span, info};
use uuid::Uuid;

pub async fn logger<B>(mut req: Request<B>, next: Next<B>) -> Response {
    // Attach a trace id to the request extensions so downstream handlers
    // can correlate their own log lines with this request.
    let trace_id = Uuid::new_v4();
    req.extensions_mut().insert(trace_id);
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let span = Span::current();
    span.record("trace_id", &tracing::field::display(trace_id));

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let elapsed = start.elapsed().as_millis();

    info!(trace_id = %trace_id, method = %method, uri = %uri, status = status, elapsed_ms = elapsed, "Request log");
    response
}

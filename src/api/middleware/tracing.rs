//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates the request tracing layer.
///
/// Each request gets an `INFO` span carrying method, URI and version. Arrival
/// is logged at `DEBUG`, completion at `INFO` with status and latency in
/// milliseconds, and 5xx responses at `ERROR`.
///
/// Rejected submissions still complete with `200 OK` (the error travels in
/// the JSON body), so they show up as ordinary responses here; the cause is
/// logged separately by [`crate::error::AppError`].
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/api/shorturl version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// INFO request{method=GET uri=/api/shorturl/1 version=HTTP/1.1}: finished processing request latency=1 ms status=302
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}

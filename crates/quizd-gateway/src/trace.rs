//! Per-request log line: remote address, method, URI.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};

/// Logs every inbound request before delegating. The remote address comes
/// from `ConnectInfo` when the server was built with connect-info; in-process
/// test requests have none and log `-`.
pub async fn log_request(req: Request, next: Next) -> Response {
    let remote = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.to_string())
        .unwrap_or_else(|| "-".into());
    tracing::info!(remote = %remote, method = %req.method(), uri = %req.uri(), "request");

    next.run(req).await
}

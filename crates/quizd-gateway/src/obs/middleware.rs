//! Request instrumentation middleware chain.
//!
//! Three layers, nested outer to inner: in-flight gauge, duration histogram,
//! outcome counter. The router applies them so the gauge brackets the whole
//! request lifetime (including injected sleeps), while the two inner layers
//! label on the status code actually written, forced ones included.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use prometheus::IntGauge;

use crate::app_state::AppState;

/// Scoped in-flight accounting. Increments on construction, decrements on
/// drop, so the decrement runs on every exit path including task abort.
struct InFlightGuard {
    gauge: IntGauge,
}

impl InFlightGuard {
    fn acquire(gauge: IntGauge) -> Self {
        gauge.inc();
        Self { gauge }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.gauge.dec();
    }
}

/// Outermost layer: count the request as in-flight for its whole duration.
pub async fn track_in_flight(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let _guard = InFlightGuard::acquire(state.metrics().api.in_flight.clone());
    next.run(req).await
}

/// Middle layer: time the request and observe elapsed seconds, labeled with
/// the final status code and method.
pub async fn track_duration(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let code = response.status().as_u16().to_string();
    state
        .metrics()
        .api
        .duration
        .with_label_values(&[&code, &method])
        .observe(start.elapsed().as_secs_f64());
    response
}

/// Innermost layer: count the completed request by status code and method.
pub async fn track_outcome(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().to_string();

    let response = next.run(req).await;

    let code = response.status().as_u16().to_string();
    state
        .metrics()
        .api
        .requests
        .with_label_values(&[&code, &method])
        .inc();
    response
}

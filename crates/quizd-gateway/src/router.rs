//! Axum router wiring.
//!
//! Handler routes go through the three-layer instrumentation chain; axum
//! applies later `.layer` calls outermost, so the order below nests
//! in-flight -> duration -> outcome around each handler. Ops routes
//! (`/healthz`, `/metrics`) stay outside the chain; the request log layer
//! wraps everything.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, handlers, obs, ops, trace};

pub fn build_router(state: AppState) -> Router {
    let instrumented = Router::new()
        .route("/", get(handlers::empty))
        .route("/ping", get(handlers::ping))
        .route("/quiz", get(handlers::present_quiz))
        .route("/answer", get(handlers::answer_quiz))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_outcome,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_duration,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_in_flight,
        ));

    Router::new()
        .merge(instrumented)
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .layer(middleware::from_fn(trace::log_request))
        .with_state(state)
}

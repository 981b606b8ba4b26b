//! Observability: Prometheus metric families and the request
//! instrumentation middleware chain.
//!
//! Metrics live on an explicitly constructed `prometheus::Registry` owned by
//! the app state; nothing registers into the process-global default registry.

pub mod metrics;
pub mod middleware;

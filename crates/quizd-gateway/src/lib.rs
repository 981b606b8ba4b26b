//! quizd gateway library entry.
//!
//! This crate wires the metrics registry, the instrumentation middleware
//! chain, the fault/delay hooks, and the quiz handlers into a cohesive HTTP
//! service. It is intended to be consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod faults;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod router;
pub mod trace;

//! quizd core: quiz domain model, scoring engine, and error types.
//!
//! This crate holds the decision logic of the service (grading, feedback
//! tier selection) and the shared error surface. It intentionally carries no
//! transport or runtime dependencies so it can be reused and tested without
//! an HTTP stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `QuizdError`/`Result` so production
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod quiz;

/// Shared result type.
pub use error::{QuizdError, Result};

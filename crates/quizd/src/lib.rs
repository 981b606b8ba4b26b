//! Top-level facade crate for quizd.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use quizd_core::*;
}

pub mod gateway {
    pub use quizd_gateway::*;
}

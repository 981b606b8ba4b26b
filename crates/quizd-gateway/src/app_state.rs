//! Shared application state for the quizd gateway.
//!
//! Holds the config, the question set, and the one process-wide metrics
//! registry. Constructed once at startup and cloned (cheaply) into every
//! handler and middleware layer.

use std::sync::Arc;

use quizd_core::error::Result;
use quizd_core::quiz::{self, Question};

use crate::config::GatewayConfig;
use crate::obs::metrics::Metrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    metrics: Metrics,
    questions: &'static [Question],
}

impl AppState {
    /// Build application state. Returns Result so main can handle metric
    /// registration failures gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let questions = quiz::question_set();
        let metrics = Metrics::new(&cfg.gateway.namespace, questions.len())?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics,
                questions,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &Metrics {
        &self.inner.metrics
    }

    pub fn questions(&self) -> &'static [Question] {
        self.inner.questions
    }
}

//! Metric families exported by the gateway.
//!
//! Two groups share one registry: `ApiMetrics` (the generic request
//! accounting driven by the middleware chain) and `QuizMetrics` (grading
//! side effects). Registration is fallible; a name collision surfaces as
//! `QuizdError::DuplicateMetric` instead of a panic.

use prometheus::core::Collector;
use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};

use quizd_core::error::{QuizdError, Result};

/// Request duration buckets in seconds.
const DURATION_BUCKETS: [f64; 6] = [0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

fn build<T>(r: prometheus::Result<T>) -> Result<T> {
    r.map_err(|e| QuizdError::Internal(format!("metric construction failed: {e}")))
}

fn register(registry: &Registry, c: Box<dyn Collector>, name: &str) -> Result<()> {
    registry.register(c).map_err(|e| match e {
        prometheus::Error::AlreadyReg => QuizdError::DuplicateMetric(name.to_string()),
        other => QuizdError::Internal(format!("metric registration failed: {other}")),
    })
}

/// Generic request accounting, driven by the middleware chain.
#[derive(Clone, Debug)]
pub struct ApiMetrics {
    /// Requests currently being served by the wrapped handlers.
    pub in_flight: IntGauge,
    /// Completed requests by final status code and method.
    pub requests: IntCounterVec,
    /// Request latency distribution by final status code and method.
    pub duration: HistogramVec,
}

impl ApiMetrics {
    pub fn new(namespace: &str, registry: &Registry) -> Result<Self> {
        let in_flight = build(IntGauge::with_opts(
            Opts::new(
                "api_in_flight_requests",
                "A gauge of requests currently being served by the wrapped handler.",
            )
            .namespace(namespace),
        ))?;
        let requests = build(IntCounterVec::new(
            Opts::new(
                "api_requests_total",
                "A counter for requests to the wrapped handler.",
            )
            .namespace(namespace),
            &["code", "method"],
        ))?;
        let duration = build(HistogramVec::new(
            HistogramOpts::new("api_requests_duration_seconds", "A histogram of latencies")
                .namespace(namespace)
                .buckets(DURATION_BUCKETS.to_vec()),
            &["code", "method"],
        ))?;

        register(registry, Box::new(in_flight.clone()), "api_in_flight_requests")?;
        register(registry, Box::new(requests.clone()), "api_requests_total")?;
        register(registry, Box::new(duration.clone()), "api_requests_duration_seconds")?;

        Ok(Self {
            in_flight,
            requests,
            duration,
        })
    }
}

/// Grading side effects: visits, per-question hit/miss, score distribution.
#[derive(Clone)]
pub struct QuizMetrics {
    /// Quiz form views.
    pub visits: IntCounter,
    /// Per-question outcome; `question` is the 1-based question number,
    /// `result` is `hit` or `miss`.
    pub answers: IntCounterVec,
    /// Distribution of submission scores over [0..N].
    pub score: Histogram,
}

impl QuizMetrics {
    pub fn new(namespace: &str, question_count: usize, registry: &Registry) -> Result<Self> {
        let visits = build(IntCounter::with_opts(
            Opts::new("quiz_visits_total", "How many times the quiz was viewed.")
                .namespace(namespace),
        ))?;
        let answers = build(IntCounterVec::new(
            Opts::new(
                "quiz_answers_total",
                "Per-question answer outcomes across all submissions.",
            )
            .namespace(namespace),
            &["question", "result"],
        ))?;
        // One bucket per attainable score: 0, 1, .., N.
        let buckets = build(prometheus::linear_buckets(0.0, 1.0, question_count + 1))?;
        let score = build(Histogram::with_opts(
            HistogramOpts::new("quiz_score", "Distribution of submission scores.")
                .namespace(namespace)
                .buckets(buckets),
        ))?;

        register(registry, Box::new(visits.clone()), "quiz_visits_total")?;
        register(registry, Box::new(answers.clone()), "quiz_answers_total")?;
        register(registry, Box::new(score.clone()), "quiz_score")?;

        Ok(Self {
            visits,
            answers,
            score,
        })
    }

    /// Record one answered question.
    pub fn record_answer(&self, question_number: usize, hit: bool) {
        let result = if hit { "hit" } else { "miss" };
        self.answers
            .with_label_values(&[&question_number.to_string(), result])
            .inc();
    }
}

/// The registry plus every metric family the gateway exports.
pub struct Metrics {
    registry: Registry,
    pub api: ApiMetrics,
    pub quiz: QuizMetrics,
}

impl Metrics {
    pub fn new(namespace: &str, question_count: usize) -> Result<Self> {
        let registry = Registry::new();
        let api = ApiMetrics::new(namespace, &registry)?;
        let quiz = QuizMetrics::new(namespace, question_count, &registry)?;
        Ok(Self {
            registry,
            api,
            quiz,
        })
    }

    /// Render every registered metric in Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buf = Vec::new();
        encoder
            .encode(&self.registry.gather(), &mut buf)
            .map_err(|e| QuizdError::Internal(format!("metrics encode failed: {e}")))?;
        String::from_utf8(buf)
            .map_err(|e| QuizdError::Internal(format!("metrics not utf-8: {e}")))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn duplicate_registration_is_reported() {
        let registry = Registry::new();
        ApiMetrics::new("t", &registry).unwrap();
        let err = ApiMetrics::new("t", &registry).expect_err("must collide");
        assert_eq!(err.client_code().as_str(), "DUPLICATE_METRIC");
    }

    #[test]
    fn render_includes_all_families() {
        let metrics = Metrics::new("t", 6).unwrap();
        metrics.api.requests.with_label_values(&["200", "GET"]).inc();
        metrics.quiz.visits.inc();
        metrics.quiz.score.observe(4.0);

        let body = metrics.render().unwrap();
        assert!(body.contains("t_api_requests_total"));
        assert!(body.contains("t_api_in_flight_requests 0"));
        assert!(body.contains("t_quiz_visits_total 1"));
        assert!(body.contains("t_quiz_score_count 1"));
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let metrics = Metrics::new("t", 6).unwrap();
        let answers = metrics.quiz.answers.clone();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let answers = answers.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        answers.with_label_values(&["1", "hit"]).inc();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(answers.with_label_values(&["1", "hit"]).get(), 8000);
    }
}

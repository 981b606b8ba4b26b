//! Caller-controlled delay and forced-status hooks.
//!
//! Both read optional query parameters and are evaluated before a handler's
//! normal logic, delay first. Either may short-circuit the request with a
//! ready response; the instrumentation chain still records whatever status
//! ends up written.

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use quizd_core::error::{QuizdError, Result};

/// Query parameter naming a delay in milliseconds.
const SLEEP_PARAM: &str = "sleep";
/// Query parameter naming a status code to force.
const FORCE_STATUS_PARAM: &str = "forceStatus";

/// Run both hooks in order. `Ok(Some(_))` means the hook produced the final
/// response and the handler must not continue.
pub async fn apply(params: &HashMap<String, String>) -> Result<Option<Response>> {
    sleep_if_needed(params).await?;
    force_status_if_needed(params)
}

/// Suspend this request's task for `sleep` milliseconds. A value that does
/// not parse as an integer is a client error (400 with a fixed diagnostic).
async fn sleep_if_needed(params: &HashMap<String, String>) -> Result<()> {
    if let Some(raw) = params.get(SLEEP_PARAM) {
        let ms: i64 = raw
            .parse()
            .map_err(|_| QuizdError::BadRequest("only integers allowed with 'sleep'".into()))?;
        // Negative values parse but mean no delay.
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms as u64)).await;
        }
    }
    Ok(())
}

/// Write exactly the requested status with a diagnostic body. A value that
/// does not parse, or that is not a writable HTTP status code, is an internal
/// fault and propagates as such.
fn force_status_if_needed(params: &HashMap<String, String>) -> Result<Option<Response>> {
    let Some(raw) = params.get(FORCE_STATUS_PARAM) else {
        return Ok(None);
    };

    let code: u16 = raw
        .parse()
        .map_err(|e| QuizdError::Internal(format!("cannot parse forceStatus: {e}")))?;
    let status = StatusCode::from_u16(code)
        .map_err(|e| QuizdError::Internal(format!("cannot force status {code}: {e}")))?;

    let body = format!("status forced to {code}\n");
    Ok(Some((status, body).into_response()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn absent_params_do_nothing() {
        assert!(apply(&params(&[])).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_sleep_is_a_client_error() {
        let err = apply(&params(&[("sleep", "abc")])).await.expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    }

    #[tokio::test]
    async fn forced_status_short_circuits() {
        let resp = apply(&params(&[("forceStatus", "503")]))
            .await
            .unwrap()
            .expect("must short-circuit");
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn malformed_force_status_is_internal() {
        let err = apply(&params(&[("forceStatus", "5xx")]))
            .await
            .expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "INTERNAL");
    }

    #[tokio::test]
    async fn unwritable_force_status_is_internal() {
        let err = apply(&params(&[("forceStatus", "42")]))
            .await
            .expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "INTERNAL");
    }
}

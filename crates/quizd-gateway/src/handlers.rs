//! Instrumented request handlers: probe, quiz form, quiz grading.

use std::collections::HashMap;
use std::fmt::Write;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};

use quizd_core::quiz::{self, AnswerSubmission, Question, Tier};

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::faults;

/// Catch-all: empty 200 body, exists so the instrumentation chain has a
/// cheap default target.
pub async fn empty() -> &'static str {
    ""
}

/// Probe endpoint. Consults the fault/delay hooks before answering.
pub async fn ping(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    if let Some(forced) = faults::apply(&params).await? {
        return Ok(forced);
    }

    Ok("pong\n".into_response())
}

/// Render the quiz form and count the visit.
pub async fn present_quiz(State(state): State<AppState>) -> Html<String> {
    state.metrics().quiz.visits.inc();
    Html(render_quiz_form(state.questions()))
}

/// Grade a submission, fold per-question outcomes and the score into the
/// metrics, and render the result page.
pub async fn answer_quiz(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, ApiError> {
    let submission =
        AnswerSubmission::from_fields(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    // Fails fast on the first malformed field; no metrics are recorded then.
    let result = quiz::grade(state.questions(), &submission)?;

    let total = state.questions().len();
    let metrics = &state.metrics().quiz;
    for idx in 0..total {
        metrics.record_answer(idx + 1, result.hit(idx));
    }
    metrics.score.observe(result.score as f64);

    let tier = Tier::for_score(result.score, total);
    Ok(Html(render_result_page(
        result.score,
        total,
        tier,
        &result.failed,
    )))
}

fn render_quiz_form(questions: &[Question]) -> String {
    let mut sections = String::new();
    for (idx, q) in questions.iter().enumerate() {
        let mut options = String::new();
        for (o_idx, option) in q.options.iter().enumerate() {
            let _ = writeln!(options, r#"	<option value="{o_idx}">{option}</option>"#);
        }

        let _ = write!(
            sections,
            r#"
  <p><b>{number}:</b> {text}</p>
  <img src="/images/{image}" height="300"><br>
  <select name="q{idx}" form="trivia">
{options}  </select>
"#,
            number = idx + 1,
            text = q.text,
            image = q.image,
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>

<head>
  <title>The Simpsons Trivia</title>
</head>

<body>

<h1>The Simpsons Trivia</h1>
<h3>How much do you know about the best cartoon show EVER?</h3>

<form action="/answer" id="trivia">
{sections}
  <br>
  <br>
  <input type="submit">
</form>

</body>
</html>
"#
    )
}

fn render_result_page(score: usize, total: usize, tier: Tier, failed: &[usize]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>

<head>
  <title>The Simpsons Trivia -> Results</title>
</head>

<body>

<h1>Here is your result:</h1>
<h2>{score}/{total}</h2>

{message}

</body>
</html>
"#,
        message = message_for(tier, failed),
    )
}

/// Tier feedback, including the failed question numbers (1-based) where the
/// tier calls for them.
fn message_for(tier: Tier, failed: &[usize]) -> String {
    let failures = failed
        .iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ");

    match tier {
        Tier::Perfect => r#"
  <h3>Perfect!</h3>
  <iframe src="https://giphy.com/embed/l2JdTAyoFqDY6nEis" width="480" height="366" frameBorder="0" class="giphy-embed" allowFullScreen></iframe><p><a href="https://giphy.com/gifs/season-11-the-simpsons-11x6-l2JdTAyoFqDY6nEis">via GIPHY</a></p>
"#
        .to_string(),
        Tier::NearMiss => format!(
            r#"
  <h3>meh</h3>
  <p>You failed in the question number {failures}</p>
  <iframe src="https://giphy.com/embed/RJSrDl3tgfKUmSfybz" width="480" height="269" frameBorder="0" class="giphy-embed" allowFullScreen></iframe><p><a href="https://giphy.com/gifs/RJSrDl3tgfKUmSfybz">via GIPHY</a></p>
"#
        ),
        Tier::NeedsImprovement => format!(
            r#"
  <h3>really?</h3>
  <p>You need to improve. Have a look at these questions and try again: {failures}.</p>
  <iframe src="https://giphy.com/embed/k5nFcak3DT8iI" width="480" height="349" frameBorder="0" class="giphy-embed" allowFullScreen></iframe><p><a href="https://giphy.com/gifs/the-simpsons-homer-simpson-mr-burns-k5nFcak3DT8iI">via GIPHY</a></p>
"#
        ),
        Tier::SuspectNonHuman => r#"
  <h3>this is so sad...</h3>
  <p>Are you a human?</p>
  <iframe src="https://giphy.com/embed/X3LZLfNMOLdGU" width="480" height="270" frameBorder="0" class="giphy-embed" allowFullScreen></iframe><p><a href="https://giphy.com/gifs/maggie-simpson-black-and-white-the-simpsons-X3LZLfNMOLdGU">via GIPHY</a></p>
"#
        .to_string(),
    }
}

//! Quiz question set and scoring engine.
//!
//! The question set is a fixed, immutable table defined at compile time.
//! Grading is pure: it takes a raw answer submission, fails fast on the first
//! malformed field, and otherwise produces a [`ScoreResult`] that the caller
//! folds into metrics and a feedback [`Tier`].

use std::collections::HashMap;

use crate::error::{QuizdError, Result};

/// A single quiz question. `answer` is the index into `options` of the
/// correct choice; `image` is a file reference served by a collaborator.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub text: &'static str,
    pub options: &'static [&'static str],
    pub answer: usize,
    pub image: &'static str,
}

/// The reference question set.
pub fn question_set() -> &'static [Question] {
    &QUESTIONS
}

static QUESTIONS: [Question; 6] = [
    Question {
        text: "Who is older?",
        options: &["Rod", "Todd"],
        answer: 0,
        image: "rod_todd.jpg",
    },
    Question {
        text: "What is The Simpson's real address?",
        options: &[
            "123 Fake street",
            "742 Evergreen Terrace",
            "1024 Evergreen Terrace",
        ],
        answer: 1,
        image: "street.png",
    },
    Question {
        text: "What is the name of the startup that Homer founded and Bill Gates \"bougth\"?",
        options: &[
            "Global-Compu-Hyper-Mega-Net",
            "Compu-Global-Hyper-Mega-Net",
            "Hyper-Compu-Global-Mega-Net",
        ],
        answer: 1,
        image: "bill.jpg",
    },
    Question {
        text: "Which one is not an alias that Homer ever used?",
        options: &[
            "Max Power",
            "Elvis Jagger Abdul - Jabbar",
            "Angry Dad (Pap\u{e1} Rabioso)",
            "Rock Strongo (Fornido rock)",
            "Mr. Plow",
            "Mr. X",
            "Happy Dude",
            "Colonel Homer",
            "Homer Thompson",
            "Brian McGee",
            "None",
        ],
        answer: 10,
        image: "aliases.jpg",
    },
    Question {
        text: "Hank Scorpio (best super-villian ever) asks Homer about his less favorite country, and he offers two choices:",
        options: &["France and Italy", "Spain and Italy", "France and Canada"],
        answer: 0,
        image: "hank.jpg",
    },
    Question {
        text: "Which is the fake identity that Krusty tried to adopt when he faked his own death?",
        options: &["Steve Barnes", "Mr. Snrub", "Rory B. Bellows"],
        answer: 2,
        image: "krusty.jpg",
    },
];

/// Raw answers keyed by 0-based question index, values as submitted (may be
/// missing or non-numeric). Built from `q<index>` form fields.
#[derive(Debug, Default)]
pub struct AnswerSubmission {
    answers: HashMap<usize, String>,
}

impl AnswerSubmission {
    /// Collect `q<index>` fields out of a form/query field iterator. Fields
    /// that do not match the `q<index>` scheme are ignored.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut answers = HashMap::new();
        for (name, value) in fields {
            if let Some(idx) = name.strip_prefix('q').and_then(|s| s.parse::<usize>().ok()) {
                answers.insert(idx, value.to_string());
            }
        }
        Self { answers }
    }

    /// Raw submitted value for a question, if any.
    pub fn answer(&self, idx: usize) -> Option<&str> {
        self.answers.get(&idx).map(String::as_str)
    }
}

/// Outcome of grading one full submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    /// Count of correct answers.
    pub score: usize,
    /// 0-based indices of incorrectly answered questions, in question order.
    pub failed: Vec<usize>,
}

impl ScoreResult {
    /// Whether the given question was answered correctly.
    pub fn hit(&self, idx: usize) -> bool {
        !self.failed.contains(&idx)
    }
}

/// Grade a submission against the question set.
///
/// Fails fast with `BadRequest` on the first missing or non-numeric answer;
/// no partial score is produced in that case.
pub fn grade(questions: &[Question], submission: &AnswerSubmission) -> Result<ScoreResult> {
    let mut score = 0;
    let mut failed = Vec::new();

    for (idx, q) in questions.iter().enumerate() {
        let raw = submission.answer(idx).ok_or_else(|| {
            QuizdError::BadRequest(format!("missing selection for question {}", idx + 1))
        })?;
        // Any integer parses; out-of-range selections are simply misses.
        let got: i64 = raw.parse().map_err(|_| {
            QuizdError::BadRequest(format!(
                "cannot parse selection in form: question {} got {raw:?}",
                idx + 1
            ))
        })?;

        if got == q.answer as i64 {
            score += 1;
        } else {
            failed.push(idx);
        }
    }

    Ok(ScoreResult { score, failed })
}

/// Qualitative feedback category for a quiz score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Perfect,
    NearMiss,
    NeedsImprovement,
    SuspectNonHuman,
}

impl Tier {
    /// Classify a score against the total question count. Checks are ordered:
    /// perfect, then one-off, then any positive score, else zero.
    pub fn for_score(score: usize, total: usize) -> Tier {
        if score == total {
            Tier::Perfect
        } else if score + 1 == total {
            Tier::NearMiss
        } else if score > 0 {
            Tier::NeedsImprovement
        } else {
            Tier::SuspectNonHuman
        }
    }
}

//! JSON quiz import.
//!
//! Decodes an uploaded quiz file into a loosely-typed intermediate form,
//! then projects it into a strict [`Quiz`], collecting every field problem
//! before rejecting. Nothing is partially imported.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{FieldIssue, QuizError};
use crate::model::{self, Question, Quiz, DEFAULT_EXPLANATION};

/// Intermediate structure for the top level of an import file.
#[derive(Debug, Deserialize)]
struct RawQuizFile {
    #[serde(default)]
    title: Value,
    #[serde(default)]
    questions: Value,
}

/// Intermediate structure for one question. Two source shapes are in the
/// wild: one names the prompt `question`, the other `text`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawQuestion {
    id: Value,
    question: Value,
    text: Value,
    options: Value,
    correct_index: Value,
    explanation: Value,
}

/// Parse and validate an import file, stamping it with the current time.
pub fn parse_quiz(content: &str) -> Result<Quiz, QuizError> {
    parse_quiz_at(content, model::now())
}

/// Parse and validate an import file, using `now` for generated ids and the
/// creation timestamp.
pub fn parse_quiz_at(content: &str, now: DateTime<Utc>) -> Result<Quiz, QuizError> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| QuizError::ImportParse(e.to_string()))?;

    let raw: RawQuizFile = match value {
        Value::Object(_) => {
            serde_json::from_value(value).map_err(|_| QuizError::InvalidStructure)?
        }
        _ => return Err(QuizError::InvalidStructure),
    };

    let title = match raw.title {
        Value::String(title) if !title.trim().is_empty() => title,
        _ => return Err(QuizError::InvalidStructure),
    };
    let Value::Array(items) = raw.questions else {
        return Err(QuizError::InvalidStructure);
    };

    let stamp = now.timestamp_millis();
    let mut issues = Vec::new();
    let mut questions = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            issues.push(FieldIssue {
                index,
                field: "question",
                message: "expected an object".into(),
            });
            continue;
        }
        let raw: RawQuestion = match serde_json::from_value(item) {
            Ok(raw) => raw,
            Err(e) => {
                issues.push(FieldIssue {
                    index,
                    field: "question",
                    message: e.to_string(),
                });
                continue;
            }
        };
        if let Some(question) = project_question(raw, index, stamp, &mut issues) {
            questions.push(question);
        }
    }

    if !issues.is_empty() {
        tracing::debug!(title = %title, issues = issues.len(), "rejecting quiz import");
        return Err(QuizError::InvalidQuestions(issues));
    }

    let suffix = Uuid::new_v4().simple().to_string();
    Ok(Quiz {
        id: format!("quiz-{stamp}-{}", &suffix[..8]),
        title,
        questions,
        created_at: now,
    })
}

/// Convert one raw question, recording any problems in `issues`.
fn project_question(
    raw: RawQuestion,
    index: usize,
    stamp: i64,
    issues: &mut Vec<FieldIssue>,
) -> Option<Question> {
    let id = non_empty_id(raw.id).unwrap_or_else(|| format!("q-{stamp}-{index}"));

    let text = non_empty_str(raw.question).or_else(|| non_empty_str(raw.text));
    if text.is_none() {
        issues.push(FieldIssue {
            index,
            field: "text",
            message: "missing prompt (`question` or `text`)".into(),
        });
    }

    let options = match raw.options {
        Value::Array(values) => {
            let strings: Option<Vec<String>> = values
                .into_iter()
                .map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect();
            if strings.is_none() {
                issues.push(FieldIssue {
                    index,
                    field: "options",
                    message: "every option must be a string".into(),
                });
            }
            strings
        }
        _ => {
            issues.push(FieldIssue {
                index,
                field: "options",
                message: "missing or not an array".into(),
            });
            None
        }
    };

    let correct_index = match &raw.correct_index {
        Value::Number(n) => match n.as_u64().and_then(|n| usize::try_from(n).ok()) {
            Some(i) => Some(i),
            None => {
                issues.push(FieldIssue {
                    index,
                    field: "correctIndex",
                    message: format!("must be a non-negative integer, got {n}"),
                });
                None
            }
        },
        _ => {
            issues.push(FieldIssue {
                index,
                field: "correctIndex",
                message: "missing or not a number".into(),
            });
            None
        }
    };

    let explanation =
        non_empty_str(raw.explanation).unwrap_or_else(|| DEFAULT_EXPLANATION.to_string());

    Some(Question {
        id,
        text: text?,
        options: options?,
        correct_index: correct_index?,
        explanation,
    })
}

fn non_empty_str(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

fn non_empty_id(value: Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        other => non_empty_str(other),
    }
}

/// A non-fatal warning about an imported quiz.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a quiz for problems the importer lets through.
pub fn lint_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "quiz has no questions and cannot be played".into(),
        });
    }

    let mut seen_ids = std::collections::HashSet::new();
    for question in &quiz.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("duplicate question ID: {}", question.id),
            });
        }
    }

    for question in &quiz.questions {
        if question.options.len() < 2 {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("only {} option(s)", question.options.len()),
            });
        }
        if question.correct_index >= question.options.len() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!(
                    "correctIndex {} is out of range; no option can be scored correct",
                    question.correct_index
                ),
            });
        }
    }

    warnings
}

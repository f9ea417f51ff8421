//! Domain error types.
//!
//! Operations that may also fail on storage return `anyhow::Result`; the
//! controller and the CLI downcast to [`QuizError`] to tell a user mistake
//! (shown inline, state unchanged) from an I/O failure.

use std::fmt;

use thiserror::Error;

/// A user-facing failure of a quiz operation.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A quiz was started before a name was entered.
    #[error("please enter your name first")]
    EmptyUsername,

    /// The admin tried to save a blank display name.
    #[error("app name cannot be empty")]
    EmptyAppName,

    /// No quiz in the catalog has this id.
    #[error("quiz not found: {0}")]
    QuizNotFound(String),

    /// The quiz has no questions to play.
    #[error("quiz '{0}' has no questions")]
    EmptyQuiz(String),

    /// A quiz with this id is already in the catalog.
    #[error("duplicate quiz id: {0}")]
    DuplicateQuiz(String),

    /// The import text is not valid JSON.
    #[error("failed to parse quiz file: {0}")]
    ImportParse(String),

    /// The import is JSON but lacks a title or a questions array.
    #[error("invalid JSON structure: must have 'title' and 'questions' array")]
    InvalidStructure,

    /// One or more imported questions are missing required fields.
    #[error("some questions are missing required fields (text, options, correctIndex): {}", join_issues(.0))]
    InvalidQuestions(Vec<FieldIssue>),

    /// Admin login failed.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// An admin action was attempted without logging in.
    #[error("admin login required")]
    NotAuthenticated,

    /// The action is not available on the current screen.
    #[error("not available on the {0} screen")]
    WrongScreen(&'static str),
}

/// One problem with one field of one imported question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Zero-based position of the question in the import file.
    pub index: usize,
    /// Field name as written in the import format.
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "question {} `{}`: {}",
            self.index + 1,
            self.field,
            self.message
        )
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_questions_lists_every_issue() {
        let err = QuizError::InvalidQuestions(vec![
            FieldIssue {
                index: 0,
                field: "options",
                message: "missing".into(),
            },
            FieldIssue {
                index: 2,
                field: "correctIndex",
                message: "must be a number".into(),
            },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("question 1 `options`: missing"));
        assert!(msg.contains("question 3 `correctIndex`: must be a number"));
    }

    #[test]
    fn downcast_from_anyhow() {
        let err: anyhow::Error = QuizError::EmptyUsername.into();
        assert!(matches!(
            err.downcast_ref::<QuizError>(),
            Some(QuizError::EmptyUsername)
        ));
    }
}

//! Quiz session state machine.
//!
//! Drives one user through one quiz: pick an option, submit it to reveal the
//! answer and explanation, then advance. The score changes only on submit,
//! once per question.

use crate::error::QuizError;
use crate::model::{self, Question, Quiz, SessionResult};

/// Where a session is in its question loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Showing a question; `selected` is the pending choice, if any.
    AwaitingSelection {
        question: usize,
        selected: Option<usize>,
    },
    /// The answer to `question` has been submitted and revealed.
    Answered { question: usize, selected: usize },
    /// Every question has been answered.
    Finished,
}

/// What the reveal step shows after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub selected: usize,
    pub correct_index: usize,
    pub correct: bool,
    pub explanation: String,
}

/// Outcome of [`QuizSession::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index.
    Next(usize),
    /// The last question was answered.
    Finished(SessionResult),
}

/// A single run through a quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    username: String,
    state: SessionState,
    /// Index of the question on display; stays on the last one once finished.
    current: usize,
    score: u32,
}

impl QuizSession {
    pub fn new(quiz: Quiz, username: impl Into<String>) -> Result<Self, QuizError> {
        if quiz.questions.is_empty() {
            return Err(QuizError::EmptyQuiz(quiz.title));
        }
        Ok(Self {
            quiz,
            username: username.into(),
            state: SessionState::AwaitingSelection {
                question: 0,
                selected: None,
            },
            current: 0,
            score: 0,
        })
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Zero-based index of the question on display.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.current]
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.total_questions()
    }

    /// The pending selection while awaiting a submit.
    pub fn selected(&self) -> Option<usize> {
        match self.state {
            SessionState::AwaitingSelection { selected, .. } => selected,
            SessionState::Answered { selected, .. } => Some(selected),
            SessionState::Finished => None,
        }
    }

    /// Progress as a percentage: questions before the current one over the
    /// total. Reads `(n-1)/n` on the last question and does not move once
    /// the session finishes.
    pub fn progress_percent(&self) -> f64 {
        self.current as f64 / self.total_questions() as f64 * 100.0
    }

    /// Record `option` as the pending choice. Overwrites an earlier choice;
    /// ignored once the question is answered or when `option` is not one of
    /// the current question's options. Returns whether it was recorded.
    pub fn select(&mut self, option: usize) -> bool {
        let SessionState::AwaitingSelection { question, .. } = self.state else {
            return false;
        };
        if option >= self.quiz.questions[question].options.len() {
            return false;
        }
        self.state = SessionState::AwaitingSelection {
            question,
            selected: Some(option),
        };
        tracing::debug!(question, option, "option selected");
        true
    }

    /// Score the pending choice and reveal the answer. Does nothing without a
    /// pending choice or once the question is answered.
    pub fn submit(&mut self) -> Option<AnswerFeedback> {
        let SessionState::AwaitingSelection {
            question,
            selected: Some(selected),
        } = self.state
        else {
            return None;
        };

        let q = &self.quiz.questions[question];
        let correct = q.is_correct(selected);
        if correct {
            self.score += 1;
        }
        self.state = SessionState::Answered { question, selected };
        tracing::debug!(question, selected, correct, score = self.score, "answer submitted");

        Some(AnswerFeedback {
            selected,
            correct_index: q.correct_index,
            correct,
            explanation: q.explanation.clone(),
        })
    }

    /// Move past an answered question. On the last question the session
    /// finishes and yields its result; otherwise the next question is shown
    /// with no selection. Does nothing unless the current question has been
    /// answered.
    pub fn advance(&mut self) -> Option<Advance> {
        let SessionState::Answered { question, .. } = self.state else {
            return None;
        };

        if question + 1 >= self.total_questions() {
            self.state = SessionState::Finished;
            let result = SessionResult {
                username: self.username.clone(),
                score: self.score,
                total_questions: self.total_questions() as u32,
                quiz_title: self.quiz.title.clone(),
                completed_at: model::now(),
            };
            tracing::debug!(score = result.score, total = result.total_questions, "session finished");
            return Some(Advance::Finished(result));
        }

        let next = question + 1;
        self.current = next;
        self.state = SessionState::AwaitingSelection {
            question: next,
            selected: None,
        };
        Some(Advance::Next(next))
    }
}

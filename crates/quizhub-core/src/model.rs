//! Core data model types for quizhub.
//!
//! These are the records that get persisted verbatim: questions and quizzes
//! in the catalog, completed session results in the history log, and the
//! singleton app config. Field names follow the camelCase storage format.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Display name used when no config has been saved.
pub const DEFAULT_APP_NAME: &str = "QuizHub";

/// Explanation text substituted when an imported question has none.
pub const DEFAULT_EXPLANATION: &str = "No explanation provided.";

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier, unique within its quiz.
    pub id: String,
    /// Prompt text.
    pub text: String,
    /// Answer options, in display order.
    pub options: Vec<String>,
    /// Zero-based index of the correct option.
    pub correct_index: usize,
    /// Shown after the answer is submitted.
    pub explanation: String,
}

impl Question {
    /// Whether `option` is the correct answer.
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }
}

/// A named, ordered set of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Identifier, unique across the catalog.
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
    /// Creation time, stored as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Immutable record of one completed quiz attempt.
///
/// The quiz title is copied rather than referenced so the record survives
/// deletion of the quiz it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub username: String,
    pub score: u32,
    pub total_questions: u32,
    pub quiz_title: String,
    pub completed_at: DateTime<Utc>,
}

impl SessionResult {
    /// Score as a whole-number percentage, rounded half away from zero.
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        (f64::from(self.score) / f64::from(self.total_questions) * 100.0).round() as u32
    }

    /// Headline shown on the result screen.
    pub fn rating(&self) -> Rating {
        Rating::from_percentage(self.percentage())
    }
}

/// Result-screen headline tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Outstanding,
    GreatJob,
    GoodEffort,
    KeepPracticing,
}

impl Rating {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Rating::Outstanding,
            70..=89 => Rating::GreatJob,
            50..=69 => Rating::GoodEffort,
            _ => Rating::KeepPracticing,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rating::Outstanding => "Outstanding!",
            Rating::GreatJob => "Great Job!",
            Rating::GoodEffort => "Good Effort!",
            Rating::KeepPracticing => "Keep Practicing!",
        }
    }
}

/// The singleton application config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Display name shown in the header and footer.
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

/// Partial update merged into [`AppConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigPatch {
    pub app_name: Option<String>,
}

impl AppConfig {
    /// Merge `patch` into this config. An empty display name is rejected
    /// before anything is changed.
    pub fn apply(&mut self, patch: ConfigPatch) -> Result<(), crate::error::QuizError> {
        if let Some(name) = &patch.app_name {
            if name.trim().is_empty() {
                return Err(crate::error::QuizError::EmptyAppName);
            }
        }
        if let Some(name) = patch.app_name {
            self.app_name = name;
        }
        Ok(())
    }
}

/// Current time truncated to millisecond precision, so timestamps survive a
/// trip through the storage format unchanged.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizError;

    fn sample_quiz() -> Quiz {
        Quiz {
            id: "quiz-1".into(),
            title: "Capitals".into(),
            questions: vec![Question {
                id: "q1".into(),
                text: "Capital of France?".into(),
                options: vec!["Paris".into(), "Lyon".into()],
                correct_index: 0,
                explanation: "Paris has been the capital since 508.".into(),
            }],
            created_at: now(),
        }
    }

    #[test]
    fn quiz_uses_storage_field_names() {
        let json = serde_json::to_value(sample_quiz()).unwrap();
        assert!(json.get("createdAt").unwrap().is_i64());
        assert_eq!(json["questions"][0]["correctIndex"], 0);
    }

    #[test]
    fn quiz_serde_roundtrip() {
        let quiz = sample_quiz();
        let json = serde_json::to_string(&quiz).unwrap();
        let back: Quiz = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quiz);
    }

    #[test]
    fn session_result_serde_roundtrip() {
        let result = SessionResult {
            username: "Asha".into(),
            score: 3,
            total_questions: 5,
            quiz_title: "Capitals".into(),
            completed_at: now(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"totalQuestions\":5"));
        let back: SessionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn config_serde_roundtrip() {
        let config = AppConfig {
            app_name: "Folk Quiz".into(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"appName":"Folk Quiz"}"#);
        assert_eq!(serde_json::from_str::<AppConfig>(&json).unwrap(), config);
    }

    #[test]
    fn config_patch_rejects_blank_name() {
        let mut config = AppConfig::default();
        let err = config
            .apply(ConfigPatch {
                app_name: Some("   ".into()),
            })
            .unwrap_err();
        assert!(matches!(err, QuizError::EmptyAppName));
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn config_patch_merges_name() {
        let mut config = AppConfig::default();
        config
            .apply(ConfigPatch {
                app_name: Some("Folk Quiz".into()),
            })
            .unwrap();
        assert_eq!(config.app_name, "Folk Quiz");

        config.apply(ConfigPatch::default()).unwrap();
        assert_eq!(config.app_name, "Folk Quiz");
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(Rating::from_percentage(100), Rating::Outstanding);
        assert_eq!(Rating::from_percentage(90), Rating::Outstanding);
        assert_eq!(Rating::from_percentage(89), Rating::GreatJob);
        assert_eq!(Rating::from_percentage(70), Rating::GreatJob);
        assert_eq!(Rating::from_percentage(50), Rating::GoodEffort);
        assert_eq!(Rating::from_percentage(49), Rating::KeepPracticing);
        assert_eq!(Rating::KeepPracticing.message(), "Keep Practicing!");
    }

    #[test]
    fn percentage_rounds() {
        let result = SessionResult {
            username: "Asha".into(),
            score: 2,
            total_questions: 3,
            quiz_title: "T".into(),
            completed_at: now(),
        };
        assert_eq!(result.percentage(), 67);
        assert_eq!(result.rating(), Rating::GoodEffort);
    }
}

//! Quiz catalog and session history.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::{self, Question, Quiz, SessionResult};

/// Ordered collection of quizzes. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    quizzes: Vec<Quiz>,
}

impl Catalog {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self { quizzes }
    }

    /// The catalog used when nothing has been saved yet.
    pub fn builtin() -> Self {
        Self::new(vec![default_quiz()])
    }

    /// Append a quiz. Ids must stay unique across the catalog.
    pub fn add_quiz(&mut self, quiz: Quiz) -> Result<(), QuizError> {
        if self.get(&quiz.id).is_some() {
            return Err(QuizError::DuplicateQuiz(quiz.id));
        }
        self.quizzes.push(quiz);
        Ok(())
    }

    /// Remove the first quiz with this id. Unknown ids are a no-op.
    pub fn delete_quiz(&mut self, id: &str) -> Option<Quiz> {
        let pos = self.quizzes.iter().position(|q| q.id == id)?;
        Some(self.quizzes.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

/// Append-only log of completed sessions, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    results: Vec<SessionResult>,
}

impl History {
    pub fn new(results: Vec<SessionResult>) -> Self {
        Self { results }
    }

    /// Record a completed session at the front of the log.
    pub fn record(&mut self, result: SessionResult) {
        self.results.insert(0, result);
    }

    pub fn results(&self) -> &[SessionResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Id of the quiz that ships with the app.
pub const DEFAULT_QUIZ_ID: &str = "default-rajasthan-quiz";

fn question(id: &str, text: &str, options: [&str; 4], correct_index: usize, explanation: &str) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index,
        explanation: explanation.to_string(),
    }
}

/// The built-in quiz on Rajasthani folk dance.
pub fn default_quiz() -> Quiz {
    Quiz {
        id: DEFAULT_QUIZ_ID.to_string(),
        title: "Rajasthan Folk Dance (Lok Nartya)".to_string(),
        created_at: model::now(),
        questions: vec![
            question(
                "q1",
                "Ghoomar dance originally belongs to which community?",
                ["Rajput", "Bhil", "Meena", "Gurjar"],
                1,
                "Ghoomar का मूल भील समुदाय है। बाद में राजपूतों ने इसे अपनाया और यह मेवाड़ क्षेत्र का प्रमुख लोक नृत्य बना।",
            ),
            question(
                "q2",
                "Which Rajasthani dance is included in UNESCO’s Intangible Cultural Heritage list?",
                ["Chari", "Kalbeliya", "Gair", "Bhavai"],
                1,
                "Kalbeliya (Sapera समुदाय का नृत्य) को 2010 में UNESCO Intangible Cultural Heritage सूची में शामिल किया गया।",
            ),
            question(
                "q3",
                "Which dance involves balancing multiple pots (matkas) on the head?",
                ["Bhavai", "Terah Taal", "Chakri", "Chari"],
                0,
                "Bhavai में महिलाएँ सिर पर कई मटके (8–11 या उससे अधिक) संतुलित करके नृत्य करती हैं, कभी तलवार या काँच पर भी।",
            ),
            question(
                "q4",
                "Which Rajasthani dance uses 13 manjiras tied to the body?",
                ["Gair", "Kalbeliya", "Terah Taal", "Chari"],
                2,
                "Terah Taal में शरीर पर 13 मंजीरे बाँधकर बैठकर लयबद्ध नृत्य किया जाता है।",
            ),
            question(
                "q5",
                "Kachchi Ghodi dance is mainly associated with which region of Rajasthan?",
                ["Marwar", "Shekhawati", "Mewar", "Hadoti"],
                1,
                "Kachchi Ghodi, नकली घोड़े की पोशाक वाला नृत्य, मुख्यतः शेखावाटी क्षेत्र से जुड़ा है।",
            ),
        ],
    }
}

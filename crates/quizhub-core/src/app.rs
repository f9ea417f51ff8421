//! Application controller.
//!
//! Owns the persisted state, the active session, and which of the four
//! screens is showing. Every mutation of config, catalog, or history is
//! written to the store before it becomes visible.

use std::fmt;

use anyhow::Result;

use crate::catalog::{Catalog, History};
use crate::error::QuizError;
use crate::import;
use crate::model::{AppConfig, ConfigPatch, Quiz, SessionResult};
use crate::persistence::{self, PersistedState, CATALOG_KEY, CONFIG_KEY, HISTORY_KEY};
use crate::session::{Advance, AnswerFeedback, QuizSession};
use crate::traits::{Authenticator, Confirm, KeyValueStore};

/// The screen on display. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Playing,
    Result,
    Admin,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Playing => "playing",
            Screen::Result => "result",
            Screen::Admin => "admin",
        }
    }
}

/// Confirmation prompt shown before a quiz is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this quiz?";

/// The quiz application.
pub struct App<S> {
    store: S,
    auth: Box<dyn Authenticator>,
    state: PersistedState,
    screen: Screen,
    username: String,
    session: Option<QuizSession>,
    last_result: Option<SessionResult>,
    admin_authenticated: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Load persisted state from `store` and open on the welcome screen.
    pub fn new(store: S, auth: impl Authenticator + 'static) -> Self {
        let state = PersistedState::load(&store);
        tracing::debug!(
            quizzes = state.catalog.len(),
            history = state.history.len(),
            "loaded app state"
        );
        Self {
            store,
            auth: Box::new(auth),
            state,
            screen: Screen::Welcome,
            username: String::new(),
            session: None,
            last_result: None,
            admin_authenticated: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn config(&self) -> &AppConfig {
        &self.state.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.state.catalog
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The session being played, on the playing screen.
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// The result of the most recently finished session.
    pub fn last_result(&self) -> Option<&SessionResult> {
        self.last_result.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.admin_authenticated
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn require_screen(&self, screen: Screen) -> Result<(), QuizError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(QuizError::WrongScreen(self.screen.name()))
        }
    }

    fn require_admin(&self) -> Result<(), QuizError> {
        self.require_screen(Screen::Admin)?;
        if self.admin_authenticated {
            Ok(())
        } else {
            Err(QuizError::NotAuthenticated)
        }
    }

    // -----------------------------------------------------------------------
    // Welcome / playing / result
    // -----------------------------------------------------------------------

    pub fn set_username(&mut self, name: impl Into<String>) {
        self.username = name.into();
    }

    /// Begin `quiz_id` as the current user. Requires a non-blank name;
    /// otherwise nothing changes.
    pub fn start_quiz(&mut self, quiz_id: &str) -> Result<()> {
        self.require_screen(Screen::Welcome)?;
        if self.username.trim().is_empty() {
            return Err(QuizError::EmptyUsername.into());
        }
        let quiz = self
            .state
            .catalog
            .get(quiz_id)
            .cloned()
            .ok_or_else(|| QuizError::QuizNotFound(quiz_id.to_string()))?;

        tracing::info!(user = %self.username, quiz = %quiz.title, "starting quiz");
        self.session = Some(QuizSession::new(quiz, self.username.clone())?);
        self.screen = Screen::Playing;
        Ok(())
    }

    pub fn select_option(&mut self, option: usize) -> bool {
        self.session.as_mut().is_some_and(|s| s.select(option))
    }

    pub fn submit_answer(&mut self) -> Option<AnswerFeedback> {
        self.session.as_mut().and_then(QuizSession::submit)
    }

    /// Advance past the answered question. Finishing the last question
    /// records the result in history and switches to the result screen.
    /// A failed history save leaves the session on the answered question so
    /// the call can be retried.
    pub fn advance(&mut self) -> Result<Option<Advance>> {
        let Some(session) = self.session.as_ref() else {
            return Ok(None);
        };
        let mut next = session.clone();
        let step = next.advance();
        match &step {
            Some(Advance::Finished(result)) => self.finish(result.clone())?,
            Some(Advance::Next(_)) => self.session = Some(next),
            None => {}
        }
        Ok(step)
    }

    fn finish(&mut self, result: SessionResult) -> Result<()> {
        let mut history = self.state.history.clone();
        history.record(result.clone());
        persistence::save(&mut self.store, HISTORY_KEY, &history)?;

        tracing::info!(
            user = %result.username,
            quiz = %result.quiz_title,
            score = result.score,
            total = result.total_questions,
            "quiz completed"
        );
        self.state.history = history;
        self.last_result = Some(result);
        self.session = None;
        self.screen = Screen::Result;
        Ok(())
    }

    /// Abandon the current session without recording anything.
    pub fn quit_quiz(&mut self) {
        if self.screen == Screen::Playing {
            self.session = None;
            self.screen = Screen::Welcome;
        }
    }

    /// Return to the welcome screen from the result screen.
    pub fn back_to_welcome(&mut self) {
        match self.screen {
            Screen::Admin => self.exit_admin(),
            Screen::Playing => self.quit_quiz(),
            Screen::Result | Screen::Welcome => self.screen = Screen::Welcome,
        }
    }

    // -----------------------------------------------------------------------
    // Admin
    // -----------------------------------------------------------------------

    pub fn enter_admin(&mut self) -> Result<(), QuizError> {
        self.require_screen(Screen::Welcome)?;
        self.admin_authenticated = false;
        self.screen = Screen::Admin;
        Ok(())
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<(), QuizError> {
        self.require_screen(Screen::Admin)?;
        if self.auth.verify(username, password) {
            tracing::info!("admin logged in");
            self.admin_authenticated = true;
            Ok(())
        } else {
            tracing::warn!(username, "rejected admin login");
            self.admin_authenticated = false;
            Err(QuizError::InvalidCredentials)
        }
    }

    pub fn logout(&mut self) {
        self.admin_authenticated = false;
    }

    /// Leave the admin screen. Authentication does not outlive the screen.
    pub fn exit_admin(&mut self) {
        if self.screen == Screen::Admin {
            self.logout();
            self.screen = Screen::Welcome;
        }
    }

    pub fn update_config(&mut self, patch: ConfigPatch) -> Result<()> {
        self.require_admin()?;
        let mut config = self.state.config.clone();
        config.apply(patch)?;
        persistence::save(&mut self.store, CONFIG_KEY, &config)?;

        tracing::info!(app_name = %config.app_name, "app config updated");
        self.state.config = config;
        Ok(())
    }

    /// Validate `content` as a quiz file and append it to the catalog.
    /// A rejected import leaves the catalog untouched.
    pub fn import_quiz(&mut self, content: &str) -> Result<Quiz> {
        self.require_admin()?;
        let quiz = import::parse_quiz(content)?;

        let mut catalog = self.state.catalog.clone();
        catalog.add_quiz(quiz.clone())?;
        persistence::save(&mut self.store, CATALOG_KEY, &catalog)?;

        tracing::info!(id = %quiz.id, title = %quiz.title, questions = quiz.questions.len(), "quiz imported");
        self.state.catalog = catalog;
        Ok(quiz)
    }

    /// Delete a quiz after the acting user confirms. Unknown ids and
    /// declined confirmations change nothing and return `None`. History
    /// entries for the quiz are kept.
    pub fn delete_quiz(&mut self, id: &str, confirm: &mut dyn Confirm) -> Result<Option<Quiz>> {
        self.require_admin()?;
        if self.state.catalog.get(id).is_none() {
            return Ok(None);
        }
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(None);
        }

        let mut catalog = self.state.catalog.clone();
        let removed = catalog.delete_quiz(id);
        persistence::save(&mut self.store, CATALOG_KEY, &catalog)?;

        tracing::info!(id, "quiz deleted");
        self.state.catalog = catalog;
        Ok(removed)
    }
}

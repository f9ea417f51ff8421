//! quizhub-core — Quiz model, import validation, and session state machine.
//!
//! This crate holds everything that does not touch a terminal or a disk:
//! the persisted record types, the JSON import validator, the per-quiz
//! session state machine, and the [`app::App`] controller that ties them to
//! a [`traits::KeyValueStore`].

pub mod app;
pub mod catalog;
pub mod error;
pub mod import;
pub mod model;
pub mod persistence;
pub mod session;
pub mod traits;

pub use app::{App, Screen};
pub use error::QuizError;

//! Trivia Mania - Terminal Trivia Quiz Library
//!
//! Exposes the game state store, achievements, question bank and quiz
//! session logic for testing and for the `trivia` binary.

pub mod achievements;
pub mod app;
pub mod audio;
pub mod build_info;
pub mod categories;
pub mod config;
pub mod core;
pub mod quiz;
pub mod ui;
pub mod utils;

pub use achievements::{AchievementDef, AchievementId};
pub use app::{App, AppInput};
pub use categories::{Category, ContentError, Question};
pub use crate::core::{GameAction, GameState, GameStore};
pub use quiz::{QuizPhase, QuizSession, QuizSummary};

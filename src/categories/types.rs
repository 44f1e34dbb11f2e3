//! Category and question definitions.

use ratatui::style::Color;
use thiserror::Error;

/// A single multiple-choice question.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options`. Not validated; an out-of-range value simply
    /// means no option renders as correct.
    pub correct_answer: usize,
    pub fun_fact: Option<&'static str>,
}

impl Question {
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_answer
    }
}

/// A themed, ordered set of questions.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub color: Color,
    pub questions: &'static [Question],
}

impl Category {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Failures looking up quiz content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("category has no questions: {0}")]
    EmptyCategory(String),
}

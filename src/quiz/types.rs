//! Quiz session data structures.

use crate::categories::{Category, ContentError, Question};
use crate::core::constants::{GRADE_EXCELLENT_MIN, GRADE_GOOD_MIN};
use std::time::Instant;

/// Where a session is in its question loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for an answer to the current question.
    Answering,
    /// Answer chosen, correctness shown, waiting to move on.
    Revealed,
    /// Every question has been answered.
    Complete,
}

/// Headline shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Perfect,
    Excellent,
    GoodJob,
    KeepTrying,
}

impl Grade {
    pub fn from_accuracy(accuracy: u32) -> Self {
        if accuracy >= 100 {
            Grade::Perfect
        } else if accuracy >= GRADE_EXCELLENT_MIN {
            Grade::Excellent
        } else if accuracy >= GRADE_GOOD_MIN {
            Grade::GoodJob
        } else {
            Grade::KeepTrying
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Grade::Perfect => "Perfect!",
            Grade::Excellent => "Excellent!",
            Grade::GoodJob => "Good Job!",
            Grade::KeepTrying => "Keep Trying!",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Grade::Perfect => "🏆",
            Grade::Excellent => "🎉",
            Grade::GoodJob => "👏",
            Grade::KeepTrying => "🤔",
        }
    }
}

/// Final numbers for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: u64,
    pub correct: usize,
    pub total: usize,
    /// Whole percent, rounded to nearest.
    pub accuracy: u32,
    /// Every question answered correctly. Stricter than `accuracy == 100`,
    /// which rounds up from 99.5%.
    pub mastered: bool,
}

impl QuizSummary {
    pub fn grade(&self) -> Grade {
        if self.mastered {
            Grade::Perfect
        } else {
            // A near miss that rounds to 100% is still not perfect
            Grade::from_accuracy(self.accuracy.min(99))
        }
    }
}

/// Ephemeral state for one playthrough of a category.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub category: &'static Category,
    pub phase: QuizPhase,
    pub question_index: usize,
    pub selected_answer: Option<usize>,
    /// Correctness of the answer to the current question, once chosen.
    pub last_answer_correct: Option<bool>,
    pub show_fun_fact: bool,
    pub fun_fact_due: Option<Instant>,
    /// Points earned this session.
    pub score: u64,
    /// Correct answers on questions already moved past.
    pub correct: usize,
}

impl QuizSession {
    pub fn new(category: &'static Category) -> Result<Self, ContentError> {
        if category.questions.is_empty() {
            return Err(ContentError::EmptyCategory(category.id.to_string()));
        }
        Ok(Self {
            category,
            phase: QuizPhase::Answering,
            question_index: 0,
            selected_answer: None,
            last_answer_correct: None,
            show_fun_fact: false,
            fun_fact_due: None,
            score: 0,
            correct: 0,
        })
    }

    pub fn current_question(&self) -> &'static Question {
        let questions: &'static [Question] = self.category.questions;
        &questions[self.question_index]
    }

    pub fn total_questions(&self) -> usize {
        self.category.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.question_index + 1 >= self.total_questions()
    }

    pub fn is_revealed(&self) -> bool {
        self.phase != QuizPhase::Answering
    }

    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    /// Position through the category, counting the current question.
    pub fn progress_percent(&self) -> u16 {
        let total = self.total_questions();
        (((self.question_index + 1) * 100) / total) as u16
    }

    /// Results, available once the session is complete.
    pub fn summary(&self) -> Option<QuizSummary> {
        if !self.is_complete() {
            return None;
        }
        let total = self.total_questions();
        let accuracy = ((self.correct as f64 / total as f64) * 100.0).round() as u32;
        Some(QuizSummary {
            score: self.score,
            correct: self.correct,
            total,
            accuracy,
            mastered: self.correct == total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::find_category;

    #[test]
    fn test_new_session_starts_on_first_question() {
        let session = QuizSession::new(find_category("science").unwrap()).unwrap();
        assert_eq!(session.phase, QuizPhase::Answering);
        assert_eq!(session.question_index, 0);
        assert_eq!(session.selected_answer, None);
        assert!(!session.is_revealed());
        assert!(session.summary().is_none());
    }

    #[test]
    fn test_empty_category_is_rejected() {
        static EMPTY: Category = Category {
            id: "empty",
            name: "Empty",
            description: "",
            emoji: "",
            color: ratatui::style::Color::White,
            questions: &[],
        };
        assert_eq!(
            QuizSession::new(&EMPTY).unwrap_err(),
            ContentError::EmptyCategory("empty".to_string())
        );
    }

    #[test]
    fn test_progress_percent() {
        let mut session = QuizSession::new(find_category("animals").unwrap()).unwrap();
        assert_eq!(session.progress_percent(), 20);
        session.question_index = 4;
        assert_eq!(session.progress_percent(), 100);
        assert!(session.is_last_question());
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_accuracy(100), Grade::Perfect);
        assert_eq!(Grade::from_accuracy(80), Grade::Excellent);
        assert_eq!(Grade::from_accuracy(79), Grade::GoodJob);
        assert_eq!(Grade::from_accuracy(60), Grade::GoodJob);
        assert_eq!(Grade::from_accuracy(59), Grade::KeepTrying);
        assert_eq!(Grade::KeepTrying.title(), "Keep Trying!");
    }

    #[test]
    fn test_rounded_hundred_is_not_perfect() {
        let summary = QuizSummary {
            score: 0,
            correct: 199,
            total: 200,
            accuracy: 100,
            mastered: false,
        };
        assert_eq!(summary.grade(), Grade::Excellent);
    }
}

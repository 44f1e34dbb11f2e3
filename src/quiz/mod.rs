//! Per-category quiz session.
//!
//! One `QuizSession` drives a single playthrough of a category. It never
//! owns cumulative progress; results are dispatched into the `GameStore`
//! passed to each call.

pub mod logic;
pub mod types;

pub use logic::{advance, points_for, poll_fun_fact, select_answer, AnswerOutcome};
pub use types::{Grade, QuizPhase, QuizSession, QuizSummary};

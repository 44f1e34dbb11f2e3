//! Quiz session transitions.
//!
//! `Answering --select_answer--> Revealed --advance--> Answering | Complete`.
//! Calls made in the wrong phase are ignored and return `None`.

use super::{QuizPhase, QuizSession};
use crate::audio::AudioFeedback;
use crate::core::constants::{BASE_POINTS, FUN_FACT_DELAY_MS, STREAK_BONUS_PER_ANSWER};
use crate::core::store::GameStore;
use std::time::{Duration, Instant};

/// What happened when an answer was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub points: u32,
}

/// Points for an answer given the streak before it.
pub fn points_for(correct: bool, streak: u32) -> u32 {
    if correct {
        BASE_POINTS.saturating_add(streak.saturating_mul(STREAK_BONUS_PER_ANSWER))
    } else {
        0
    }
}

/// Choose an answer for the current question.
///
/// Only the first selection per question counts. Scores the answer against
/// the store's current streak, dispatches it, and schedules the fun fact.
pub fn select_answer(
    session: &mut QuizSession,
    index: usize,
    store: &mut GameStore,
    audio: &mut dyn AudioFeedback,
    now: Instant,
) -> Option<AnswerOutcome> {
    if session.phase != QuizPhase::Answering || session.selected_answer.is_some() {
        return None;
    }
    let question = session.current_question();
    if index >= question.options.len() {
        return None;
    }

    audio.play_click();
    session.selected_answer = Some(index);

    let correct = question.is_correct(index);
    let points = points_for(correct, store.state().current_streak);
    if correct {
        audio.play_correct();
        session.score = session.score.saturating_add(u64::from(points));
    } else {
        audio.play_incorrect();
    }
    session.last_answer_correct = Some(correct);
    session.phase = QuizPhase::Revealed;

    store.answer_question(correct, points);

    if question.fun_fact.is_some() {
        session.fun_fact_due = Some(now + Duration::from_millis(FUN_FACT_DELAY_MS));
    }

    tracing::debug!(
        category = session.category.id,
        question = session.question_index,
        correct,
        points,
        "Answer selected"
    );

    Some(AnswerOutcome { correct, points })
}

/// Move past a revealed question.
///
/// Returns the phase entered. On the last question the session completes and,
/// if every answer was right, the category is recorded as mastered.
pub fn advance(
    session: &mut QuizSession,
    store: &mut GameStore,
    audio: &mut dyn AudioFeedback,
) -> Option<QuizPhase> {
    if session.phase != QuizPhase::Revealed {
        return None;
    }

    audio.play_click();

    if session.last_answer_correct.take() == Some(true) {
        session.correct += 1;
    }

    if !session.is_last_question() {
        session.question_index += 1;
        session.selected_answer = None;
        session.show_fun_fact = false;
        session.fun_fact_due = None;
        session.phase = QuizPhase::Answering;
        return Some(QuizPhase::Answering);
    }

    session.phase = QuizPhase::Complete;
    session.fun_fact_due = None;
    audio.play_complete();

    let total = session.total_questions();
    tracing::info!(
        category = session.category.id,
        correct = session.correct,
        total,
        score = session.score,
        "Category finished"
    );

    if session.correct == total {
        store.complete_category(session.category.id);
    }

    Some(QuizPhase::Complete)
}

/// Reveal the fun fact once its delay has passed. Returns true when it
/// became visible on this call.
pub fn poll_fun_fact(session: &mut QuizSession, now: Instant) -> bool {
    match session.fun_fact_due {
        Some(due) if now >= due && session.phase == QuizPhase::Revealed => {
            session.fun_fact_due = None;
            session.show_fun_fact = true;
            true
        }
        _ => false,
    }
}

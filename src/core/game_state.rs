//! Cumulative player progress and the pure transition function over it.
//!
//! `reduce` never performs I/O. Persistence lives in [`super::store::GameStore`],
//! which calls `reduce` and then writes the result through its backend.

use crate::achievements::{newly_unlocked, AchievementId};
use serde::{Deserialize, Serialize};

/// Player progress across every category and session.
///
/// Serialized as a flat camelCase object with exactly these six fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub total_score: u64,
    pub questions_answered: u32,
    /// Never exceeds `questions_answered`.
    pub correct_answers: u32,
    /// Category ids in completion order, without duplicates.
    pub categories_completed: Vec<String>,
    /// Unlocked achievements in unlock order. Only grows until a reset.
    pub achievements: Vec<AchievementId>,
    pub current_streak: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_completed(&self, category_id: &str) -> bool {
        self.categories_completed.iter().any(|id| id == category_id)
    }

    pub fn has_achievement(&self, id: AchievementId) -> bool {
        self.achievements.contains(&id)
    }

    /// Lifetime accuracy as a whole percent (0 when nothing was answered).
    pub fn accuracy_percent(&self) -> u32 {
        if self.questions_answered == 0 {
            return 0;
        }
        let ratio = self.correct_answers as f64 / self.questions_answered as f64;
        (ratio * 100.0).round() as u32
    }
}

/// Events the store understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    AnswerQuestion { correct: bool, points: u32 },
    CompleteCategory { category_id: String },
    Reset,
    /// Replace the state wholesale (restoring a save).
    Load(GameState),
}

/// Apply one action and return the resulting state.
///
/// Achievement predicates see the state after the counters of the same
/// action have been updated; newly satisfied ids are appended in table order.
pub fn reduce(state: &GameState, action: GameAction) -> GameState {
    match action {
        GameAction::AnswerQuestion { correct, points } => {
            let mut next = state.clone();
            next.questions_answered = next.questions_answered.saturating_add(1);
            if correct {
                next.correct_answers = next.correct_answers.saturating_add(1);
                next.total_score = next.total_score.saturating_add(u64::from(points));
                next.current_streak = next.current_streak.saturating_add(1);
            } else {
                next.current_streak = 0;
            }
            unlock_achievements(&mut next);
            next
        }
        GameAction::CompleteCategory { category_id } => {
            if state.has_completed(&category_id) {
                return state.clone();
            }
            let mut next = state.clone();
            next.categories_completed.push(category_id);
            unlock_achievements(&mut next);
            next
        }
        GameAction::Reset => GameState::default(),
        GameAction::Load(loaded) => loaded,
    }
}

fn unlock_achievements(state: &mut GameState) {
    let unlocked = newly_unlocked(state);
    state.achievements.extend(unlocked);
}

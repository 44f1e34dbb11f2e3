//! Static achievement definitions and their evaluation.

use super::types::{AchievementDef, AchievementId};
use crate::categories::all_categories;
use crate::core::game_state::GameState;

/// All achievement definitions in display (and evaluation) order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstCorrect,
        name: "First Steps",
        description: "Answer your first question correctly",
        icon: "🎯",
        condition: has_first_correct,
    },
    AchievementDef {
        id: AchievementId::OnFire,
        name: "On Fire",
        description: "Get 3 answers right in a row",
        icon: "🔥",
        condition: has_streak_of_three,
    },
    AchievementDef {
        id: AchievementId::Unstoppable,
        name: "Unstoppable",
        description: "Get 10 answers right in a row",
        icon: "⚡",
        condition: has_streak_of_ten,
    },
    AchievementDef {
        id: AchievementId::HighScorer,
        name: "High Scorer",
        description: "Reach 1,000 total points",
        icon: "💯",
        condition: has_thousand_points,
    },
    AchievementDef {
        id: AchievementId::ScoreLegend,
        name: "Score Legend",
        description: "Reach 5,000 total points",
        icon: "👑",
        condition: has_five_thousand_points,
    },
    AchievementDef {
        id: AchievementId::Dedicated,
        name: "Dedicated",
        description: "Answer 50 questions",
        icon: "📚",
        condition: has_answered_fifty,
    },
    AchievementDef {
        id: AchievementId::CategoryMaster,
        name: "Category Master",
        description: "Answer every question in a category correctly",
        icon: "🏆",
        condition: has_mastered_one,
    },
    AchievementDef {
        id: AchievementId::Explorer,
        name: "Explorer",
        description: "Master 3 different categories",
        icon: "🗺️",
        condition: has_mastered_three,
    },
    AchievementDef {
        id: AchievementId::Completionist,
        name: "Trivia Legend",
        description: "Master every category",
        icon: "🧠",
        condition: has_mastered_all,
    },
];

fn has_first_correct(state: &GameState) -> bool {
    state.correct_answers >= 1
}

fn has_streak_of_three(state: &GameState) -> bool {
    state.current_streak >= 3
}

fn has_streak_of_ten(state: &GameState) -> bool {
    state.current_streak >= 10
}

fn has_thousand_points(state: &GameState) -> bool {
    state.total_score >= 1_000
}

fn has_five_thousand_points(state: &GameState) -> bool {
    state.total_score >= 5_000
}

fn has_answered_fifty(state: &GameState) -> bool {
    state.questions_answered >= 50
}

fn has_mastered_one(state: &GameState) -> bool {
    distinct_categories(state) >= 1
}

fn has_mastered_three(state: &GameState) -> bool {
    distinct_categories(state) >= 3
}

fn has_mastered_all(state: &GameState) -> bool {
    all_categories()
        .iter()
        .all(|category| state.has_completed(category.id))
}

// Loaded saves are not validated, so duplicates may still be present.
fn distinct_categories(state: &GameState) -> usize {
    let mut ids: Vec<&str> = state
        .categories_completed
        .iter()
        .map(String::as_str)
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids.len()
}

/// Look up the definition for an achievement id.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}

/// Ids whose predicate holds for `state` but which are not yet unlocked, in table order.
pub fn newly_unlocked(state: &GameState) -> Vec<AchievementId> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|def| !state.has_achievement(def.id) && def.is_met(state))
        .map(|def| def.id)
        .collect()
}

/// Definitions of every unlocked achievement, in table order.
pub fn unlocked_defs(state: &GameState) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|def| state.has_achievement(def.id))
        .collect()
}

/// `(unlocked, total)` counts for the achievements button.
pub fn unlock_progress(state: &GameState) -> (usize, usize) {
    (unlocked_defs(state).len(), ALL_ACHIEVEMENTS.len())
}

//! Achievement system module.
//!
//! Achievements are a static table of predicates over [`GameState`](crate::core::GameState).
//! Unlocked ids live inside the game state itself and are saved with it.

pub mod data;
pub mod types;

pub use data::{
    get_achievement_def, newly_unlocked, unlock_progress, unlocked_defs, ALL_ACHIEVEMENTS,
};
pub use types::{AchievementDef, AchievementId};

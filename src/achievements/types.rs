//! Achievement identifiers and static definitions.

use crate::core::game_state::GameState;
use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
///
/// The kebab-case form is what gets written to the save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementId {
    FirstCorrect,
    OnFire,      // 3 in a row
    Unstoppable, // 10 in a row
    HighScorer,  // 1,000 points
    ScoreLegend, // 5,000 points
    Dedicated,   // 50 questions answered
    CategoryMaster,
    Explorer, // 3 categories mastered
    Completionist,
}

impl AchievementId {
    /// Stable string form, identical to the serialized id.
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::FirstCorrect => "first-correct",
            AchievementId::OnFire => "on-fire",
            AchievementId::Unstoppable => "unstoppable",
            AchievementId::HighScorer => "high-scorer",
            AchievementId::ScoreLegend => "score-legend",
            AchievementId::Dedicated => "dedicated",
            AchievementId::CategoryMaster => "category-master",
            AchievementId::Explorer => "explorer",
            AchievementId::Completionist => "completionist",
        }
    }
}

/// Static definition of an achievement.
#[derive(Clone, Copy)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Pure predicate over the full, already-updated state.
    pub condition: fn(&GameState) -> bool,
}

impl AchievementDef {
    pub fn is_met(&self, state: &GameState) -> bool {
        (self.condition)(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serialized_form() {
        for def in crate::achievements::ALL_ACHIEVEMENTS {
            let json = serde_json::to_string(&def.id).unwrap();
            assert_eq!(json, format!("\"{}\"", def.id.as_str()));
        }
    }

    #[test]
    fn test_unknown_id_fails_to_parse() {
        let parsed: Result<AchievementId, _> = serde_json::from_str("\"not-a-thing\"");
        assert!(parsed.is_err());
    }
}

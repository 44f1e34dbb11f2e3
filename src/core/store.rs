//! The game state container.
//!
//! `GameStore` owns the single [`GameState`] for a run. Every dispatched
//! action goes through [`reduce`]; when the result differs from the current
//! state it is written through to the key-value backend in full.

use super::constants::STORAGE_KEY;
use super::game_state::{reduce, GameAction, GameState};
use crate::achievements::{get_achievement_def, AchievementId};
use crate::utils::persistence::{load_json, save_json, KeyValueStore};

pub struct GameStore {
    state: GameState,
    backend: Box<dyn KeyValueStore>,
}

impl GameStore {
    /// Build a store and make the one load attempt against `backend`.
    ///
    /// A missing save starts fresh. An unreadable or unparsable save is
    /// logged and ignored; the default state is kept.
    pub fn open(backend: Box<dyn KeyValueStore>) -> Self {
        let mut store = Self {
            state: GameState::default(),
            backend,
        };

        match load_json::<GameState>(&*store.backend, STORAGE_KEY) {
            Ok(Some(saved)) => {
                tracing::info!(
                    score = saved.total_score,
                    answered = saved.questions_answered,
                    "Loaded saved progress"
                );
                store.state = reduce(&store.state, GameAction::Load(saved));
            }
            Ok(None) => tracing::info!("No saved progress, starting fresh"),
            Err(e) => tracing::warn!("Failed to load game state: {}", e),
        }

        store
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        &*self.backend
    }

    /// Apply an action, persist on change, and return the new state.
    pub fn dispatch(&mut self, action: GameAction) -> &GameState {
        let next = reduce(&self.state, action);
        if next != self.state {
            for id in newly_added(&self.state, &next) {
                if let Some(def) = get_achievement_def(id) {
                    tracing::info!(achievement = id.as_str(), "Unlocked {}", def.name);
                }
            }
            self.state = next;
            self.persist();
        }
        &self.state
    }

    pub fn answer_question(&mut self, correct: bool, points: u32) -> &GameState {
        self.dispatch(GameAction::AnswerQuestion { correct, points })
    }

    pub fn complete_category(&mut self, category_id: &str) -> &GameState {
        tracing::debug!(category = category_id, "Recording category completion");
        self.dispatch(GameAction::CompleteCategory {
            category_id: category_id.to_string(),
        })
    }

    /// Return to the zero state and clear the save.
    ///
    /// The save is removed even when the state is already zero, which is the
    /// case after an unreadable save was ignored by [`GameStore::open`].
    pub fn reset(&mut self) -> &GameState {
        tracing::info!("Resetting progress");
        self.state = reduce(&self.state, GameAction::Reset);
        if let Err(e) = self.backend.remove(STORAGE_KEY) {
            tracing::warn!("Failed to clear saved game state: {}", e);
        }
        &self.state
    }

    pub fn load(&mut self, state: GameState) -> &GameState {
        self.dispatch(GameAction::Load(state))
    }

    // Write failures are logged; the in-memory state stays authoritative.
    fn persist(&mut self) {
        if let Err(e) = save_json(&mut *self.backend, STORAGE_KEY, &self.state) {
            tracing::warn!("Failed to save game state: {}", e);
        }
    }
}

fn newly_added(before: &GameState, after: &GameState) -> Vec<AchievementId> {
    after
        .achievements
        .iter()
        .copied()
        .filter(|id| !before.has_achievement(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::persistence::{MemoryStore, StorageError};

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        }
        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn saved_state(store: &GameStore) -> GameState {
        let json = store.backend().get(STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_open_without_save_uses_default() {
        let store = GameStore::open(Box::new(MemoryStore::new()));
        assert_eq!(store.state(), &GameState::default());
    }

    #[test]
    fn test_open_restores_saved_state() {
        let json = r#"{"totalScore":330,"questionsAnswered":3,"correctAnswers":3,
            "categoriesCompleted":["animals"],"achievements":["first-correct"],"currentStreak":3}"#;
        let store = GameStore::open(Box::new(MemoryStore::with_entry(STORAGE_KEY, json)));

        assert_eq!(store.state().total_score, 330);
        assert_eq!(store.state().categories_completed, vec!["animals".to_string()]);
        assert!(store.state().has_achievement(AchievementId::FirstCorrect));
    }

    #[test]
    fn test_open_with_corrupt_save_falls_back_to_default() {
        let store = GameStore::open(Box::new(MemoryStore::with_entry(STORAGE_KEY, "{oops")));
        assert_eq!(store.state(), &GameState::default());
    }

    #[test]
    fn test_open_with_unreadable_backend_falls_back_to_default() {
        let store = GameStore::open(Box::new(FailingStore));
        assert_eq!(store.state(), &GameState::default());
    }

    #[test]
    fn test_dispatch_writes_through() {
        let mut store = GameStore::open(Box::new(MemoryStore::new()));
        store.answer_question(true, 100);

        assert_eq!(&saved_state(&store), store.state());
    }

    #[test]
    fn test_every_change_is_saved() {
        let mut store = GameStore::open(Box::new(MemoryStore::new()));
        store.answer_question(true, 100);
        store.answer_question(false, 0);
        store.complete_category("animals");

        let saved = saved_state(&store);
        assert_eq!(saved.questions_answered, 2);
        assert_eq!(saved.categories_completed, vec!["animals".to_string()]);
    }

    #[test]
    fn test_unchanged_state_is_not_rewritten() {
        let mut store = GameStore::open(Box::new(MemoryStore::new()));
        store.dispatch(GameAction::Reset);
        assert_eq!(store.backend().get(STORAGE_KEY).unwrap(), None);

        store.complete_category("space");
        let first = store.backend().get(STORAGE_KEY).unwrap();
        store.complete_category("space");
        assert_eq!(store.backend().get(STORAGE_KEY).unwrap(), first);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let mut store = GameStore::open(Box::new(FailingStore));
        store.answer_question(true, 100);
        assert_eq!(store.state().total_score, 100);
    }

    #[test]
    fn test_reset_clears_save() {
        let mut store = GameStore::open(Box::new(MemoryStore::new()));
        store.answer_question(true, 100);
        store.reset();

        assert_eq!(store.state(), &GameState::default());
        assert_eq!(store.backend().get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_reset_clears_unparsable_save() {
        let mut store = GameStore::open(Box::new(MemoryStore::with_entry(STORAGE_KEY, "{oops")));
        assert_eq!(store.state(), &GameState::default());

        store.reset();
        assert_eq!(store.backend().get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_load_replaces_state() {
        let mut store = GameStore::open(Box::new(MemoryStore::new()));
        let replacement = GameState {
            total_score: 42,
            questions_answered: 1,
            correct_answers: 1,
            ..GameState::default()
        };
        store.load(replacement.clone());
        assert_eq!(store.state(), &replacement);
        assert_eq!(saved_state(&store), replacement);
    }
}

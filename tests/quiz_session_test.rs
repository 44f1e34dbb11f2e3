//! Integration test: playing whole categories through a quiz session
//!
//! Drives `QuizSession` against a real `GameStore` (memory-backed) and checks
//! scoring, streak bonuses, category completion and the results summary.

use std::time::Instant;
use trivia::audio::AudioFeedback;
use trivia::categories::find_category;
use trivia::quiz::{advance, select_answer, Grade};
use trivia::utils::persistence::MemoryStore;
use trivia::{GameStore, QuizPhase, QuizSession};

/// Records which cues were triggered.
#[derive(Default)]
struct RecordingAudio {
    cues: Vec<&'static str>,
    music: bool,
}

impl AudioFeedback for RecordingAudio {
    fn play_correct(&mut self) {
        self.cues.push("correct");
    }
    fn play_incorrect(&mut self) {
        self.cues.push("incorrect");
    }
    fn play_click(&mut self) {
        self.cues.push("click");
    }
    fn play_complete(&mut self) {
        self.cues.push("complete");
    }
    fn toggle_music(&mut self) {
        self.music = !self.music;
    }
    fn is_music_playing(&self) -> bool {
        self.music
    }
}

fn new_store() -> GameStore {
    GameStore::open(Box::new(MemoryStore::new()))
}

/// Answer every question in order; `pattern[i]` says whether to answer
/// question `i` correctly.
fn play(
    session: &mut QuizSession,
    store: &mut GameStore,
    audio: &mut RecordingAudio,
    pattern: &[bool],
) {
    let now = Instant::now();
    for &right in pattern {
        let question = session.current_question();
        let index = if right {
            question.correct_answer
        } else {
            (question.correct_answer + 1) % question.options.len()
        };
        assert!(select_answer(session, index, store, audio, now).is_some());
        assert!(advance(session, store, audio).is_some());
    }
}

// =============================================================================
// Scoring scenarios
// =============================================================================

#[test]
fn test_correct_correct_incorrect() {
    let category = find_category("geography").unwrap();
    assert_eq!(category.question_count(), 3);
    let mut session = QuizSession::new(category).unwrap();
    let mut store = new_store();
    let mut audio = RecordingAudio::default();

    play(&mut session, &mut store, &mut audio, &[true, true, false]);

    let state = store.state();
    assert_eq!(state.total_score, 210);
    assert_eq!(state.correct_answers, 2);
    assert_eq!(state.questions_answered, 3);
    assert_eq!(state.current_streak, 0);
    assert!(!state.has_completed("geography"));

    let summary = session.summary().unwrap();
    assert_eq!(summary.score, 210);
    assert_eq!(summary.correct, 2);
    assert_eq!(summary.accuracy, 67);
    assert!(!summary.mastered);
    assert_eq!(summary.grade(), Grade::GoodJob);
}

#[test]
fn test_all_correct_masters_category() {
    let category = find_category("geography").unwrap();
    let mut session = QuizSession::new(category).unwrap();
    let mut store = new_store();
    let mut audio = RecordingAudio::default();

    play(&mut session, &mut store, &mut audio, &[true, true, true]);

    let state = store.state();
    assert_eq!(state.total_score, 330);
    assert_eq!(state.categories_completed, vec!["geography".to_string()]);
    assert!(state.has_achievement(trivia::AchievementId::CategoryMaster));

    let summary = session.summary().unwrap();
    assert!(summary.mastered);
    assert_eq!(summary.accuracy, 100);
    assert_eq!(summary.grade(), Grade::Perfect);
}

#[test]
fn test_only_last_question_wrong_is_not_mastery() {
    let category = find_category("space").unwrap();
    let mut session = QuizSession::new(category).unwrap();
    let mut store = new_store();
    let mut audio = RecordingAudio::default();

    play(&mut session, &mut store, &mut audio, &[true, true, true, false]);

    assert!(!store.state().has_completed("space"));
    assert_eq!(session.summary().unwrap().correct, 3);
}

#[test]
fn test_only_last_question_right_counts_toward_total() {
    let category = find_category("space").unwrap();
    let mut session = QuizSession::new(category).unwrap();
    let mut store = new_store();
    let mut audio = RecordingAudio::default();

    play(&mut session, &mut store, &mut audio, &[false, false, false, true]);

    let summary = session.summary().unwrap();
    assert_eq!(summary.correct, 1);
    assert_eq!(summary.accuracy, 25);
    assert_eq!(summary.score, 100);
}

#[test]
fn test_streak_carries_across_categories() {
    let mut store = new_store();
    let mut audio = RecordingAudio::default();

    let mut first = QuizSession::new(find_category("geography").unwrap()).unwrap();
    play(&mut first, &mut store, &mut audio, &[true, true, true]);

    // Streak is 3 going in, so the first answer is worth 130
    let mut second = QuizSession::new(find_category("history").unwrap()).unwrap();
    play(&mut second, &mut store, &mut audio, &[true, true, true]);

    assert_eq!(second.score, 130 + 140 + 150);
    assert_eq!(store.state().current_streak, 6);
    assert_eq!(store.state().categories_completed.len(), 2);
}

#[test]
fn test_replaying_mastered_category_does_not_duplicate() {
    let mut store = new_store();
    let mut audio = RecordingAudio::default();

    for _ in 0..2 {
        let mut session = QuizSession::new(find_category("history").unwrap()).unwrap();
        play(&mut session, &mut store, &mut audio, &[true, true, true]);
    }

    assert_eq!(
        store.state().categories_completed,
        vec!["history".to_string()]
    );
}

// =============================================================================
// Phase guards and audio
// =============================================================================

#[test]
fn test_complete_session_ignores_further_input() {
    let mut session = QuizSession::new(find_category("geography").unwrap()).unwrap();
    let mut store = new_store();
    let mut audio = RecordingAudio::default();
    play(&mut session, &mut store, &mut audio, &[true, true, true]);

    assert_eq!(session.phase, QuizPhase::Complete);
    assert!(select_answer(&mut session, 0, &mut store, &mut audio, Instant::now()).is_none());
    assert!(advance(&mut session, &mut store, &mut audio).is_none());
    assert_eq!(store.state().questions_answered, 3);
}

#[test]
fn test_audio_cues_follow_answers() {
    let mut session = QuizSession::new(find_category("geography").unwrap()).unwrap();
    let mut store = new_store();
    let mut audio = RecordingAudio::default();

    play(&mut session, &mut store, &mut audio, &[true, false, true]);

    assert_eq!(
        audio.cues,
        vec![
            "click", "correct", "click", // q1 answered, advance
            "click", "incorrect", "click", // q2
            "click", "correct", "click", "complete", // q3 and finish
        ]
    );
}

// Scoring
pub const BASE_POINTS: u32 = 100;
pub const STREAK_BONUS_PER_ANSWER: u32 = 10;

// Timing
pub const TICK_INTERVAL_MS: u64 = 50;
pub const FUN_FACT_DELAY_MS: u64 = 1500;

// Persistence
pub const STORAGE_KEY: &str = "trivia-game-state";
pub const DATA_DIR_NAME: &str = ".trivia";
pub const LOG_DIR_NAME: &str = "logs";
pub const LOG_FILE_NAME: &str = "trivia.log";

// Environment overrides
pub const DATA_DIR_ENV: &str = "TRIVIA_DATA_DIR";
pub const MUTE_ENV: &str = "TRIVIA_MUTE";

// Results grading thresholds (accuracy percent)
pub const GRADE_EXCELLENT_MIN: u32 = 80;
pub const GRADE_GOOD_MIN: u32 = 60;

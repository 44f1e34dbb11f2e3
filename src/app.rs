//! UI-agnostic application controller.
//!
//! Owns the store, the audio collaborator and the current screen. The binary
//! feeds it `AppInput`s and ticks; the `ui` module only reads from it.

use crate::audio::AudioFeedback;
use crate::categories::{all_categories, find_category, ContentError};
use crate::core::store::GameStore;
use crate::quiz::{advance, poll_fun_fact, select_answer, QuizPhase, QuizSession};
use crossterm::event::KeyCode;
use std::time::Instant;

/// Input events, already decoupled from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    Up,
    Down,
    /// Enter or space
    Confirm,
    /// A numbered or lettered choice (`1`/`a` is 0)
    Choose(usize),
    ToggleAchievements,
    ToggleMusic,
    Back,
    Quit,
    Other,
}

impl AppInput {
    pub fn from_key(code: KeyCode) -> Self {
        match code {
            KeyCode::Up | KeyCode::Char('k') => AppInput::Up,
            KeyCode::Down | KeyCode::Char('j') => AppInput::Down,
            KeyCode::Enter | KeyCode::Char(' ') => AppInput::Confirm,
            KeyCode::Esc => AppInput::Back,
            KeyCode::Char('q') | KeyCode::Char('Q') => AppInput::Quit,
            KeyCode::Char('t') | KeyCode::Char('T') => AppInput::ToggleAchievements,
            KeyCode::Char('m') | KeyCode::Char('M') => AppInput::ToggleMusic,
            KeyCode::Char(c @ '1'..='9') => AppInput::Choose(c as usize - '1' as usize),
            KeyCode::Char(c @ 'a'..='h') => AppInput::Choose(c as usize - 'a' as usize),
            _ => AppInput::Other,
        }
    }
}

/// Menu state for the category list.
#[derive(Debug, Clone, Default)]
pub struct HomeScreen {
    pub selected_index: usize,
    pub show_achievements: bool,
}

impl HomeScreen {
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self, max_items: usize) {
        if self.selected_index + 1 < max_items {
            self.selected_index += 1;
        }
    }
}

pub enum Screen {
    Home,
    Quiz(QuizSession),
}

pub struct App {
    pub store: GameStore,
    pub audio: Box<dyn AudioFeedback>,
    pub screen: Screen,
    pub home: HomeScreen,
    /// One-line message shown on the home screen (e.g. a lookup failure).
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: GameStore, audio: Box<dyn AudioFeedback>) -> Self {
        Self {
            store,
            audio,
            screen: Screen::Home,
            home: HomeScreen::default(),
            status: None,
            should_quit: false,
        }
    }

    pub fn session(&self) -> Option<&QuizSession> {
        match &self.screen {
            Screen::Quiz(session) => Some(session),
            Screen::Home => None,
        }
    }

    /// Start a quiz for `id`. Unknown or empty categories leave the app on
    /// the home screen with a status message.
    pub fn open_category(&mut self, id: &str) -> Result<(), ContentError> {
        let opened = find_category(id).and_then(QuizSession::new);
        match opened {
            Ok(session) => {
                tracing::info!(category = id, "Starting category");
                self.status = None;
                self.screen = Screen::Quiz(session);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Could not open category: {}", e);
                self.status = Some(format!("Oops! {}", e));
                self.screen = Screen::Home;
                Err(e)
            }
        }
    }

    pub fn return_home(&mut self) {
        self.screen = Screen::Home;
    }

    pub fn handle_input(&mut self, input: AppInput, now: Instant) {
        match input {
            AppInput::Quit => {
                self.should_quit = true;
                return;
            }
            AppInput::ToggleMusic => {
                self.audio.toggle_music();
                return;
            }
            _ => {}
        }

        if matches!(self.screen, Screen::Home) {
            self.handle_home_input(input);
        } else {
            self.handle_quiz_input(input, now);
        }
    }

    fn handle_home_input(&mut self, input: AppInput) {
        let categories = all_categories();
        match input {
            AppInput::Up => self.home.move_up(),
            AppInput::Down => self.home.move_down(categories.len()),
            AppInput::ToggleAchievements => {
                self.home.show_achievements = !self.home.show_achievements;
            }
            AppInput::Confirm => self.pick_category(self.home.selected_index),
            AppInput::Choose(index) => {
                if index < categories.len() {
                    self.home.selected_index = index;
                    self.pick_category(index);
                }
            }
            AppInput::Back => self.should_quit = true,
            _ => {}
        }
    }

    fn pick_category(&mut self, index: usize) {
        self.audio.play_click();
        if let Some(category) = all_categories().get(index) {
            // Failure is already reported through `status`
            let _ = self.open_category(category.id);
        }
    }

    fn handle_quiz_input(&mut self, input: AppInput, now: Instant) {
        let Screen::Quiz(session) = &mut self.screen else {
            return;
        };

        match (session.phase, input) {
            (_, AppInput::Back) => {
                self.audio.play_click();
                self.return_home();
            }
            (QuizPhase::Answering, AppInput::Choose(index)) => {
                select_answer(session, index, &mut self.store, &mut *self.audio, now);
            }
            (QuizPhase::Revealed, AppInput::Confirm) => {
                advance(session, &mut self.store, &mut *self.audio);
            }
            (QuizPhase::Complete, AppInput::Confirm) => {
                self.audio.play_click();
                self.return_home();
            }
            _ => {}
        }
    }

    /// Advance timers (the delayed fun fact).
    pub fn tick(&mut self, now: Instant) {
        if let Screen::Quiz(session) = &mut self.screen {
            poll_fun_fact(session, now);
        }
    }
}

//! Terminal rendering. Reads from [`App`]; never mutates game state.

pub mod home_scene;
pub mod quiz_scene;

use crate::app::{App, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Draw whichever screen is active.
pub fn draw_app(frame: &mut Frame, app: &App) {
    let area = centered_column(frame.size(), 72);
    match &app.screen {
        Screen::Home => home_scene::render_home(frame, area, app),
        Screen::Quiz(session) => {
            if session.is_complete() {
                quiz_scene::render_results(frame, area, session);
            } else {
                quiz_scene::render_quiz(frame, area, session, app.store.state());
            }
        }
    }
}

/// Narrow the drawing area to a centered column at most `max_width` wide.
fn centered_column(area: Rect, max_width: u16) -> Rect {
    if area.width <= max_width {
        return area;
    }
    let side = (area.width - max_width) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(side),
            Constraint::Length(max_width),
            Constraint::Min(0),
        ])
        .split(area)[1]
}

//! Category menu with the stats bar and achievements panel.

use crate::achievements::{unlock_progress, ALL_ACHIEVEMENTS};
use crate::app::App;
use crate::categories::all_categories;
use crate::core::game_state::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.store.state();
    let achievements_height = if app.home.show_achievements {
        ALL_ACHIEVEMENTS.len() as u16 + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Title
            Constraint::Length(4),                   // Stats bar
            Constraint::Length(achievements_height), // Achievements panel
            Constraint::Min(0),                      // Categories
            Constraint::Length(1),                   // Status
            Constraint::Length(1),                   // Help
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "🧠 Trivia Mania",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Test your brain, have a laugh!",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    render_stats_bar(frame, chunks[1], state, app.audio.is_music_playing());

    if app.home.show_achievements {
        render_achievements_panel(frame, chunks[2], state);
    }

    render_categories(frame, chunks[3], state, app.home.selected_index);

    if let Some(status) = &app.status {
        let line = Paragraph::new(status.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(line, chunks[4]);
    }

    let (unlocked, total) = unlock_progress(state);
    let help = Paragraph::new(format!(
        "[↑/↓] Select  [Enter] Play  [t] Achievements ({}/{})  [m] Music  [q] Quit",
        unlocked, total
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn render_stats_bar(frame: &mut Frame, area: Rect, state: &GameState, music_playing: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(inner);

    let stats = [
        (state.total_score.to_string(), "Score"),
        (state.correct_answers.to_string(), "Correct"),
        (state.categories_completed.len().to_string(), "Categories"),
        (
            if music_playing { "♪ on" } else { "♪ off" }.to_string(),
            "Music",
        ),
    ];

    for ((value, label), column) in stats.into_iter().zip(columns.iter()) {
        let text = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(text, *column);
    }
}

fn render_achievements_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .title(" 🏆 Your Achievements ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = ALL_ACHIEVEMENTS
        .iter()
        .map(|def| {
            let unlocked = state.has_achievement(def.id);
            let (name_style, desc_style) = if unlocked {
                (
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::White),
                )
            } else {
                (
                    Style::default().fg(Color::DarkGray),
                    Style::default().fg(Color::DarkGray),
                )
            };
            Line::from(vec![
                Span::raw(format!("{} ", def.icon)),
                Span::styled(format!("{:<16}", def.name), name_style),
                Span::styled(def.description, desc_style),
                Span::styled(
                    if unlocked { " ★" } else { "" },
                    Style::default().fg(Color::Yellow),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_categories(frame: &mut Frame, area: Rect, state: &GameState, selected: usize) {
    let block = Block::default()
        .title(" Choose Your Challenge! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (i, category) in all_categories().iter().enumerate() {
        let is_selected = i == selected;
        let marker = if is_selected { "▶ " } else { "  " };
        let name_style = if is_selected {
            Style::default()
                .fg(category.color)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(category.color)
        };

        let mut spans = vec![
            Span::raw(marker),
            Span::raw(format!("{}. {} ", i + 1, category.emoji)),
            Span::styled(category.name, name_style),
            Span::styled(
                format!("  {} questions", category.question_count()),
                Style::default().fg(Color::Gray),
            ),
        ];
        if state.has_completed(category.id) {
            spans.push(Span::styled(
                "  ✓ Complete",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            format!("      {}", category.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

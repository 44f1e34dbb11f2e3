//! Question and results screens for a quiz session.

use crate::core::game_state::GameState;
use crate::quiz::{Grade, QuizSession};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

/// Render the active question.
pub fn render_quiz(frame: &mut Frame, area: Rect, session: &QuizSession, state: &GameState) {
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(1), // Progress
            Constraint::Min(10),   // Question card
            Constraint::Length(1), // Streak
            Constraint::Length(1), // Help
        ])
        .split(area);

    render_header(frame, chunks[0], session);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(session.category.color))
        .percent(session.progress_percent())
        .label("");
    frame.render_widget(gauge, chunks[1]);

    render_question_card(frame, chunks[2], session);

    if state.current_streak > 0 {
        let streak = Paragraph::new(Span::styled(
            format!("⚡ Streak: {}", state.current_streak),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(streak, chunks[3]);
    }

    let help = if session.is_revealed() {
        let next = if session.is_last_question() {
            "Finish Category"
        } else {
            "Next Question"
        };
        format!("[Enter] {}  [Esc] Back  [m] Music", next)
    } else {
        "[a-d / 1-4] Answer  [Esc] Back  [m] Music".to_string()
    };
    frame.render_widget(
        Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[4],
    );
}

fn render_header(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} {}", session.category.emoji, session.category.name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Question {} of {}",
                session.question_index + 1,
                session.total_questions()
            ),
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(title, columns[0]);

    let score = Paragraph::new(format!("Score: {}", session.score))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Right);
    frame.render_widget(score, columns[1]);
}

fn render_question_card(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(session.category.color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let question = session.current_question();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            question.prompt,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, option) in question.options.iter().enumerate() {
        let letter = (b'A' + i as u8) as char;
        let style = if !session.is_revealed() {
            Style::default().fg(Color::White)
        } else if question.is_correct(i) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if session.selected_answer == Some(i) {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", letter), style.add_modifier(Modifier::BOLD)),
            Span::styled(format!("{} ", option), style),
        ]));
    }

    if session.is_revealed() {
        lines.push(Line::from(""));
        let verdict = match session.last_answer_correct {
            Some(true) => Span::styled(
                "✔ Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            _ => Span::styled(
                "✘ Not quite!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::from(verdict));
    }

    if session.show_fun_fact {
        if let Some(fact) = question.fun_fact {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "💡 Fun Fact!",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                fact,
                Style::default().fg(Color::White),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Render the end-of-category summary.
pub fn render_results(frame: &mut Frame, area: Rect, session: &QuizSession) {
    frame.render_widget(Clear, area);

    let Some(summary) = session.summary() else {
        return;
    };
    let grade = summary.grade();

    let block = Block::default()
        .title(format!(" {} {} ", session.category.emoji, session.category.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(session.category.color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::raw(grade.emoji())),
        Line::from(Span::styled(
            grade.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Score: {} points", summary.score)),
        Line::from(format!("Accuracy: {}%", summary.accuracy)),
        Line::from(format!("{}/{} correct", summary.correct, summary.total)),
    ];

    if grade == Grade::Perfect {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "🎯 Category Mastered!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "You've unlocked the Category Master achievement!",
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Back to Categories",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

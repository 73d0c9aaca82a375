use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use super::{layout, middle_rows, render_footer};
use crate::{
    app::{ActiveGame, App, AppState},
    games::GameKind,
};

/// A UI Screen boundary: renders one `AppState`
pub trait Screen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Game picker
pub struct MenuScreen;

impl Screen for MenuScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let areas = layout::menu_areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "🎈 Quizling 🎈",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("Pick a game to play!"),
        ])
        .alignment(Alignment::Center)
        .render(areas.title, buf);

        let rects = layout::menu_rects(areas.grid, GameKind::ALL.len());
        for (i, (kind, rect)) in GameKind::ALL.iter().zip(rects).enumerate() {
            let selected = i == app.menu_index;
            let border = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("{}. {} {}", i + 1, kind.icon(), kind.title()),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(kind.blurb()),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().border_style(border))
            .render(rect, buf);
        }

        render_footer("arrows: move · Enter: play · 1-9: pick · Esc: quit", areas.footer, buf);
    }
}

/// Title card before the first round
pub struct StartScreen;

impl Screen for StartScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let Some(kind) = app.kind() else {
            return;
        };
        let body = middle_rows(area, 7);

        Paragraph::new(vec![
            Line::from(kind.icon()),
            Line::from(""),
            Line::from(Span::styled(
                kind.title(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(kind.blurb()),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to start",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Esc: back",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ])
        .alignment(Alignment::Center)
        .render(body, buf);
    }
}

/// Whichever game is being played
pub struct PlayingScreen;

impl Screen for PlayingScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        match app.game() {
            Some(ActiveGame::Quiz { session }) => super::quiz::render(app, session, area, buf),
            Some(ActiveGame::Tracing { session, canvas }) => {
                super::tracing::render(app, session, canvas, area, buf)
            }
            Some(ActiveGame::Matching { deck, cursor }) => {
                super::matching::render(deck, *cursor, app.content(), area, buf)
            }
            None => {}
        }
    }
}

/// Stars and a summary once the game is over
pub struct CompleteScreen;

impl Screen for CompleteScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let summary = match app.game() {
            Some(ActiveGame::Quiz { session }) => {
                format!("You got {} out of {}!", session.score(), session.total_rounds())
            }
            Some(ActiveGame::Tracing { session, .. }) => {
                format!("You traced {} of {}!", session.score(), session.total_rounds())
            }
            Some(ActiveGame::Matching { deck, .. }) => {
                format!("Found all pairs in {} moves!", deck.moves())
            }
            None => String::new(),
        };
        let stars = "⭐".repeat(app.stars().unwrap_or(1) as usize);
        let body = middle_rows(area, 7);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "🏆 Great job! 🏆",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(stars),
            Line::from(""),
            Line::from(summary),
            Line::from(""),
            Line::from(Span::styled(
                "Enter: play again · Esc: menu",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ])
        .alignment(Alignment::Center)
        .render(body, buf);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: AppState) -> Box<dyn Screen> {
    match state {
        AppState::Menu => Box::new(MenuScreen),
        AppState::Start => Box::new(StartScreen),
        AppState::Playing => Box::new(PlayingScreen),
        AppState::Complete => Box::new(CompleteScreen),
    }
}

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use unicode_width::UnicodeWidthStr;

use super::{layout, middle_rows, render_footer, render_progress, render_title, tile_span};
use crate::{
    app::App,
    games::{Question, QuizQuestions, Tile},
    round::{Phase, RoundSession},
};

pub fn render(app: &App, session: &RoundSession<Question, QuizQuestions>, area: Rect, buf: &mut Buffer) {
    let Some(question) = session.question() else {
        return;
    };
    let quiz = question.as_quiz();
    let options = quiz.options();
    let areas = layout::playing_areas(area, options.len());
    let content = app.content();

    render_progress(
        format!("Round {}/{}", session.current_round(), session.total_rounds()),
        format!("⭐ {}", session.score()),
        session.current_round() as f64 / session.total_rounds() as f64,
        areas.header,
        buf,
    );
    render_title(quiz.title(), areas.title, buf);

    let big = Style::default().add_modifier(Modifier::BOLD);
    let display = quiz.display();
    let mut shown = Vec::new();
    for (i, tile) in display.iter().enumerate() {
        if i > 0 {
            shown.push(Span::raw(" "));
        }
        shown.push(tile_span(content, tile, big));
    }
    Paragraph::new(Line::from(shown))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(middle_rows(areas.stage, stage_rows(&display, areas.stage.width)), buf);

    let rects = layout::option_rects(areas.options, options.len());
    for (i, (tile, rect)) in options.iter().zip(rects).enumerate() {
        let wrong = app.wrong_choice() == Some(i);
        let mut rect = rect;
        // wobble the wrong answer sideways while it shakes
        if wrong && app.is_shaking() && app.frame() % 2 == 0 && rect.width > 1 {
            rect.x += 1;
            rect.width -= 1;
        }
        let border = if wrong {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        Paragraph::new(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), Style::default().add_modifier(Modifier::DIM)),
            tile_span(content, tile, big),
        ]))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(border))
        .render(rect, buf);
    }

    let footer = match session.phase() {
        Phase::Resolving => "🎉 Great job! 🎉",
        _ if app.is_shaking() => "Oops! Try again!",
        _ => "1-4 or click: answer · Esc: menu",
    };
    render_footer(footer, areas.footer, buf);
}

/// Rows the display tiles wrap onto, so a long row of animals stays centred
fn stage_rows(tiles: &[Tile], width: u16) -> u16 {
    let cells: usize = tiles.iter().map(|t| t.text.width() + 1).sum();
    let width = usize::from(width.max(1));
    cells.div_ceil(width).clamp(1, u16::MAX as usize) as u16
}

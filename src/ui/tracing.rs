use itertools::iproduct;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Widget,
    },
};

use super::{layout, palette, render_footer, render_progress, render_title};
use crate::{
    app::App,
    canvas::StrokeCanvas,
    content::TracingGlyph,
    games::tracing::{title, TracingPrompts},
    round::{Phase, RoundSession},
};

const GUIDE_COLS: usize = 5;
const GUIDE_ROWS: usize = 7;

/// 5x7 dot patterns drawn faintly for the child to trace over
fn guide_bitmap(glyph: char) -> Option<[&'static str; GUIDE_ROWS]> {
    let rows = match glyph {
        'A' => [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'B' => ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."],
        'C' => [".####", "#....", "#....", "#....", "#....", "#....", ".####"],
        'D' => ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."],
        'E' => ["#####", "#....", "#....", "####.", "#....", "#....", "#####"],
        '1' => ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."],
        '2' => [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"],
        '3' => ["####.", "....#", "....#", ".###.", "....#", "....#", "####."],
        '4' => ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."],
        '5' => ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."],
        _ => return None,
    };
    Some(rows)
}

/// Canvas-space segments joining neighbouring dots of the guide pattern
pub fn guide_segments(glyph: char) -> Vec<((f64, f64), (f64, f64))> {
    let Some(rows) = guide_bitmap(glyph) else {
        return Vec::new();
    };
    let filled = |r: isize, c: isize| {
        r >= 0
            && c >= 0
            && (r as usize) < GUIDE_ROWS
            && (c as usize) < GUIDE_COLS
            && rows[r as usize].as_bytes()[c as usize] == b'#'
    };
    let to_canvas = |r: isize, c: isize| {
        let x = 20.0 + c as f64 * 15.0;
        let y = 90.0 - r as f64 * (80.0 / (GUIDE_ROWS - 1) as f64);
        (x, y)
    };

    let mut segments = Vec::new();
    for (r, c) in iproduct!(0..GUIDE_ROWS as isize, 0..GUIDE_COLS as isize) {
        if !filled(r, c) {
            continue;
        }
        if filled(r, c + 1) {
            segments.push((to_canvas(r, c), to_canvas(r, c + 1)));
        }
        if filled(r + 1, c) {
            segments.push((to_canvas(r, c), to_canvas(r + 1, c)));
        }
        // diagonals only where no square corner already joins the dots
        for dc in [-1, 1] {
            if filled(r + 1, c + dc) && !filled(r, c + dc) && !filled(r + 1, c) {
                segments.push((to_canvas(r, c), to_canvas(r + 1, c + dc)));
            }
        }
    }
    segments
}

pub fn render(
    app: &App,
    session: &RoundSession<TracingGlyph, TracingPrompts>,
    canvas: &StrokeCanvas,
    area: Rect,
    buf: &mut Buffer,
) {
    let Some(glyph) = session.question() else {
        return;
    };
    let areas = layout::playing_areas(area, 0);
    let ink = palette(app.content(), &glyph.color);

    render_progress(
        format!("Round {}/{}", session.current_round(), session.total_rounds()),
        format!("⭐ {}", session.score()),
        session.current_round() as f64 / session.total_rounds() as f64,
        areas.header,
        buf,
    );
    render_title(title(glyph), areas.title, buf);

    let guide = guide_segments(glyph.glyph);
    let border = if app.is_shaking() { Color::Red } else { ink };
    Canvas::default()
        .block(Block::bordered().border_style(Style::default().fg(border)))
        .marker(Marker::Braille)
        .x_bounds([0.0, layout::CANVAS_SIZE])
        .y_bounds([0.0, layout::CANVAS_SIZE])
        .paint(|ctx| {
            for ((x1, y1), (x2, y2)) in &guide {
                ctx.draw(&CanvasLine {
                    x1: *x1,
                    y1: *y1,
                    x2: *x2,
                    y2: *y2,
                    color: Color::DarkGray,
                });
            }
            if guide.is_empty() {
                ctx.draw(&Points {
                    coords: &[(50.0, 50.0)],
                    color: Color::DarkGray,
                });
            }
            ctx.layer();
            for (from, to) in canvas.segments() {
                ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: from.y,
                    x2: to.x,
                    y2: to.y,
                    color: ink,
                });
            }
        })
        .render(layout::canvas_rect(areas.stage), buf);

    let footer = match session.phase() {
        Phase::Resolving => "🎉 Great tracing! 🎉",
        _ if app.is_shaking() => "Draw on the letter first!",
        _ => "drag to draw · Enter: done · c: clear · Esc: menu",
    };
    render_footer(footer, areas.footer, buf);
}

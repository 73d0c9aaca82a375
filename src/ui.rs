pub mod layout;
pub mod matching;
pub mod quiz;
pub mod screen;
pub mod tracing;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use crate::{app::App, celebration::CelebrationAnimation, content::Content, games::Tile};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        screen::current_screen(self.state).render(self, area, buf);

        if self.celebration.is_active() {
            render_celebration_particles(&self.celebration, area, buf);
        }
    }
}

/// Terminal color for a palette name, white if unknown
pub(crate) fn palette(content: &Content, name: &str) -> Color {
    content
        .color(name)
        .and_then(|c| c.rgb())
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

pub(crate) fn tile_span(content: &Content, tile: &Tile, base: Style) -> Span<'static> {
    let style = match &tile.color {
        Some(name) => base.fg(palette(content, name)),
        None => base,
    };
    Span::styled(tile.text.clone(), style)
}

/// `height` rows in the vertical middle of `area`
pub(crate) fn middle_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

/// "Round n/N" on the left, the score on the right, a progress bar below
pub(crate) fn render_progress(label: String, score: String, ratio: f64, area: Rect, buf: &mut Buffer) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let top = Rect { height: 1, ..area };

    Paragraph::new(Span::styled(label, bold)).render(top, buf);
    Paragraph::new(Span::styled(score, bold.fg(Color::Yellow)))
        .alignment(Alignment::Right)
        .render(top, buf);

    if area.height > 1 {
        let bar = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        Gauge::default()
            .ratio(ratio.clamp(0.0, 1.0))
            .gauge_style(Style::default().fg(Color::Magenta))
            .label("")
            .render(bar, buf);
    }
}

pub(crate) fn render_title(text: String, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .render(area, buf);
}

pub(crate) fn render_footer(text: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center)
    .render(area, buf);
}

/// Render confetti on top of whatever screen is showing
fn render_celebration_particles(celebration: &CelebrationAnimation, area: Rect, buf: &mut Buffer) {
    for particle in celebration.particles.iter().filter(|p| p.is_visible()) {
        if particle.x < 0.0 || particle.y < 0.0 {
            continue;
        }
        let x = particle.x as u16;
        let y = particle.y as u16;

        if x < area.width && y < area.height {
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_symbol(particle.symbol);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::config::Config;
    use crate::feedback::Silent;
    use crate::games::GameKind;
    use std::sync::Arc;
    use std::time::Instant;

    fn test_app() -> App {
        let content = Arc::new(Content::load().unwrap());
        App::new(Config::default(), content, Box::new(Silent))
    }

    fn rendered(app: &App, area: Rect) -> String {
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_menu_lists_games() {
        let app = test_app();
        let text = rendered(&app, Rect::new(0, 0, 100, 30));
        assert!(text.contains("Quizling"));
        assert!(text.contains("Memory Match"));
        assert!(text.contains("Tracing"));
    }

    #[test]
    fn test_start_and_playing_screens() {
        let mut app = test_app();
        app.launch(GameKind::Sorting);
        assert!(rendered(&app, Rect::new(0, 0, 80, 24)).contains("Press Enter to start"));

        app.begin();
        assert_eq!(app.state, AppState::Playing);
        let text = rendered(&app, Rect::new(0, 0, 80, 24));
        assert!(text.contains("Round 1/10"));
        assert!(text.contains("Which is"));
    }

    #[test]
    fn test_every_game_renders_at_odd_sizes() {
        for kind in GameKind::ALL {
            let mut app = test_app();
            app.launch(kind);
            app.begin();
            for area in [Rect::new(0, 0, 80, 24), Rect::new(0, 0, 20, 8), Rect::new(0, 0, 3, 2)] {
                app.resize(area.width, area.height);
                let mut buffer = Buffer::empty(area);
                (&app).render(area, &mut buffer);
                assert_eq!(*buffer.area(), area);
            }
        }
    }

    #[test]
    fn test_celebration_overlay() {
        let mut app = test_app();
        app.celebration.start(Instant::now(), 80, 24);
        for p in app.celebration.particles.iter_mut() {
            p.delay = 0.0;
        }
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&app).render(area, &mut buffer);
        assert_eq!(*buffer.area(), area);
    }

    #[test]
    fn test_middle_rows() {
        let area = Rect::new(0, 2, 10, 10);
        assert_eq!(middle_rows(area, 2), Rect::new(0, 6, 10, 2));
        assert_eq!(middle_rows(area, 20), area);
    }
}

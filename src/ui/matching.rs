use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::{layout, palette, render_footer, render_progress, render_title};
use crate::{content::Content, games::matching::MatchingDeck};

pub fn render(deck: &MatchingDeck, cursor: usize, content: &Content, area: Rect, buf: &mut Buffer) {
    let areas = layout::playing_areas(area, 0);

    render_progress(
        format!("Moves: {}", deck.moves()),
        format!("Pairs: {}/{}", deck.matches_found(), deck.pairs()),
        deck.matches_found() as f64 / deck.pairs().max(1) as f64,
        areas.header,
        buf,
    );
    render_title("Find the matching pairs!".to_string(), areas.title, buf);

    let rects = layout::card_rects(areas.stage, deck.cards().len());
    for (pos, (card, rect)) in deck.cards().iter().zip(rects).enumerate() {
        let face = if card.face_up || card.matched {
            Span::styled(
                card.pattern.shape.glyph().to_string(),
                Style::default()
                    .fg(palette(content, &card.pattern.color))
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("?", Style::default().fg(Color::Magenta))
        };

        let mut border = if card.matched {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Cyan)
        };
        if pos == cursor {
            border = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }

        Paragraph::new(Line::from(face))
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(border))
            .render(rect, buf);
    }

    render_footer("arrows + Enter or click: flip · Esc: menu", areas.footer, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ColoredShape, Shape};
    use crate::games::matching::same_pattern;
    use crate::match_grid::MatchGrid;

    fn card(shape: Shape, color: &str) -> ColoredShape {
        ColoredShape {
            shape,
            color: color.into(),
        }
    }

    fn render_deck(deck: &MatchingDeck) -> String {
        let content = Content::load().unwrap();
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        render(deck, 0, &content, area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_face_down_cards_hide_their_shape() {
        let layout = vec![
            card(Shape::Star, "red"),
            card(Shape::Heart, "blue"),
            card(Shape::Star, "red"),
            card(Shape::Heart, "blue"),
        ];
        let mut deck = MatchGrid::from_layout(layout, same_pattern).unwrap();

        let text = render_deck(&deck);
        assert!(!text.contains('★'));
        assert_eq!(text.matches('?').count(), 4);
        assert!(text.contains("Moves: 0"));

        deck.flip(0);
        let text = render_deck(&deck);
        assert!(text.contains('★'));
        assert_eq!(text.matches('?').count(), 3);
    }
}

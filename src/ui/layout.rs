//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::canvas::Point;

/// The tracing canvas spans `0..CANVAS_SIZE` on both axes
pub const CANVAS_SIZE: f64 = 100.0;

const MARGIN: u16 = 1;
const OPTION_HEIGHT: u16 = 3;
const MENU_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayingAreas {
    pub header: Rect,
    pub title: Rect,
    pub stage: Rect,
    pub options: Rect,
    pub footer: Rect,
}

/// Splits the playing screen; `option_count` of zero leaves the stage the rest
pub fn playing_areas(area: Rect, option_count: usize) -> PlayingAreas {
    let option_rows = option_grid(option_count).1 as u16;
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(option_rows * OPTION_HEIGHT),
        Constraint::Length(1),
    ])
    .horizontal_margin(MARGIN)
    .split(area);

    PlayingAreas {
        header: chunks[0],
        title: chunks[1],
        stage: chunks[2],
        options: chunks[3],
        footer: chunks[4],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuAreas {
    pub title: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

pub fn menu_areas(area: Rect) -> MenuAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .margin(MARGIN)
    .split(area);

    MenuAreas {
        title: chunks[0],
        grid: chunks[1],
        footer: chunks[2],
    }
}

/// (columns, rows) for laying out answer buttons
fn option_grid(count: usize) -> (usize, usize) {
    match count {
        0 => (1, 0),
        1..=3 => (count, 1),
        n => (2, n.div_ceil(2)),
    }
}

pub fn option_rects(area: Rect, count: usize) -> Vec<Rect> {
    let (cols, rows) = option_grid(count);
    grid(area, cols, rows, OPTION_HEIGHT).into_iter().take(count).collect()
}

/// Columns for a deck of `card_count` cards
pub fn card_columns(card_count: usize) -> usize {
    match card_count {
        0..=16 => 4,
        _ => 6,
    }
}

pub fn card_rects(area: Rect, card_count: usize) -> Vec<Rect> {
    let cols = card_columns(card_count);
    let rows = card_count.div_ceil(cols).max(1);
    let height = (area.height / rows as u16).clamp(1, 5);
    grid(area, cols, rows, height).into_iter().take(card_count).collect()
}

pub fn menu_rects(area: Rect, count: usize) -> Vec<Rect> {
    let rows = count.div_ceil(MENU_COLUMNS).max(1);
    let height = (area.height / rows as u16).clamp(1, 5);
    grid(area, MENU_COLUMNS, rows, height).into_iter().take(count).collect()
}

/// Row-major cells of `cell_height`, splitting the width evenly
fn grid(area: Rect, cols: usize, rows: usize, cell_height: u16) -> Vec<Rect> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }
    let cell_width = area.width / cols as u16;
    let mut cells = Vec::with_capacity(cols * rows);
    for row in 0..rows as u16 {
        for col in 0..cols as u16 {
            let y = area.y + row * cell_height;
            if y >= area.bottom() {
                continue;
            }
            cells.push(Rect {
                x: area.x + col * cell_width,
                y,
                width: cell_width,
                height: cell_height.min(area.bottom() - y),
            });
        }
    }
    cells
}

/// The square-ish drawing surface centred in the stage.
///
/// Terminal cells are roughly twice as tall as wide, so the width is doubled.
pub fn canvas_rect(stage: Rect) -> Rect {
    let width = stage.height.saturating_mul(2).min(stage.width);
    let height = stage.height.min(width.div_ceil(2));
    Rect {
        x: stage.x + (stage.width - width) / 2,
        y: stage.y + (stage.height - height) / 2,
        width,
        height,
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Index of the rect under the pointer
pub fn hit(rects: &[Rect], column: u16, row: u16) -> Option<usize> {
    rects.iter().position(|r| contains(*r, column, row))
}

/// Maps a terminal cell to canvas coordinates, `None` outside `rect`.
///
/// The cell centre is used and rows are flipped so y grows upward.
pub fn cell_to_canvas_point(rect: Rect, column: u16, row: u16) -> Option<Point> {
    if !contains(rect, column, row) {
        return None;
    }
    let x = (column - rect.x) as f64 + 0.5;
    let y = (rect.bottom() - row) as f64 - 0.5;
    Some(Point::new(
        x * CANVAS_SIZE / rect.width as f64,
        y * CANVAS_SIZE / rect.height as f64,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_canvas_point_flips_rows() {
        let rect = Rect::new(10, 5, 20, 10);

        let top_left = cell_to_canvas_point(rect, 10, 5).unwrap();
        assert_eq!(top_left, Point::new(2.5, 95.0));

        let bottom_right = cell_to_canvas_point(rect, 29, 14).unwrap();
        assert_eq!(bottom_right, Point::new(97.5, 5.0));

        assert_eq!(cell_to_canvas_point(rect, 9, 5), None);
        assert_eq!(cell_to_canvas_point(rect, 30, 5), None);
        assert_eq!(cell_to_canvas_point(rect, 10, 15), None);
    }

    #[test]
    fn test_option_rects() {
        let area = Rect::new(0, 0, 40, 6);
        let rects = option_rects(area, 4);
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0], Rect::new(0, 0, 20, 3));
        assert_eq!(rects[3], Rect::new(20, 3, 20, 3));

        let rects = option_rects(Rect::new(0, 0, 30, 3), 3);
        assert_eq!(rects.iter().map(|r| r.x).collect::<Vec<_>>(), vec![0, 10, 20]);
    }

    #[test]
    fn test_playing_areas_reserve_option_rows() {
        let areas = playing_areas(Rect::new(0, 0, 80, 24), 4);
        assert_eq!(areas.options.height, 6);
        assert_eq!(areas.header.y, 0);
        assert_eq!(areas.footer.bottom(), 24);

        let areas = playing_areas(Rect::new(0, 0, 80, 24), 0);
        assert_eq!(areas.options.height, 0);
    }

    #[test]
    fn test_card_rects_cover_the_deck() {
        let area = Rect::new(0, 0, 80, 20);
        let rects = card_rects(area, 12);
        assert_eq!(rects.len(), 12);
        assert_eq!(hit(&rects, 0, 0), Some(0));
        assert_eq!(hit(&rects, 79, 14), Some(11));
        assert_eq!(card_columns(24), 6);
    }

    #[test]
    fn test_canvas_rect_fits_stage() {
        let stage = Rect::new(0, 4, 80, 14);
        let canvas = canvas_rect(stage);
        assert_eq!(canvas.width, 28);
        assert_eq!(canvas.height, 14);
        assert!(contains(stage, canvas.x, canvas.y));
    }

    #[test]
    fn test_hit_misses() {
        let rects = menu_rects(Rect::new(0, 0, 30, 15), 9);
        assert_eq!(rects.len(), 9);
        assert_eq!(hit(&rects, 15, 7), Some(4));
        assert_eq!(hit(&rects, 15, 20), None);
    }
}

use serde::{Deserialize, Serialize};

/// Canvas-local coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

pub type Stroke = Vec<Point>;

/// Records freehand pointer input as strokes, independent of how they are drawn.
///
/// Points are kept exactly as reported. A stroke is committed on `end_stroke`
/// only if it has at least two points, so a bare tap leaves no content behind.
#[derive(Debug, Clone, Default)]
pub struct StrokeCanvas {
    completed_strokes: Vec<Stroke>,
    active_stroke: Stroke,
    is_capturing: bool,
}

impl StrokeCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_stroke(&mut self, point: Point) {
        if self.is_capturing {
            return;
        }
        self.is_capturing = true;
        self.active_stroke.clear();
        self.active_stroke.push(point);
    }

    pub fn extend_stroke(&mut self, point: Point) {
        if !self.is_capturing {
            return;
        }
        self.active_stroke.push(point);
    }

    pub fn end_stroke(&mut self) {
        if !self.is_capturing {
            return;
        }
        if self.active_stroke.len() >= 2 {
            self.completed_strokes.push(self.active_stroke.clone());
        }
        self.active_stroke.clear();
        self.is_capturing = false;
    }

    pub fn clear(&mut self) {
        self.completed_strokes.clear();
        self.active_stroke.clear();
        self.is_capturing = false;
    }

    /// True once any stroke has been committed. This is the whole tracing check:
    /// it does not compare against the template glyph.
    pub fn has_content(&self) -> bool {
        !self.completed_strokes.is_empty()
    }

    pub fn completed_strokes(&self) -> &[Stroke] {
        &self.completed_strokes
    }

    pub fn active_stroke(&self) -> &[Point] {
        &self.active_stroke
    }

    pub fn is_capturing(&self) -> bool {
        self.is_capturing
    }

    /// Consecutive point pairs of every committed stroke followed by the active one
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.completed_strokes
            .iter()
            .map(|s| s.as_slice())
            .chain(std::iter::once(self.active_stroke.as_slice()))
            .flat_map(|stroke| stroke.windows(2).map(|w| (w[0], w[1])))
    }
}

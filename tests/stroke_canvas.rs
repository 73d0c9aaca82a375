use quizling::canvas::{Point, StrokeCanvas};

fn drag(canvas: &mut StrokeCanvas, points: &[(f64, f64)]) {
    let mut iter = points.iter().copied().map(Point::from);
    if let Some(first) = iter.next() {
        canvas.begin_stroke(first);
    }
    for p in iter {
        canvas.extend_stroke(p);
    }
    canvas.end_stroke();
}

#[test]
fn stroke_commits_only_with_two_points() {
    for k in 0..5usize {
        let mut canvas = StrokeCanvas::new();
        let points: Vec<(f64, f64)> = (0..k).map(|i| (i as f64, i as f64)).collect();
        drag(&mut canvas, &points);
        assert_eq!(canvas.has_content(), k >= 2, "k = {k}");
        assert!(!canvas.is_capturing());
        assert!(canvas.active_stroke().is_empty());
    }
}

#[test]
fn strokes_accumulate_in_order() {
    let mut canvas = StrokeCanvas::new();
    drag(&mut canvas, &[(0.0, 0.0), (1.0, 1.0)]);
    drag(&mut canvas, &[(5.0, 5.0)]);
    drag(&mut canvas, &[(2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);

    let strokes = canvas.completed_strokes();
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0], vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    assert_eq!(strokes[1].len(), 3);
    assert_eq!(canvas.segments().count(), 1 + 2);
}

#[test]
fn clear_drops_everything() {
    let mut canvas = StrokeCanvas::new();
    drag(&mut canvas, &[(0.0, 0.0), (1.0, 1.0)]);
    canvas.begin_stroke(Point::new(9.0, 9.0));
    canvas.extend_stroke(Point::new(8.0, 8.0));

    canvas.clear();

    assert!(!canvas.has_content());
    assert!(!canvas.is_capturing());
    assert!(canvas.completed_strokes().is_empty());
    assert!(canvas.active_stroke().is_empty());
}

#[test]
fn extend_and_end_without_begin_are_no_ops() {
    let mut canvas = StrokeCanvas::new();
    canvas.extend_stroke(Point::new(1.0, 1.0));
    canvas.end_stroke();

    assert!(!canvas.has_content());
    assert!(canvas.active_stroke().is_empty());
}

#[test]
fn active_stroke_is_visible_while_drawing() {
    let mut canvas = StrokeCanvas::new();
    canvas.begin_stroke(Point::new(0.0, 0.0));
    canvas.extend_stroke(Point::new(1.0, 0.0));

    assert!(canvas.is_capturing());
    assert_eq!(canvas.active_stroke().len(), 2);
    assert!(!canvas.has_content());
    assert_eq!(canvas.segments().count(), 1);
}

use super::*;
use canvas::consts::BACKGROUND_COLOR;

fn pixel(surface: &DrawingSurface, x: u32, y: u32) -> (u8, u8, u8) {
    let px = surface.layers().flatten().unwrap().pixel(x, y).unwrap().demultiply();
    (px.red(), px.green(), px.blue())
}

fn background() -> (u8, u8, u8) {
    (BACKGROUND_COLOR.r, BACKGROUND_COLOR.g, BACKGROUND_COLOR.b)
}

#[test]
fn parses_every_step_kind() {
    let steps = parse_script(
        r##"[{"tool": "rect"}, {"color": "#ff0000"}, {"brush_size": 3}, {"grid": true}, "clear", {"stroke": [[1, 2], [3.5, 4]]}]"##,
    )
    .unwrap();
    assert_eq!(
        steps,
        vec![
            Step::Tool(Tool::Rect),
            Step::Color("#ff0000".into()),
            Step::BrushSize(3.0),
            Step::Grid(true),
            Step::Clear,
            Step::Stroke(vec![[1.0, 2.0], [3.5, 4.0]]),
        ]
    );
}

#[test]
fn rejects_unknown_tool() {
    assert!(matches!(parse_script(r#"[{"tool": "spray"}]"#), Err(ScriptError::Parse(_))));
}

#[test]
fn rejects_non_array_document() {
    assert!(parse_script(r#"{"tool": "pen"}"#).is_err());
}

#[test]
fn pen_stroke_paints_along_path() {
    let mut surface = DrawingSurface::new(60, 60).unwrap();
    let steps = parse_script(r##"[{"color": "#0000ff"}, {"brush_size": 6}, {"stroke": [[5, 30], [30, 30], [55, 30]]}]"##)
        .unwrap();
    assert_eq!(apply(&mut surface, &steps).unwrap(), 1);

    let (r, g, b) = pixel(&surface, 30, 30);
    assert!(b > 200 && r < 60 && g < 60, "expected blue, got {:?}", (r, g, b));
    assert_eq!(pixel(&surface, 30, 5), background());
}

#[test]
fn rect_stroke_uses_press_and_release_only() {
    let mut surface = DrawingSurface::new(60, 60).unwrap();
    let steps = parse_script(r#"[{"tool": "rect"}, {"brush_size": 2}, {"stroke": [[10, 10], [30, 5], [50, 50]]}]"#)
        .unwrap();
    apply(&mut surface, &steps).unwrap();

    // Edge of the 10..50 square is painted, its interior is not.
    assert_ne!(pixel(&surface, 10, 30), background());
    assert_eq!(pixel(&surface, 30, 30), background());
    // Intermediate point is not part of the shape.
    assert_eq!(pixel(&surface, 30, 5), background());
}

#[test]
fn clear_wipes_earlier_strokes() {
    let mut surface = DrawingSurface::new(40, 40).unwrap();
    let steps = parse_script(r#"[{"brush_size": 8}, {"stroke": [[0, 20], [40, 20]]}, "clear"]"#).unwrap();
    apply(&mut surface, &steps).unwrap();
    assert_eq!(pixel(&surface, 20, 20), background());
}

#[test]
fn brush_size_is_clamped() {
    let mut surface = DrawingSurface::new(10, 10).unwrap();
    apply(&mut surface, &[Step::BrushSize(0.0)]).unwrap();
    assert!((surface.session.brush_size - 1.0).abs() < f32::EPSILON);
    apply(&mut surface, &[Step::BrushSize(500.0)]).unwrap();
    assert!((surface.session.brush_size - 100.0).abs() < f32::EPSILON);
}

#[test]
fn bad_color_reports_step_index() {
    let mut surface = DrawingSurface::new(10, 10).unwrap();
    let steps = vec![Step::Tool(Tool::Line), Step::Color("red".into())];
    let err = apply(&mut surface, &steps).unwrap_err();
    assert!(matches!(err, ScriptError::Canvas { index: 1, .. }));
    assert_eq!(surface.session.tool, Tool::Line);
}

#[test]
fn empty_stroke_is_rejected() {
    let mut surface = DrawingSurface::new(10, 10).unwrap();
    let err = apply(&mut surface, &[Step::Clear, Step::Stroke(Vec::new())]).unwrap_err();
    assert!(matches!(err, ScriptError::EmptyStroke(1)));
    assert!(!surface.input.is_dragging());
}

use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_pen() {
    assert_eq!(Tool::default(), Tool::Pen);
}

#[test]
fn tool_freehand_classification() {
    assert!(Tool::Pen.is_freehand());
    assert!(Tool::Eraser.is_freehand());
    assert!(!Tool::Line.is_freehand());
    assert!(!Tool::Rect.is_freehand());
    assert!(!Tool::Circle.is_freehand());
}

#[test]
fn tool_parses_from_its_name() {
    for tool in Tool::ALL {
        assert_eq!(tool.as_str().parse::<Tool>().unwrap(), tool);
        assert_eq!(tool.to_string(), tool.as_str());
    }
    assert_eq!(" RECT ".parse::<Tool>().unwrap(), Tool::Rect);
}

#[test]
fn tool_parse_rejects_unknown() {
    assert_eq!("spray".parse::<Tool>(), Err(UnknownTool("spray".into())));
}

#[test]
fn tool_serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Tool::Circle).unwrap(), "\"circle\"");
    assert_eq!(serde_json::from_str::<Tool>("\"eraser\"").unwrap(), Tool::Eraser);
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_defaults() {
    let session = SessionState::default();
    assert_eq!(session.tool, Tool::Pen);
    assert_eq!(session.color, Rgb::new(0, 0, 0));
    assert!((session.brush_size - DEFAULT_BRUSH_SIZE).abs() < f32::EPSILON);
    assert!(!session.grid);
}

#[test]
fn brush_size_is_clamped() {
    assert!((clamp_brush_size(0.0) - MIN_BRUSH_SIZE).abs() < f32::EPSILON);
    assert!((clamp_brush_size(1_000.0) - MAX_BRUSH_SIZE).abs() < f32::EPSILON);
    assert!((clamp_brush_size(12.5) - 12.5).abs() < f32::EPSILON);
    assert!((clamp_brush_size(f32::NAN) - DEFAULT_BRUSH_SIZE).abs() < f32::EPSILON);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(!InputState::default().is_dragging());
}

#[test]
fn dragging_is_dragging() {
    let state = InputState::Dragging { origin: Point::new(1.0, 2.0), last: Point::new(1.0, 2.0) };
    assert!(state.is_dragging());
}

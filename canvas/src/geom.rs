//! Points and the shapes produced by a completed gesture.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in surface pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A primitive stroked onto the drawing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Straight segment; pen and eraser strokes are chains of these.
    Segment { from: Point, to: Point },
    /// Unfilled axis-aligned rectangle with non-negative size.
    Rect { x: f32, y: f32, width: f32, height: f32 },
    /// Unfilled circle.
    Circle { center: Point, radius: f32 },
}

impl Shape {
    /// Rectangle with `a` and `b` as opposite corners, in any drag direction.
    #[must_use]
    pub fn rect_between(a: Point, b: Point) -> Self {
        Self::Rect {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// Circle centered on `center` passing through `edge`.
    #[must_use]
    pub fn circle_through(center: Point, edge: Point) -> Self {
        Self::Circle { center, radius: center.distance_to(edge) }
    }

    /// Outline path, or `None` when the shape is degenerate.
    #[must_use]
    pub fn to_path(&self) -> Option<tiny_skia::Path> {
        match *self {
            Self::Segment { from, to } => {
                let mut pb = tiny_skia::PathBuilder::new();
                pb.move_to(from.x, from.y);
                pb.line_to(to.x, to.y);
                pb.finish()
            }
            Self::Rect { x, y, width, height } => {
                tiny_skia::Rect::from_xywh(x, y, width, height).map(tiny_skia::PathBuilder::from_rect)
            }
            Self::Circle { center, radius } => tiny_skia::PathBuilder::from_circle(center.x, center.y, radius),
        }
    }
}

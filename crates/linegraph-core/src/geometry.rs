// File: crates/linegraph-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// Screen-space point, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Width/height pair, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle described by its top-left corner and size.
/// Used for the graph area every series is projected into.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
    pub const fn top_left(&self) -> Point { Point::new(self.x, self.y) }
    pub fn bottom_left(&self) -> Point { Point::new(self.x, self.y + self.height) }
    pub fn bottom_right(&self) -> Point { Point::new(self.x + self.width, self.y + self.height) }
    pub fn right(&self) -> f32 { self.x + self.width }
    pub fn bottom(&self) -> f32 { self.y + self.height }
    pub const fn size(&self) -> Size { Size::new(self.width, self.height) }
}

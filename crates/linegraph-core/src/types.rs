// File: crates/linegraph-core/src/types.rs
// Summary: Shared constants (surface sizes, default graph area, stroke widths).

use crate::geometry::{RectF, Size};

/// Default raster output width in pixels.
pub const WIDTH: i32 = 640;
/// Default raster output height in pixels.
pub const HEIGHT: i32 = 480;

/// Default size of a chart's background panel.
pub const DEFAULT_SURFACE_SIZE: Size = Size::new(400.0, 400.0);

/// Default graph area, in the surface's local pixel space.
pub const DEFAULT_GRAPH_AREA: RectF = RectF::new(100.0, 50.0, 250.0, 250.0);

/// Default stroke width of a plotted series.
pub const DEFAULT_LINE_THICKNESS: f32 = 3.0;

/// Default stroke width of both axis lines.
pub const DEFAULT_AXIS_THICKNESS: f32 = 3.0;

/// Horizontal gap between the Y axis and the right edge of its value labels.
pub const VALUE_LABEL_GAP: f32 = 10.0;

/// Z order of axis lines and labels; segments stay at 0 and draw underneath.
pub const CHROME_Z_ORDER: i32 = 1;

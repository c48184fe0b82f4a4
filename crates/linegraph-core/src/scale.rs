// File: crates/linegraph-core/src/scale.rs
// Summary: Data-to-pixel scales, the pure point mapper, and the axis-mapping strategy trait.

use std::fmt::Debug;

use crate::axis::{AxisRange, Bound};
use crate::error::Result;
use crate::geometry::{Point, RectF};

/// Horizontal linear scale mapping `[vmin, vmax]` onto `[left_px, left_px + width_px]`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub left_px: f32,
    pub width_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(left_px: f32, width_px: f32, range: &AxisRange) -> Self {
        Self { left_px, width_px, vmin: range.min(), vmax: range.max() }
    }
    #[inline]
    pub fn to_px(&self, x: f64) -> f32 {
        let span = self.vmax - self.vmin;
        debug_assert!(span > 0.0, "axis span must be positive, got {span}");
        (self.left_px as f64 + (x - self.vmin) * self.width_px as f64 / span) as f32
    }
}

/// Vertical value scale mapping `[vmin, vmax]` onto `[bottom_px, top_px]`.
/// Screen Y grows downward, so larger values land closer to `top_px`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, range: &AxisRange) -> Self {
        Self { top_px, bottom_px, vmin: range.min(), vmax: range.max() }
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = self.vmax - self.vmin;
        debug_assert!(span > 0.0, "axis span must be positive, got {span}");
        let height = (self.bottom_px - self.top_px) as f64;
        (self.bottom_px as f64 - (y - self.vmin) * height / span) as f32
    }
}

/// Horizontal scale over buffer positions: `left_px + index * step_px`.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f32,
    pub step_px: f64,
}

impl IndexScale {
    /// Spread indices `0..=max_index` over `width_px`. A zero `max_index`
    /// has no span, so every index collapses onto `left_px`.
    pub fn new(left_px: f32, width_px: f32, max_index: usize) -> Self {
        let step_px = if max_index == 0 { 0.0 } else { width_px as f64 / max_index as f64 };
        Self { left_px, step_px }
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        (self.left_px as f64 + self.step_px * index as f64) as f32
    }
}

/// Map one data point into `area`.
pub fn map_point(point: (f64, f64), x: &AxisRange, y: &AxisRange, area: RectF) -> Point {
    let sx = LinearScale::new(area.x, area.width, x);
    let sy = ValueScale::new(area.y, area.bottom(), y);
    Point::new(sx.to_px(point.0), sy.to_px(point.1))
}

/// Axis-mapping strategy a chart surface is parameterized by.
///
/// A strategy owns whatever X-axis state its variant needs; the Y range and
/// the graph area live on the surface and are passed in.
pub trait Mapping {
    /// One element of a series' data buffer.
    type Datum: Copy + Debug;

    /// Validate a buffer and put it into its stored order.
    fn prepare(data: Vec<Self::Datum>) -> Result<Vec<Self::Datum>>;

    /// Screen points for `data`, one per element, in polyline order.
    fn project(&self, data: &[Self::Datum], y: &AxisRange, area: RectF) -> Vec<Point>;

    /// Current X extent as `(min, max)`, for the value labels.
    fn x_extent(&self) -> (f64, f64);

    /// Set an X bound. `Ok(false)` means the value was already current.
    fn set_x_bound(&mut self, bound: Bound, value: f64) -> Result<bool>;

    /// A series of `len` points was attached or reassigned.
    /// Returns true when the shared X extent changed.
    fn grow_x(&mut self, _len: usize) -> bool {
        false
    }

    /// Recompute the shared X extent from the lengths of the series still
    /// attached. Returns true when it changed.
    fn refit_x(&mut self, _lens: &[usize]) -> bool {
        false
    }
}

// File: crates/linegraph-core/src/continuous.rs
// Summary: Continuous (X/Y) chart variant: numeric X axis, data kept sorted by X.

use std::cmp::Ordering;

use crate::axis::{Axis, AxisRange, Bound};
use crate::chart::ChartSurface;
use crate::error::{ChartError, Result};
use crate::geometry::{Point, RectF};
use crate::scale::{map_point, Mapping};

/// Both axes numeric; each series is a list of `(x, y)` pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContinuousMapping {
    x: AxisRange,
}

impl ContinuousMapping {
    pub fn x_range(&self) -> AxisRange {
        self.x
    }
}

impl Mapping for ContinuousMapping {
    type Datum = (f64, f64);

    /// Reject non-finite points, then stable-sort by X so consecutive
    /// entries always run left to right. Equal X keep their input order.
    fn prepare(mut data: Vec<(f64, f64)>) -> Result<Vec<(f64, f64)>> {
        if let Some((i, &(x, y))) = data.iter().enumerate().find(|(_, p)| !p.0.is_finite() || !p.1.is_finite()) {
            return Err(ChartError::InvalidArgument(format!("point {i} ({x}, {y}) is not finite")));
        }
        // Finite by now, so partial_cmp is total; -0.0 and 0.0 compare equal.
        data.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        Ok(data)
    }

    fn project(&self, data: &[(f64, f64)], y: &AxisRange, area: RectF) -> Vec<Point> {
        data.iter().map(|&p| map_point(p, &self.x, y, area)).collect()
    }

    fn x_extent(&self) -> (f64, f64) {
        (self.x.min(), self.x.max())
    }

    fn set_x_bound(&mut self, bound: Bound, value: f64) -> Result<bool> {
        self.x.set(Axis::X, bound, value)
    }
}

/// Line chart over two numeric axes.
pub type ContinuousChart = ChartSurface<ContinuousMapping>;

impl ChartSurface<ContinuousMapping> {
    pub fn x_range(&self) -> AxisRange {
        self.mapping().x_range()
    }

    pub fn set_min_x(&mut self, value: f64) -> Result<()> {
        self.set_axis_bound(Axis::X, Bound::Min, value)
    }

    pub fn set_max_x(&mut self, value: f64) -> Result<()> {
        self.set_axis_bound(Axis::X, Bound::Max, value)
    }
}

// File: crates/linegraph-core/src/indexed.rs
// Summary: Indexed chart variant: X is the buffer position, shared across series and auto-expanding.

use crate::axis::{AxisRange, Bound};
use crate::chart::ChartSurface;
use crate::error::{ChartError, Result};
use crate::geometry::{Point, RectF};
use crate::scale::{IndexScale, Mapping, ValueScale};

/// X runs over indices `0..=max_x`, where `max_x` is the largest `len - 1`
/// among attached series. It only grows while series are attached or
/// reassigned; removing a series recomputes it from the survivors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexedMapping {
    max_x: usize,
}

impl IndexedMapping {
    pub fn max_x(&self) -> usize {
        self.max_x
    }
}

impl Mapping for IndexedMapping {
    type Datum = f64;

    fn prepare(data: Vec<f64>) -> Result<Vec<f64>> {
        if let Some((i, v)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ChartError::InvalidArgument(format!("value {i} ({v}) is not finite")));
        }
        Ok(data)
    }

    fn project(&self, data: &[f64], y: &AxisRange, area: RectF) -> Vec<Point> {
        let sx = IndexScale::new(area.x, area.width, self.max_x);
        let sy = ValueScale::new(area.y, area.bottom(), y);
        data.iter()
            .enumerate()
            .map(|(i, &v)| Point::new(sx.to_px(i), sy.to_px(v)))
            .collect()
    }

    fn x_extent(&self) -> (f64, f64) {
        (0.0, self.max_x as f64)
    }

    fn set_x_bound(&mut self, bound: Bound, _value: f64) -> Result<bool> {
        Err(ChartError::InvalidArgument(format!(
            "X {bound} of an indexed chart follows its longest series and cannot be set"
        )))
    }

    fn grow_x(&mut self, len: usize) -> bool {
        match len.checked_sub(1) {
            Some(last) if last > self.max_x => {
                self.max_x = last;
                true
            }
            _ => false,
        }
    }

    fn refit_x(&mut self, lens: &[usize]) -> bool {
        let max = lens.iter().map(|l| l.saturating_sub(1)).max().unwrap_or(0);
        let changed = max != self.max_x;
        self.max_x = max;
        changed
    }
}

/// Line chart of value sequences plotted against their index.
pub type IndexedChart = ChartSurface<IndexedMapping>;

impl ChartSurface<IndexedMapping> {
    /// Shared X maximum (largest `len - 1` among attached series).
    pub fn max_x(&self) -> usize {
        self.mapping().max_x()
    }
}

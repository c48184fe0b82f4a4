// File: crates/linegraph-core/src/axis.rs
// Summary: Axis identifiers and the validated [min, max] range model.

use std::fmt;

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "X",
            Axis::Y => "Y",
        })
    }
}

/// Which end of an axis range a setter targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    Min,
    Max,
}

impl Bound {
    /// Relation the bound must keep with the opposite bound, for messages.
    pub fn relation(&self) -> &'static str {
        match self {
            Bound::Min => "below",
            Bound::Max => "above",
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Bound::Min => "min",
            Bound::Max => "max",
        })
    }
}

/// Numeric span of one axis.
/// Contract: `min < max` at all times; both ends are finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    /// The `[0, 1]` range every fresh value axis starts with.
    pub const fn unit() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    /// Build a range, rejecting `min >= max` and non-finite ends.
    pub fn new(axis: Axis, min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !(min < max) {
            return Err(ChartError::OutOfRange { axis, bound: Bound::Min, value: min, limit: max });
        }
        if !max.is_finite() {
            return Err(ChartError::OutOfRange { axis, bound: Bound::Max, value: max, limit: min });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> f64 { self.min }
    pub const fn max(&self) -> f64 { self.max }
    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn get(&self, bound: Bound) -> f64 {
        match bound {
            Bound::Min => self.min,
            Bound::Max => self.max,
        }
    }

    /// Set one end of the range.
    ///
    /// Returns `Ok(false)` when `value` equals the current bound (nothing
    /// changes), `Ok(true)` when the bound was stored. On error the range is
    /// untouched.
    pub fn set(&mut self, axis: Axis, bound: Bound, value: f64) -> Result<bool> {
        if self.get(bound) == value {
            return Ok(false);
        }
        // NaN fails both comparisons, so it is rejected like any other conflict.
        let ok = value.is_finite()
            && match bound {
                Bound::Min => value < self.max,
                Bound::Max => value > self.min,
            };
        if !ok {
            let limit = match bound {
                Bound::Min => self.max,
                Bound::Max => self.min,
            };
            return Err(ChartError::OutOfRange { axis, bound, value, limit });
        }
        match bound {
            Bound::Min => self.min = value,
            Bound::Max => self.max = value,
        }
        Ok(true)
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::unit()
    }
}

/// Text shown by a value label for a bound: the plain decimal rendering.
pub fn format_bound(value: f64) -> String {
    format!("{value}")
}

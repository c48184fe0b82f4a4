// File: crates/linegraph-core/src/series.rs
// Summary: Plotted series: data buffer, style, dirty flag, and the segment nodes it owns.
// Notes:
// - A series only ever touches its own segment nodes; the surface hands it the
//   scene and the parent node during a flush.
// - Rebuilds allocate a fresh id list and swap it in, so no id survives from
//   one reconciliation into the next.

use std::fmt;

use skia_safe as skia;

use crate::geometry::Point;
use crate::scene::{LineNode, NodeId, NodeKind, Scene};

/// Handle to a series attached to a chart surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(pub(crate) u64);

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pending-rebuild marker. Set by any geometry-affecting mutation,
/// cleared by the flush that performs the rebuild.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyFlag(bool);

impl DirtyFlag {
    pub fn mark(&mut self) {
        self.0 = true;
    }
    pub fn is_set(&self) -> bool {
        self.0
    }
    /// Clear the flag, returning whether it was set.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.0)
    }
}

/// Endpoint pairs for a polyline through `points`.
///
/// No points give no segments, one point gives a single zero-length segment,
/// otherwise segment `i` joins point `i` and point `i + 1`.
pub fn polyline_segments(points: &[Point]) -> Vec<(Point, Point)> {
    match points {
        [] => Vec::new(),
        [only] => vec![(*only, *only)],
        _ => points.windows(2).map(|w| (w[0], w[1])).collect(),
    }
}

/// One plotted dataset. `D` is a `(f64, f64)` pair on continuous charts and
/// an `f64` value on indexed charts.
#[derive(Debug)]
pub struct Line<D> {
    data: Vec<D>,
    color: skia::Color,
    thickness: f32,
    segments: Vec<NodeId>,
    dirty: DirtyFlag,
}

impl<D> Line<D> {
    /// New series; dirty so its first flush builds geometry.
    pub(crate) fn new(data: Vec<D>, color: skia::Color, thickness: f32) -> Self {
        let mut dirty = DirtyFlag::default();
        dirty.mark();
        Self { data, color, thickness, segments: Vec::new(), dirty }
    }

    pub fn data(&self) -> &[D] { &self.data }
    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
    pub fn color(&self) -> skia::Color { self.color }
    pub fn thickness(&self) -> f32 { self.thickness }
    pub fn is_dirty(&self) -> bool { self.dirty.is_set() }

    /// Segment nodes from the last rebuild, in polyline order.
    pub fn segments(&self) -> &[NodeId] { &self.segments }

    pub(crate) fn replace_data(&mut self, data: Vec<D>) {
        self.data = data;
        self.dirty.mark();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty.mark();
    }

    /// Recolor live segments in place; geometry is untouched.
    pub(crate) fn set_color(&mut self, scene: &mut Scene, color: skia::Color) {
        if self.color == color {
            return;
        }
        self.color = color;
        for &id in &self.segments {
            if let Some(seg) = scene.line_mut(id) {
                seg.color = color;
            }
        }
    }

    /// Restroke live segments in place; geometry is untouched.
    pub(crate) fn set_thickness(&mut self, scene: &mut Scene, thickness: f32) {
        if self.thickness == thickness {
            return;
        }
        self.thickness = thickness;
        for &id in &self.segments {
            if let Some(seg) = scene.line_mut(id) {
                seg.thickness = thickness;
            }
        }
    }

    /// Destroy every segment this series owns. Returns how many were removed.
    pub(crate) fn release(&mut self, scene: &mut Scene) -> usize {
        let old = std::mem::take(&mut self.segments);
        scene.remove_many(&old)
    }

    /// Rebuild if dirty. `project` turns the data buffer into screen points.
    /// Returns true when a rebuild ran.
    pub(crate) fn flush<F>(&mut self, scene: &mut Scene, parent: NodeId, project: F) -> bool
    where
        F: FnOnce(&[D]) -> Vec<Point>,
    {
        if !self.dirty.take() {
            return false;
        }
        let points = project(&self.data);
        self.rebuild(scene, parent, &points);
        true
    }

    fn rebuild(&mut self, scene: &mut Scene, parent: NodeId, points: &[Point]) {
        let released = self.release(scene);
        let fresh: Vec<NodeId> = polyline_segments(points)
            .into_iter()
            .map(|(a, b)| {
                let id = scene.insert(NodeKind::Line(LineNode::new(a, b, self.color, self.thickness)));
                scene.add_child(parent, id);
                id
            })
            .collect();
        tracing::trace!(released, allocated = fresh.len(), points = points.len(), "rebuilt series segments");
        self.segments = fresh;
    }
}

// File: crates/linegraph-core/src/chart.rs
// Summary: Chart surface: background, axes, labels, graph area and attached series, generic over the axis mapping.

use std::collections::BTreeMap;

use skia_safe as skia;

use crate::axis::{format_bound, Axis, AxisRange, Bound};
use crate::error::{ChartError, Result};
use crate::geometry::{Point, RectF, Size};
use crate::scale::Mapping;
use crate::scene::{LineNode, NodeId, NodeKind, RectangleNode, Scene, TextNode};
use crate::series::{Line, SeriesId};
use crate::text::{FontSpec, TextMetrics, TextShaper};
use crate::theme::ChartStyle;
use crate::types::{CHROME_Z_ORDER, DEFAULT_GRAPH_AREA, DEFAULT_SURFACE_SIZE, VALUE_LABEL_GAP};

/// Ids of the fixed nodes every surface owns.
#[derive(Clone, Copy, Debug)]
struct Chrome {
    back: NodeId,
    label_x: NodeId,
    label_y: NodeId,
    horizontal_line: NodeId,
    vertical_line: NodeId,
    text_min_x: NodeId,
    text_max_x: NodeId,
    text_min_y: NodeId,
    text_max_y: NodeId,
}

impl Chrome {
    fn value_label(&self, axis: Axis, bound: Bound) -> NodeId {
        match (axis, bound) {
            (Axis::X, Bound::Min) => self.text_min_x,
            (Axis::X, Bound::Max) => self.text_max_x,
            (Axis::Y, Bound::Min) => self.text_min_y,
            (Axis::Y, Bound::Max) => self.text_max_y,
        }
    }

    fn value_labels(&self) -> [NodeId; 4] {
        [self.text_min_x, self.text_max_x, self.text_min_y, self.text_max_y]
    }
}

/// A line chart drawn into a retained scene.
///
/// Setters validate and mark series dirty; geometry is only rebuilt by
/// [`ChartSurface::flush`], which the host calls once per tick.
pub struct ChartSurface<M: Mapping> {
    scene: Scene,
    metrics: Box<dyn TextMetrics>,
    chrome: Chrome,
    style: ChartStyle,
    position: Point,
    size: Size,
    graph_area: RectF,
    y_range: AxisRange,
    mapping: M,
    lines: BTreeMap<SeriesId, Line<M::Datum>>,
    next_series: u64,
}

fn set_text(scene: &mut Scene, metrics: &dyn TextMetrics, id: NodeId, text: String) {
    if let Some(t) = scene.text_mut(id) {
        t.text = text;
        t.adjust_size(metrics);
    }
}

impl<M: Mapping + Default> ChartSurface<M> {
    /// Surface measuring its labels with Skia's text layout.
    pub fn new(style: ChartStyle) -> Self {
        Self::with_metrics(style, Box::new(TextShaper::new()))
    }

    pub fn with_metrics(style: ChartStyle, metrics: Box<dyn TextMetrics>) -> Self {
        let mut scene = Scene::new();
        let back = scene.insert(NodeKind::Rectangle(RectangleNode {
            position: Point::default(),
            size: DEFAULT_SURFACE_SIZE,
            color: style.background,
        }));

        let chrome_node = |scene: &mut Scene, kind: NodeKind| {
            let id = scene.insert_with_z(kind, CHROME_Z_ORDER);
            scene.add_child(back, id);
            id
        };
        let title = |text: &str| TextNode::new(text, style.label_font.clone(), style.label);
        let value = || TextNode::new("", style.value_font.clone(), style.value);
        let axis = || LineNode::new(Point::default(), Point::default(), style.axis_line, style.axis_thickness);

        let label_x = chrome_node(&mut scene, NodeKind::Text(title("X").with_pivot(0.5, 0.0)));
        let label_y = chrome_node(&mut scene, NodeKind::Text(title("Y").with_pivot(0.5, 1.0).with_angle(-90.0)));
        let horizontal_line = chrome_node(&mut scene, NodeKind::Line(axis()));
        let vertical_line = chrome_node(&mut scene, NodeKind::Line(axis()));
        let text_max_x = chrome_node(&mut scene, NodeKind::Text(value().with_pivot(1.0, 0.0)));
        let text_max_y = chrome_node(&mut scene, NodeKind::Text(value().with_pivot(1.0, 0.0)));
        let text_min_x = chrome_node(&mut scene, NodeKind::Text(value()));
        let text_min_y = chrome_node(&mut scene, NodeKind::Text(value().with_pivot(1.0, 1.0)));

        let mut surface = Self {
            scene,
            metrics,
            chrome: Chrome {
                back,
                label_x,
                label_y,
                horizontal_line,
                vertical_line,
                text_min_x,
                text_max_x,
                text_min_y,
                text_max_y,
            },
            style,
            position: Point::default(),
            size: DEFAULT_SURFACE_SIZE,
            graph_area: DEFAULT_GRAPH_AREA,
            y_range: AxisRange::unit(),
            mapping: M::default(),
            lines: BTreeMap::new(),
            next_series: 0,
        };
        for id in [label_x, label_y] {
            if let Some(t) = surface.scene.text_mut(id) {
                t.adjust_size(surface.metrics.as_ref());
            }
        }
        for axis in [Axis::X, Axis::Y] {
            for bound in [Bound::Min, Bound::Max] {
                surface.sync_value_label(axis, bound);
            }
        }
        surface.layout_chrome();
        surface
    }
}

impl<M: Mapping> ChartSurface<M> {
    // ---- accessors ---------------------------------------------------------

    pub fn scene(&self) -> &Scene { &self.scene }
    /// Background node; parent of every chrome node and segment.
    pub fn background(&self) -> NodeId { self.chrome.back }
    pub fn graph_area(&self) -> RectF { self.graph_area }
    pub fn y_range(&self) -> AxisRange { self.y_range }
    pub fn mapping(&self) -> &M { &self.mapping }
    pub fn style(&self) -> &ChartStyle { &self.style }
    pub fn position(&self) -> Point { self.position }
    pub fn size(&self) -> Size { self.size }

    pub fn axis_color(&self) -> skia::Color { self.style.axis_line }
    pub fn axis_thickness(&self) -> f32 { self.style.axis_thickness }
    pub fn back_color(&self) -> skia::Color { self.style.background }
    pub fn label_color(&self) -> skia::Color { self.style.label }
    pub fn label_font(&self) -> &FontSpec { &self.style.label_font }
    pub fn value_color(&self) -> skia::Color { self.style.value }
    pub fn value_font(&self) -> &FontSpec { &self.style.value_font }

    pub fn label_x(&self) -> &str {
        self.scene.text(self.chrome.label_x).map(|t| t.text.as_str()).unwrap_or_default()
    }

    pub fn label_y(&self) -> &str {
        self.scene.text(self.chrome.label_y).map(|t| t.text.as_str()).unwrap_or_default()
    }

    /// Text node showing one bound's value.
    pub fn value_label(&self, axis: Axis, bound: Bound) -> Option<&TextNode> {
        self.scene.text(self.chrome.value_label(axis, bound))
    }

    /// Axis line node: the horizontal line for X, the vertical line for Y.
    pub fn axis_line(&self, axis: Axis) -> Option<&LineNode> {
        self.scene.line(match axis {
            Axis::X => self.chrome.horizontal_line,
            Axis::Y => self.chrome.vertical_line,
        })
    }

    /// Axis title node.
    pub fn title(&self, axis: Axis) -> Option<&TextNode> {
        self.scene.text(match axis {
            Axis::X => self.chrome.label_x,
            Axis::Y => self.chrome.label_y,
        })
    }

    pub fn series(&self, id: SeriesId) -> Option<&Line<M::Datum>> {
        self.lines.get(&id)
    }

    /// Attached series, in attachment order.
    pub fn series_ids(&self) -> Vec<SeriesId> {
        self.lines.keys().copied().collect()
    }

    pub fn series_count(&self) -> usize {
        self.lines.len()
    }

    pub fn contains_series(&self, id: SeriesId) -> bool {
        self.lines.contains_key(&id)
    }

    /// Whether `id` waits for a rebuild; `None` if it is not attached.
    pub fn is_dirty(&self, id: SeriesId) -> Option<bool> {
        self.lines.get(&id).map(Line::is_dirty)
    }

    // ---- bounds --------------------------------------------------------------

    /// Set one end of an axis range.
    ///
    /// Equal values are a no-op. On success the value label is rewritten and
    /// every series is marked dirty; on error nothing changes.
    pub fn set_axis_bound(&mut self, axis: Axis, bound: Bound, value: f64) -> Result<()> {
        let changed = match axis {
            Axis::Y => self.y_range.set(Axis::Y, bound, value),
            Axis::X => self.mapping.set_x_bound(bound, value),
        };
        match changed {
            Ok(false) => Ok(()),
            Ok(true) => {
                self.sync_value_label(axis, bound);
                self.mark_all_dirty();
                Ok(())
            }
            Err(e) => {
                tracing::debug!(%axis, %bound, value, error = %e, "rejected axis bound");
                Err(e)
            }
        }
    }

    pub fn set_min_y(&mut self, value: f64) -> Result<()> {
        self.set_axis_bound(Axis::Y, Bound::Min, value)
    }

    pub fn set_max_y(&mut self, value: f64) -> Result<()> {
        self.set_axis_bound(Axis::Y, Bound::Max, value)
    }

    /// Move the rectangle data is projected into. Re-places axes and labels
    /// and dirties every series, so batch changes rather than calling this per point.
    pub fn set_graph_area(&mut self, area: RectF) {
        if self.graph_area == area {
            return;
        }
        self.graph_area = area;
        self.layout_chrome();
        self.mark_all_dirty();
    }

    // ---- series --------------------------------------------------------------

    /// Attach a series drawn with the style's default color and thickness.
    pub fn add_series(&mut self, data: Vec<M::Datum>) -> Result<SeriesId> {
        let (color, thickness) = (self.style.line_stroke, self.style.line_thickness);
        self.add_series_with(data, color, thickness)
    }

    /// Attach a series. Empty data is valid and draws nothing.
    pub fn add_series_with(&mut self, data: Vec<M::Datum>, color: skia::Color, thickness: f32) -> Result<SeriesId> {
        let data = M::prepare(data)?;
        let len = data.len();
        let id = SeriesId(self.next_series);
        self.next_series += 1;
        self.lines.insert(id, Line::new(data, color, thickness));
        tracing::debug!(series = %id, points = len, "attached series");
        if self.mapping.grow_x(len) {
            self.x_extent_changed();
        }
        Ok(id)
    }

    /// Detach a series and destroy its segments.
    /// Returns false if `id` is not attached to this chart.
    pub fn remove_series(&mut self, id: SeriesId) -> bool {
        let Some(mut line) = self.lines.remove(&id) else {
            return false;
        };
        let released = line.release(&mut self.scene);
        tracing::debug!(series = %id, released, "detached series");
        let lens: Vec<usize> = self.lines.values().map(Line::len).collect();
        if self.mapping.refit_x(&lens) {
            self.x_extent_changed();
        }
        true
    }

    /// Replace a series' data; it is rebuilt on the next flush.
    pub fn set_series_data(&mut self, id: SeriesId, data: Vec<M::Datum>) -> Result<()> {
        if !self.lines.contains_key(&id) {
            return Err(ChartError::NotFound(id));
        }
        let data = M::prepare(data)?;
        let len = data.len();
        if let Some(line) = self.lines.get_mut(&id) {
            line.replace_data(data);
        }
        if self.mapping.grow_x(len) {
            self.x_extent_changed();
        }
        Ok(())
    }

    /// Recolor a series' live segments immediately; no rebuild.
    pub fn set_series_color(&mut self, id: SeriesId, color: skia::Color) -> Result<()> {
        let line = self.lines.get_mut(&id).ok_or(ChartError::NotFound(id))?;
        line.set_color(&mut self.scene, color);
        Ok(())
    }

    /// Restroke a series' live segments immediately; no rebuild.
    pub fn set_series_thickness(&mut self, id: SeriesId, thickness: f32) -> Result<()> {
        let line = self.lines.get_mut(&id).ok_or(ChartError::NotFound(id))?;
        line.set_thickness(&mut self.scene, thickness);
        Ok(())
    }

    // ---- update tick -----------------------------------------------------------

    /// Rebuild every dirty series. Returns how many were rebuilt.
    pub fn flush(&mut self) -> usize {
        let back = self.chrome.back;
        let (mapping, y, area) = (&self.mapping, self.y_range, self.graph_area);
        let mut rebuilt = 0;
        for line in self.lines.values_mut() {
            if line.flush(&mut self.scene, back, |data| mapping.project(data, &y, area)) {
                rebuilt += 1;
            }
        }
        if rebuilt > 0 {
            tracing::trace!(rebuilt, attached = self.lines.len(), nodes = self.scene.len(), "flushed chart");
        }
        rebuilt
    }

    fn mark_all_dirty(&mut self) {
        for line in self.lines.values_mut() {
            line.mark_dirty();
        }
    }

    fn x_extent_changed(&mut self) {
        let (min, max) = self.mapping.x_extent();
        tracing::debug!(min, max, "x extent changed");
        self.sync_value_label(Axis::X, Bound::Min);
        self.sync_value_label(Axis::X, Bound::Max);
        self.mark_all_dirty();
    }

    fn sync_value_label(&mut self, axis: Axis, bound: Bound) {
        let value = match (axis, bound) {
            (Axis::Y, b) => self.y_range.get(b),
            (Axis::X, Bound::Min) => self.mapping.x_extent().0,
            (Axis::X, Bound::Max) => self.mapping.x_extent().1,
        };
        let id = self.chrome.value_label(axis, bound);
        set_text(&mut self.scene, self.metrics.as_ref(), id, format_bound(value));
    }

    /// Place axis lines and labels around the graph area.
    fn layout_chrome(&mut self) {
        let a = self.graph_area;
        let t = self.style.axis_thickness;
        let c = self.chrome;
        let surface_h = self.size.height;
        let scene = &mut self.scene;

        if let Some(l) = scene.line_mut(c.vertical_line) {
            l.point1 = a.top_left();
            l.point2 = a.bottom_left();
        }
        if let Some(l) = scene.line_mut(c.horizontal_line) {
            l.point1 = a.bottom_left();
            l.point2 = a.bottom_right();
        }
        let places = [
            (c.label_x, Point::new(a.x + a.width / 2.0, (surface_h + a.bottom()) / 2.0)),
            (c.label_y, Point::new(a.x / 2.0, a.y + a.height / 2.0)),
            (c.text_min_x, Point::new(a.x, a.bottom() + t)),
            (c.text_max_x, Point::new(a.right(), a.bottom() + t)),
            (c.text_max_y, Point::new(a.x - t - VALUE_LABEL_GAP, a.y)),
            (c.text_min_y, Point::new(a.x - t - VALUE_LABEL_GAP, a.bottom())),
        ];
        for (id, at) in places {
            if let Some(text) = scene.text_mut(id) {
                text.position = at;
            }
        }
    }

    // ---- appearance ------------------------------------------------------------

    pub fn set_axis_color(&mut self, color: skia::Color) {
        self.style.axis_line = color;
        for id in [self.chrome.horizontal_line, self.chrome.vertical_line] {
            if let Some(l) = self.scene.line_mut(id) {
                l.color = color;
            }
        }
    }

    /// Restroke both axes; value labels keep their clearance from the axes.
    pub fn set_axis_thickness(&mut self, thickness: f32) {
        if self.style.axis_thickness == thickness {
            return;
        }
        self.style.axis_thickness = thickness;
        for id in [self.chrome.horizontal_line, self.chrome.vertical_line] {
            if let Some(l) = self.scene.line_mut(id) {
                l.thickness = thickness;
            }
        }
        self.layout_chrome();
    }

    pub fn set_back_color(&mut self, color: skia::Color) {
        self.style.background = color;
        if let Some(r) = self.scene.rectangle_mut(self.chrome.back) {
            r.color = color;
        }
    }

    /// Move the whole chart within its host.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        if let Some(r) = self.scene.rectangle_mut(self.chrome.back) {
            r.position = position;
        }
    }

    /// Resize the background panel; the X title stays centred below the graph area.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        if let Some(r) = self.scene.rectangle_mut(self.chrome.back) {
            r.size = size;
        }
        self.layout_chrome();
    }

    pub fn set_label_x(&mut self, text: impl Into<String>) {
        set_text(&mut self.scene, self.metrics.as_ref(), self.chrome.label_x, text.into());
    }

    pub fn set_label_y(&mut self, text: impl Into<String>) {
        set_text(&mut self.scene, self.metrics.as_ref(), self.chrome.label_y, text.into());
    }

    pub fn set_label_color(&mut self, color: skia::Color) {
        self.style.label = color;
        for id in [self.chrome.label_x, self.chrome.label_y] {
            if let Some(t) = self.scene.text_mut(id) {
                t.color = color;
            }
        }
    }

    pub fn set_label_font(&mut self, font: FontSpec) {
        if self.style.label_font == font {
            return;
        }
        for id in [self.chrome.label_x, self.chrome.label_y] {
            if let Some(t) = self.scene.text_mut(id) {
                t.font = font.clone();
                t.adjust_size(self.metrics.as_ref());
            }
        }
        self.style.label_font = font;
    }

    pub fn set_value_color(&mut self, color: skia::Color) {
        self.style.value = color;
        for id in self.chrome.value_labels() {
            if let Some(t) = self.scene.text_mut(id) {
                t.color = color;
            }
        }
    }

    pub fn set_value_font(&mut self, font: FontSpec) {
        if self.style.value_font == font {
            return;
        }
        for id in self.chrome.value_labels() {
            if let Some(t) = self.scene.text_mut(id) {
                t.font = font.clone();
                t.adjust_size(self.metrics.as_ref());
            }
        }
        self.style.value_font = font;
    }
}

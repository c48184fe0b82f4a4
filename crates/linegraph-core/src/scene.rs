// File: crates/linegraph-core/src/scene.rs
// Summary: Retained-mode node tree (rectangles, line segments, text) with id-based parent/child links.

use std::collections::{HashMap, HashSet};
use std::fmt;

use skia_safe as skia;

use crate::geometry::{Point, Size};
use crate::text::{FontSpec, TextMetrics};

/// Handle to a node in a [`Scene`]. Ids are never reused, so a handle to a
/// removed node stays invalid forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Filled rectangle. Its position is also the origin of its children.
#[derive(Clone, Debug, PartialEq)]
pub struct RectangleNode {
    pub position: Point,
    pub size: Size,
    pub color: skia::Color,
}

/// Straight stroke between two points; the segment primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct LineNode {
    pub point1: Point,
    pub point2: Point,
    pub color: skia::Color,
    pub thickness: f32,
}

impl LineNode {
    pub fn new(point1: Point, point2: Point, color: skia::Color, thickness: f32) -> Self {
        Self { point1, point2, color, thickness }
    }

    /// True when both endpoints coincide (a single-point series renders as a dot).
    pub fn is_degenerate(&self) -> bool {
        self.point1 == self.point2
    }
}

/// Single-line label.
///
/// `pivot` is the anchor inside the measured box, in fractions of its size:
/// `(0, 0)` puts the top-left corner on `position`, `(1, 1)` the bottom-right.
/// `angle` is in degrees, clockwise, applied around `position`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub color: skia::Color,
    pub font: FontSpec,
    pub position: Point,
    pub pivot: Point,
    pub angle: f32,
    size: Size,
}

impl TextNode {
    pub fn new(text: impl Into<String>, font: FontSpec, color: skia::Color) -> Self {
        Self {
            text: text.into(),
            color,
            font,
            position: Point::default(),
            pivot: Point::default(),
            angle: 0.0,
            size: Size::default(),
        }
    }

    pub fn with_pivot(mut self, x: f32, y: f32) -> Self {
        self.pivot = Point::new(x, y);
        self
    }

    pub fn with_angle(mut self, degrees: f32) -> Self {
        self.angle = degrees;
        self
    }

    /// Measured box from the last [`TextNode::adjust_size`].
    pub fn size(&self) -> Size {
        self.size
    }

    /// Re-measure after the text or font changed.
    pub fn adjust_size(&mut self, metrics: &dyn TextMetrics) {
        self.size = metrics.measure(&self.text, &self.font);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Rectangle(RectangleNode),
    Line(LineNode),
    Text(TextNode),
}

#[derive(Debug)]
struct Entry {
    kind: NodeKind,
    z_order: i32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Owner of every node. Parent/child links are ids, so detaching or
/// destroying a node never leaves a dangling reference behind.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: HashMap<NodeId, Entry>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached node.
    pub fn insert(&mut self, kind: NodeKind) -> NodeId {
        self.insert_with_z(kind, 0)
    }

    /// Create a detached node drawn after lower-`z_order` siblings.
    pub fn insert_with_z(&mut self, kind: NodeKind, z_order: i32) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Entry { kind, z_order, parent: None, children: Vec::new() });
        id
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach `child` under `parent`, detaching it from any previous parent.
    /// Returns false if either node is missing or the link would form a cycle.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || !self.contains(parent) || !self.contains(child) {
            return false;
        }
        if self.ancestors(parent).any(|a| a == child) {
            return false;
        }
        if let Some(old) = self.parent(child) {
            self.remove_child(old, child);
        }
        if let Some(e) = self.nodes.get_mut(&parent) {
            e.children.push(child);
        }
        if let Some(e) = self.nodes.get_mut(&child) {
            e.parent = Some(parent);
        }
        true
    }

    /// Detach `child` from `parent` without destroying it.
    /// Returns false if `child` was not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(p) = self.nodes.get_mut(&parent) else { return false };
        let Some(pos) = p.children.iter().position(|&c| c == child) else { return false };
        p.children.remove(pos);
        if let Some(c) = self.nodes.get_mut(&child) {
            c.parent = None;
        }
        true
    }

    /// Destroy a node and its whole subtree, unlinking it from its parent.
    /// Returns the node's own payload.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeKind> {
        if let Some(parent) = self.parent(id) {
            self.remove_child(parent, id);
        }
        let entry = self.nodes.remove(&id)?;
        let mut stack = entry.children;
        while let Some(next) = stack.pop() {
            if let Some(e) = self.nodes.remove(&next) {
                stack.extend(e.children);
            }
        }
        Some(entry.kind)
    }

    /// Destroy several nodes and their subtrees at once. Each affected parent's
    /// child list is filtered in a single pass. Missing ids are skipped.
    /// Returns how many of `ids` were live.
    pub fn remove_many(&mut self, ids: &[NodeId]) -> usize {
        let doomed: HashSet<NodeId> = ids.iter().copied().filter(|&id| self.contains(id)).collect();
        let parents: HashSet<NodeId> = doomed.iter().filter_map(|&id| self.parent(id)).collect();
        for parent in parents {
            if let Some(e) = self.nodes.get_mut(&parent) {
                e.children.retain(|c| !doomed.contains(c));
            }
        }
        let mut stack: Vec<NodeId> = doomed.iter().copied().collect();
        while let Some(next) = stack.pop() {
            if let Some(e) = self.nodes.remove(&next) {
                stack.extend(e.children);
            }
        }
        doomed.len()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|e| e.parent)
    }

    /// Children in insertion order; empty for a missing node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    pub fn z_order(&self, id: NodeId) -> i32 {
        self.nodes.get(&id).map(|e| e.z_order).unwrap_or(0)
    }

    /// Children sorted for drawing: ascending z order, insertion order within a z.
    pub fn draw_order(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = self.children(id).to_vec();
        out.sort_by_key(|&c| self.z_order(c));
        out
    }

    /// Every node below `id`, depth first, in draw order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.draw_order(id).into_iter().rev().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.draw_order(next).into_iter().rev());
        }
        out
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(&id).map(|e| &e.kind)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeKind> {
        self.nodes.get_mut(&id).map(|e| &mut e.kind)
    }

    pub fn line(&self, id: NodeId) -> Option<&LineNode> {
        match self.get(id)? {
            NodeKind::Line(l) => Some(l),
            _ => None,
        }
    }

    pub fn line_mut(&mut self, id: NodeId) -> Option<&mut LineNode> {
        match self.get_mut(id)? {
            NodeKind::Line(l) => Some(l),
            _ => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&TextNode> {
        match self.get(id)? {
            NodeKind::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn text_mut(&mut self, id: NodeId) -> Option<&mut TextNode> {
        match self.get_mut(id)? {
            NodeKind::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn rectangle(&self, id: NodeId) -> Option<&RectangleNode> {
        match self.get(id)? {
            NodeKind::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn rectangle_mut(&mut self, id: NodeId) -> Option<&mut RectangleNode> {
        match self.get_mut(id)? {
            NodeKind::Rectangle(r) => Some(r),
            _ => None,
        }
    }
}

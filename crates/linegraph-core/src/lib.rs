// File: crates/linegraph-core/src/lib.rs
// Summary: Core library entry point; exports chart surfaces, the scene graph and rendering.

pub mod axis;
pub mod chart;
pub mod continuous;
pub mod error;
pub mod geometry;
pub mod indexed;
pub mod render;
pub mod scale;
pub mod scene;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisRange, Bound};
pub use chart::ChartSurface;
pub use continuous::{ContinuousChart, ContinuousMapping};
pub use error::{ChartError, Result};
pub use geometry::{Point, RectF, Size};
pub use indexed::{IndexedChart, IndexedMapping};
pub use render::RenderOptions;
pub use scale::{map_point, Mapping};
pub use scene::{NodeId, Scene};
pub use series::{Line, SeriesId};
pub use text::{FontSpec, TextMetrics, TextShaper};
pub use theme::ChartStyle;
pub use skia_safe::Color;

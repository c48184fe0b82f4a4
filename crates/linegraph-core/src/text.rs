// File: crates/linegraph-core/src/text.rs
// Summary: Font descriptions, the text measuring seam, and a Skia textlayout shaper.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::geometry::{Point, Size};

const SANS_FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const MONO_FAMILIES: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

/// Font used by a text node. `family` overrides the built-in fallback list.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub mono_numeric: bool,
    pub family: Option<String>,
}

impl FontSpec {
    pub fn new(size: f32) -> Self {
        Self { size, mono_numeric: false, family: None }
    }

    /// Tabular-number font, for value labels.
    pub fn numeric(size: f32) -> Self {
        Self { size, mono_numeric: true, family: None }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(30.0)
    }
}

/// Measures the box a string occupies when drawn with a font.
pub trait TextMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        match (&font.family, font.mono_numeric) {
            (Some(family), _) => {
                ts.set_font_families(&[family.as_str()]);
            }
            (None, true) => {
                ts.set_font_families(MONO_FAMILIES);
            }
            (None, false) => {
                ts.set_font_families(SANS_FAMILIES);
            }
        }
        ts
    }

    pub fn layout(&self, text: &str, font: &FontSpec, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(font, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` with its top-left corner at `origin`.
    pub fn draw_at(&self, canvas: &skia::Canvas, text: &str, font: &FontSpec, color: skia::Color, origin: Point) {
        let mut p = self.layout(text, font, color);
        p.paint(canvas, (origin.x, origin.y));
    }
}

impl TextMetrics for TextShaper {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let p = self.layout(text, font, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        Size::new(p.longest_line(), p.height())
    }
}

// File: crates/linegraph-core/src/theme.rs
// Summary: Chart styles (colors, stroke widths, fonts) injected into surfaces at construction.

use skia_safe as skia;

use crate::text::FontSpec;
use crate::types::{DEFAULT_AXIS_THICKNESS, DEFAULT_LINE_THICKNESS};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_thickness: f32,
    /// Axis title color.
    pub label: skia::Color,
    pub label_font: FontSpec,
    /// Min/max value label color.
    pub value: skia::Color,
    pub value_font: FontSpec,
    /// Color given to series added without an explicit one.
    pub line_stroke: skia::Color,
    pub line_thickness: f32,
}

impl ChartStyle {
    fn with_colors(
        name: &'static str,
        background: skia::Color,
        axis_line: skia::Color,
        label: skia::Color,
        value: skia::Color,
        line_stroke: skia::Color,
    ) -> Self {
        Self {
            name,
            background,
            axis_line,
            axis_thickness: DEFAULT_AXIS_THICKNESS,
            label,
            label_font: FontSpec::default(),
            value,
            value_font: FontSpec::numeric(30.0),
            line_stroke,
            line_thickness: DEFAULT_LINE_THICKNESS,
        }
    }

    /// Black panel, white axes, labels and lines.
    pub fn classic() -> Self {
        let white = skia::Color::from_argb(255, 255, 255, 255);
        Self::with_colors("classic", skia::Color::from_argb(255, 0, 0, 0), white, white, white, white)
    }

    pub fn dark() -> Self {
        Self::with_colors(
            "dark",
            skia::Color::from_argb(255, 18, 18, 20),
            skia::Color::from_argb(255, 180, 180, 190),
            skia::Color::from_argb(255, 235, 235, 245),
            skia::Color::from_argb(255, 150, 150, 160),
            skia::Color::from_argb(255, 64, 160, 255),
        )
    }

    pub fn light() -> Self {
        Self::with_colors(
            "light",
            skia::Color::from_argb(255, 250, 250, 252),
            skia::Color::from_argb(255, 60, 60, 70),
            skia::Color::from_argb(255, 20, 20, 30),
            skia::Color::from_argb(255, 100, 100, 110),
            skia::Color::from_argb(255, 32, 120, 200),
        )
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self::with_colors(
            "solarized-dark",
            skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            skia::Color::from_argb(255, 0x93, 0xa1, 0xa1), // base1
            skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            skia::Color::from_argb(255, 0x83, 0x94, 0x96), // base0
            skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
        )
    }

    pub fn solarized_light() -> Self {
        Self::with_colors(
            "solarized-light",
            skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            skia::Color::from_argb(255, 0x65, 0x7b, 0x83), // base00
            skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            skia::Color::from_argb(255, 0x58, 0x6e, 0x75), // base01
            skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),
        )
    }

    pub fn high_contrast_dark() -> Self {
        Self::with_colors(
            "high-contrast-dark",
            skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            skia::Color::from_argb(255, 0x00, 0xff, 0xff),
        )
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in style presets.
pub fn presets() -> Vec<ChartStyle> {
    vec![
        ChartStyle::classic(),
        ChartStyle::dark(),
        ChartStyle::light(),
        ChartStyle::solarized_dark(),
        ChartStyle::solarized_light(),
        ChartStyle::high_contrast_dark(),
    ]
}

/// Find a style by its `name`, falling back to classic.
pub fn find(name: &str) -> ChartStyle {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

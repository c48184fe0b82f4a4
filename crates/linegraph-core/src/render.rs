// File: crates/linegraph-core/src/render.rs
// Summary: Headless rendering of a scene through Skia CPU raster surfaces (RGBA buffers and PNG).

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::chart::ChartSurface;
use crate::geometry::Point;
use crate::scale::Mapping;
use crate::scene::{NodeId, NodeKind, Scene};
use crate::text::TextShaper;
use crate::types::{HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Clear color behind the scene.
    pub background: skia::Color,
    /// Text output depends on installed fonts; tests turn it off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: skia::Color::from_argb(255, 18, 18, 20), // near-black
            draw_labels: true,
        }
    }
}

/// Rasterize the subtree at `root`. Returns `(pixels, width, height, stride)`
/// with unpremultiplied RGBA8 pixels.
pub fn render_scene_to_rgba8(scene: &Scene, root: NodeId, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
    {
        let canvas = surface.canvas();
        canvas.clear(opts.background);
        let shaper = opts.draw_labels.then(TextShaper::new);
        draw_node(canvas, scene, root, shaper.as_ref());
    }

    let (w, h) = (opts.width as u32, opts.height as u32);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("reading back raster pixels failed");
    }
    Ok((pixels, w, h, stride))
}

/// Encode an RGBA8 buffer as PNG.
pub fn encode_png(rgba: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {width}x{height}"))?;
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode PNG failed")?;
    Ok(bytes)
}

pub fn render_scene_to_png_bytes(scene: &Scene, root: NodeId, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (px, w, h, _) = render_scene_to_rgba8(scene, root, opts)?;
    encode_png(px, w, h)
}

pub fn render_scene_to_png(
    scene: &Scene,
    root: NodeId,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let data = render_scene_to_png_bytes(scene, root, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, data).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

impl<M: Mapping> ChartSurface<M> {
    /// Flush pending rebuilds, then rasterize the chart.
    pub fn render_to_rgba8(&mut self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.flush();
        render_scene_to_rgba8(self.scene(), self.background(), opts)
    }

    /// Flush pending rebuilds, then encode the chart as PNG bytes.
    pub fn render_to_png_bytes(&mut self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.flush();
        render_scene_to_png_bytes(self.scene(), self.background(), opts)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&mut self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        self.flush();
        render_scene_to_png(self.scene(), self.background(), opts, output_png_path)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_node(canvas: &skia::Canvas, scene: &Scene, id: NodeId, shaper: Option<&TextShaper>) {
    let Some(kind) = scene.get(id) else { return };
    let mut origin = Point::default();
    match kind {
        NodeKind::Rectangle(r) => {
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(r.color);
            canvas.draw_rect(skia::Rect::from_xywh(r.position.x, r.position.y, r.size.width, r.size.height), &fill);
            origin = r.position;
        }
        NodeKind::Line(l) => {
            // Round caps make a zero-length segment show up as a dot.
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_cap(skia::paint::Cap::Round);
            stroke.set_stroke_width(l.thickness);
            stroke.set_color(l.color);
            canvas.draw_line((l.point1.x, l.point1.y), (l.point2.x, l.point2.y), &stroke);
        }
        NodeKind::Text(t) => {
            if let Some(shaper) = shaper {
                let size = t.size();
                canvas.save();
                canvas.translate((t.position.x, t.position.y));
                canvas.rotate(t.angle, None);
                let top_left = Point::new(-t.pivot.x * size.width, -t.pivot.y * size.height);
                shaper.draw_at(canvas, &t.text, &t.font, t.color, top_left);
                canvas.restore();
            }
        }
    }

    let children = scene.draw_order(id);
    if children.is_empty() {
        return;
    }
    canvas.save();
    canvas.translate((origin.x, origin.y));
    for child in children {
        draw_node(canvas, scene, child, shaper);
    }
    canvas.restore();
}

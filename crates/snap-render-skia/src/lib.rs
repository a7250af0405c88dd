// File: crates/snap-render-skia/src/lib.rs
// Summary: Top-down grid scene rendering to PNG/RGBA using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use snap_core::{visible_grid, GridConfig, Point3, Ring, Segment};

pub mod theme;
pub use theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 800;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// World-to-screen scale; the default fits the default draw extent.
    pub pixels_per_unit: f32,
    pub theme: Theme,
    /// Accent the x = 0 and z = 0 axis lines.
    pub draw_axes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            pixels_per_unit: 24.0,
            theme: Theme::dark(),
            draw_axes: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerRole {
    /// A position as the host supplied it.
    Source,
    /// The same position after snapping.
    Snapped,
}

#[derive(Clone, Copy, Debug)]
pub struct Marker {
    pub at: Point3,
    pub role: MarkerRole,
}

/// A renderable view: one grid plus any point markers, seen from straight
/// above the X-Z plane (screen right = +X, screen up = +Z; Y is ignored).
pub struct Scene {
    pub config: GridConfig,
    pub extent: f64,
    pub markers: Vec<Marker>,
}

impl Scene {
    pub fn new(config: GridConfig, extent: f64) -> Self {
        Self { config, extent, markers: Vec::new() }
    }

    pub fn add_marker(&mut self, at: Point3, role: MarkerRole) {
        self.markers.push(Marker { at, role });
    }

    /// Add a source and snapped marker per (original, snapped) pair, as
    /// produced by `SnapTool::snap_selection`.
    pub fn add_snap_pairs(&mut self, pairs: &[(Point3, Point3)]) {
        for &(original, snapped) in pairs {
            self.add_marker(original, MarkerRole::Source);
            self.add_marker(snapped, MarkerRole::Snapped);
        }
    }

    /// Render the scene to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and return the raw RGBA8 buffer as (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = info.min_row_bytes();
        let mut pixels = vec![0u8; info.compute_byte_size(stride)];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn raster_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(opts.theme.background);

        let geometry = visible_grid(&self.config, self.extent);
        let view = View::new(opts);

        draw_segments(canvas, &view, &geometry.segments, opts.theme.grid, 1.0);
        draw_rings(canvas, &view, &geometry.rings, opts.theme.grid);
        if opts.draw_axes {
            draw_axes(canvas, &view, self.extent, opts.theme.axis);
        }
        draw_markers(canvas, &view, &self.markers, &opts.theme);

        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

/// Screen mapping for the top-down view; +Z points up the screen.
struct View {
    cx: f32,
    cy: f32,
    scale: f32,
}

impl View {
    fn new(opts: &RenderOptions) -> Self {
        Self {
            cx: opts.width as f32 * 0.5,
            cy: opts.height as f32 * 0.5,
            scale: opts.pixels_per_unit.max(0.01),
        }
    }

    fn to_screen(&self, p: &Point3) -> (f32, f32) {
        (self.cx + p.x as f32 * self.scale, self.cy - p.z as f32 * self.scale)
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_segments(
    canvas: &skia::Canvas,
    view: &View,
    segments: &[Segment],
    color: skia::Color,
    width: f32,
) {
    let paint = stroke_paint(color, width);
    for s in segments {
        canvas.draw_line(view.to_screen(&s.a), view.to_screen(&s.b), &paint);
    }
}

fn draw_rings(canvas: &skia::Canvas, view: &View, rings: &[Ring], color: skia::Color) {
    let paint = stroke_paint(color, 1.0);
    for r in rings {
        canvas.draw_circle(view.to_screen(&r.center), r.radius as f32 * view.scale, &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, view: &View, extent: f64, color: skia::Color) {
    let paint = stroke_paint(color, 1.5);
    let reach = extent.max(0.0);
    canvas.draw_line(
        view.to_screen(&Point3::new(-reach, 0.0, 0.0)),
        view.to_screen(&Point3::new(reach, 0.0, 0.0)),
        &paint,
    );
    canvas.draw_line(
        view.to_screen(&Point3::new(0.0, 0.0, -reach)),
        view.to_screen(&Point3::new(0.0, 0.0, reach)),
        &paint,
    );
}

fn draw_markers(canvas: &skia::Canvas, view: &View, markers: &[Marker], theme: &Theme) {
    let source = stroke_paint(theme.marker_source, 1.5);

    let mut snapped = skia::Paint::default();
    snapped.set_color(theme.marker_snapped);
    snapped.set_anti_alias(true);
    snapped.set_style(skia::paint::Style::Fill);

    for m in markers {
        let at = view.to_screen(&m.at);
        match m.role {
            MarkerRole::Source => {
                canvas.draw_circle(at, 4.0, &source);
            }
            MarkerRole::Snapped => {
                canvas.draw_circle(at, 3.0, &snapped);
            }
        }
    }
}

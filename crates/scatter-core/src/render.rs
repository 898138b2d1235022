// File: crates/scatter-core/src/render.rs
// Summary: Side-effecting apply step: draw a Scene onto a Skia CPU raster surface.

use std::path::Path;

use skia_safe as skia;

use crate::error::ChartError;
use crate::layout::{self, CIRCLE_RADIUS};
use crate::scene::{Scene, TooltipBox};
use crate::text::TextShaper;
use crate::theme::Theme;

const TICK_LEN: f32 = 6.0;
const TICK_LABEL_SIZE: f32 = 11.0;
const CAPTION_SIZE: f32 = 14.0;
const GLYPH_SIZE: f32 = 10.0;
const TOOLTIP_TEXT_SIZE: f32 = 12.0;
const TOOLTIP_PAD: f32 = 8.0;
const TOOLTIP_LINE_H: f32 = 16.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    /// Text drawing can be disabled for platform-independent pixel snapshots.
    pub draw_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: layout::WIDTH,
            height: layout::HEIGHT,
            theme: Theme::dark(),
            draw_text: true,
        }
    }
}

/// Render the scene and return raw RGBA8 pixels (row-major, width*height*4).
pub fn render_to_rgba8(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
    let mut surface = raster_surface(opts)?;
    draw_scene(surface.canvas(), scene, opts);

    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let row_bytes = opts.width as usize * 4;
    let mut pixels = vec![0u8; row_bytes * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(ChartError::Render("surface read_pixels failed".into()));
    }
    Ok(pixels)
}

/// Render the scene and return encoded PNG bytes.
pub fn render_to_png_bytes(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
    let mut surface = raster_surface(opts)?;
    draw_scene(surface.canvas(), scene, opts);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| ChartError::Render("PNG encode failed".into()))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the scene to a PNG file, creating parent directories as needed.
pub fn render_to_png(
    scene: &Scene,
    opts: &RenderOptions,
    output_png_path: impl AsRef<Path>,
) -> Result<(), ChartError> {
    let bytes = render_to_png_bytes(scene, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

fn raster_surface(opts: &RenderOptions) -> Result<skia::Surface, ChartError> {
    skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
        .ok_or_else(|| ChartError::Render("failed to create raster surface".into()))
}

fn draw_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
    let theme = &opts.theme;
    canvas.clear(theme.background);

    let shaper = opts.draw_text.then(TextShaper::new);

    draw_frame(canvas, scene, theme);
    draw_ticks(canvas, scene, theme, shaper.as_ref());
    draw_captions(canvas, scene, theme, shaper.as_ref());
    draw_marks(canvas, scene, theme, shaper.as_ref());
    if let (Some(tip), Some(shaper)) = (&scene.tooltip, shaper.as_ref()) {
        draw_tooltip(canvas, tip, opts, shaper);
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

/// Bottom and left axis lines around the plot rect.
fn draw_frame(canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
    let paint = stroke_paint(theme.frame, 1.5);
    let plot = scene.plot;
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

fn draw_ticks(canvas: &skia::Canvas, scene: &Scene, theme: &Theme, shaper: Option<&TextShaper>) {
    let paint = stroke_paint(theme.tick, 1.0);
    let plot = scene.plot;
    let b = plot.bottom as f32;
    let l = plot.left as f32;

    for tick in &scene.x_ticks {
        canvas.draw_line((tick.px, b), (tick.px, b + TICK_LEN), &paint);
        if let Some(shaper) = shaper {
            shaper.draw_centered(canvas, &tick.label, tick.px, b + TICK_LEN + 14.0, TICK_LABEL_SIZE, theme.tick_label, false);
        }
    }
    for tick in &scene.y_ticks {
        canvas.draw_line((l - TICK_LEN, tick.px), (l, tick.px), &paint);
        if let Some(shaper) = shaper {
            let w = shaper.measure_width(&tick.label, TICK_LABEL_SIZE, false);
            shaper.draw_left(canvas, &tick.label, l - TICK_LEN - 4.0 - w, tick.px + 4.0, TICK_LABEL_SIZE, theme.tick_label, false);
        }
    }
}

fn draw_captions(canvas: &skia::Canvas, scene: &Scene, theme: &Theme, shaper: Option<&TextShaper>) {
    let Some(shaper) = shaper else { return };
    for caption in &scene.captions {
        let color = if caption.active { theme.caption_active } else { theme.caption_inactive };
        if caption.rotated {
            canvas.save();
            canvas.translate((caption.x, caption.y));
            canvas.rotate(-90.0, None);
            shaper.draw_centered(canvas, caption.text, 0.0, 0.0, CAPTION_SIZE, color, caption.active);
            canvas.restore();
        } else {
            shaper.draw_centered(canvas, caption.text, caption.x, caption.y, CAPTION_SIZE, color, caption.active);
        }
    }
}

fn draw_marks(canvas: &skia::Canvas, scene: &Scene, theme: &Theme, shaper: Option<&TextShaper>) {
    let stroke = stroke_paint(theme.circle_stroke, 1.0);
    for mark in &scene.marks {
        let fill_color = if mark.hovered { theme.circle_hover } else { theme.circle_fill };
        let fill = fill_paint(fill_color);
        canvas.draw_circle((mark.x, mark.y), CIRCLE_RADIUS, &fill);
        canvas.draw_circle((mark.x, mark.y), CIRCLE_RADIUS, &stroke);
        if let Some(shaper) = shaper {
            // Glyph sits on the circle center, nudged down to optical middle.
            shaper.draw_centered(canvas, &mark.abbr, mark.x, mark.y + GLYPH_SIZE * 0.35, GLYPH_SIZE, theme.glyph, true);
        }
    }
}

fn draw_tooltip(canvas: &skia::Canvas, tip: &TooltipBox, opts: &RenderOptions, shaper: &TextShaper) {
    let theme = &opts.theme;
    let lines = [tip.title.as_str(), tip.x_line.as_str(), tip.y_line.as_str()];
    let text_w = lines
        .iter()
        .map(|l| shaper.measure_width(l, TOOLTIP_TEXT_SIZE, false))
        .fold(0.0f32, f32::max);
    let box_w = text_w + TOOLTIP_PAD * 2.0;
    let box_h = TOOLTIP_LINE_H * lines.len() as f32 + TOOLTIP_PAD * 2.0;

    // Anchor above the circle; clamp so the box stays on the canvas.
    let mut left = tip.anchor_x - box_w * 0.5;
    let mut top = tip.anchor_y - box_h;
    left = left.clamp(0.0, (opts.width as f32 - box_w).max(0.0));
    top = top.clamp(0.0, (opts.height as f32 - box_h).max(0.0));

    let rect = skia::Rect::from_xywh(left, top, box_w, box_h);
    canvas.draw_rect(rect, &fill_paint(theme.tooltip_bg));
    canvas.draw_rect(rect, &stroke_paint(theme.tooltip_border, 1.0));

    for (i, line) in lines.iter().enumerate() {
        let y = top + TOOLTIP_PAD + TOOLTIP_LINE_H * (i as f32 + 0.75);
        shaper.draw_left(canvas, line, left + TOOLTIP_PAD, y, TOOLTIP_TEXT_SIZE, theme.tooltip_text, i == 0);
    }
}

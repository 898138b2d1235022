// File: crates/scatter-core/src/layout.rs
// Summary: Canvas constants, margins, plot rect, and axis-caption hit areas.

use crate::dimension::{DimensionChoice, XDimension, YDimension};
use crate::geometry::{RectF32, RectI32};

/// Default canvas width in pixels.
pub const WIDTH: i32 = 900;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 600;

/// Marker radius for record circles.
pub const CIRCLE_RADIUS: f32 = 10.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // Wide bottom/left bands hold the three stacked captions per axis.
        Self::new(110, 40, 40, 90)
    }
}

/// Vertical spacing between stacked x-axis captions.
const X_CAPTION_STEP: f32 = 20.0;
/// First x caption sits this far below the plot bottom edge.
const X_CAPTION_OFFSET: f32 = 35.0;
/// Horizontal spacing between the rotated y-axis caption columns.
const Y_CAPTION_STEP: f32 = 25.0;
/// Innermost y caption column, measured left from the plot's left edge.
const Y_CAPTION_OFFSET: f32 = 35.0;
/// Caption hit areas: long edge along the text, short edge across it.
// Short edge stays under the 20 px caption stacking step so adjacent hit
// areas never overlap.
const CAPTION_HIT_LONG: f32 = 230.0;
const CAPTION_HIT_SHORT: f32 = 18.0;

/// Fixed canvas geometry for one chart instance.
///
/// A viewport resize does not adjust a layout; the whole chart is rebuilt
/// around a fresh one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl Layout {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, insets: Insets::default() }
    }

    /// Inner plot rect after subtracting margins.
    pub fn plot(&self) -> RectI32 {
        RectI32::from_ltrb(
            self.insets.left as i32,
            self.insets.top as i32,
            self.width - self.insets.right as i32,
            self.height - self.insets.bottom as i32,
        )
    }

    /// Center position of the x-axis caption in stack slot `slot` (0..3).
    pub fn x_caption_pos(&self, slot: usize) -> (f32, f32) {
        let plot = self.plot();
        (
            plot.center_x(),
            plot.bottom as f32 + X_CAPTION_OFFSET + X_CAPTION_STEP * slot as f32,
        )
    }

    /// Center position of the rotated y-axis caption in column `slot` (0..3).
    /// Slot 0 is the innermost column.
    pub fn y_caption_pos(&self, slot: usize) -> (f32, f32) {
        let plot = self.plot();
        (
            plot.left as f32 - Y_CAPTION_OFFSET - Y_CAPTION_STEP * slot as f32,
            plot.center_y(),
        )
    }

    fn x_caption_rect(&self, slot: usize) -> RectF32 {
        let (cx, cy) = self.x_caption_pos(slot);
        RectF32::centered(cx, cy, CAPTION_HIT_LONG, CAPTION_HIT_SHORT)
    }

    fn y_caption_rect(&self, slot: usize) -> RectF32 {
        let (cx, cy) = self.y_caption_pos(slot);
        // Rotated caption: long edge runs vertically.
        RectF32::centered(cx, cy, CAPTION_HIT_SHORT, CAPTION_HIT_LONG)
    }

    /// Resolve a pointer position to the axis caption under it, if any.
    /// Caption order is fixed: x = poverty/age/income, y = obesity/smokes/healthcare.
    pub fn caption_at(&self, x: f32, y: f32) -> Option<DimensionChoice> {
        for (slot, dim) in XDimension::ALL.into_iter().enumerate() {
            if self.x_caption_rect(slot).contains(x, y) {
                return Some(DimensionChoice::X(dim));
            }
        }
        for (slot, dim) in YDimension::ALL.into_iter().enumerate() {
            if self.y_caption_rect(slot).contains(x, y) {
                return Some(DimensionChoice::Y(dim));
            }
        }
        None
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

// File: crates/scatter-core/src/scene.rs
// Summary: Renderer-agnostic description of one chart frame.

use crate::geometry::RectI32;

/// One axis tick: domain value projected to a pixel offset, with its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub px: f32,
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisGroup {
    X,
    Y,
}

/// One clickable axis caption. Exactly one caption per group is active.
#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    pub group: AxisGroup,
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    pub rotated: bool,
    pub active: bool,
}

/// One record's circle plus its abbreviation glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    pub x: f32,
    pub y: f32,
    pub abbr: String,
    pub hovered: bool,
}

/// Floating tooltip block anchored near the hovered circle.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipBox {
    pub anchor_x: f32,
    pub anchor_y: f32,
    pub title: String,
    pub x_line: String,
    pub y_line: String,
}

/// Everything the apply step needs to draw one frame. Pure data; computing a
/// scene touches no rendering environment.
#[derive(Clone, Debug)]
pub struct Scene {
    pub plot: RectI32,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub captions: Vec<Caption>,
    pub marks: Vec<Mark>,
    pub tooltip: Option<TooltipBox>,
}

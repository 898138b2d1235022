// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub frame: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub caption_active: skia::Color,
    pub caption_inactive: skia::Color,
    pub circle_fill: skia::Color,
    pub circle_stroke: skia::Color,
    pub circle_hover: skia::Color,
    pub glyph: skia::Color,
    pub tooltip_bg: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 200, 200, 210),
            caption_active: skia::Color::from_argb(255, 235, 235, 245),
            caption_inactive: skia::Color::from_argb(255, 110, 110, 122),
            circle_fill: skia::Color::from_argb(128, 64, 160, 255),
            circle_stroke: skia::Color::from_argb(255, 64, 160, 255),
            circle_hover: skia::Color::from_argb(200, 220, 80, 80),
            glyph: skia::Color::from_argb(255, 245, 245, 250),
            tooltip_bg: skia::Color::from_argb(230, 32, 32, 38),
            tooltip_border: skia::Color::from_argb(255, 96, 156, 255),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            frame: skia::Color::from_argb(255, 60, 60, 70),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            tick_label: skia::Color::from_argb(255, 60, 60, 70),
            caption_active: skia::Color::from_argb(255, 20, 20, 30),
            caption_inactive: skia::Color::from_argb(255, 150, 150, 160),
            circle_fill: skia::Color::from_argb(128, 32, 120, 200),
            circle_stroke: skia::Color::from_argb(255, 32, 120, 200),
            circle_hover: skia::Color::from_argb(200, 200, 60, 60),
            glyph: skia::Color::from_argb(255, 255, 255, 255),
            tooltip_bg: skia::Color::from_argb(240, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 32, 120, 200),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}

// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart state and rendering.

pub mod chart;
pub mod dataset;
pub mod dimension;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod scale;
pub mod scene;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod tooltip;
pub mod transition;

pub use chart::ChartState;
pub use dataset::{DataRecord, Dataset};
pub use dimension::{DimensionChoice, XDimension, YDimension};
pub use error::ChartError;
pub use layout::{Layout, CIRCLE_RADIUS};
pub use render::RenderOptions;
pub use scale::LinearScale;
pub use scene::Scene;
pub use text::TextShaper;
pub use theme::Theme;
pub use transition::Transition;

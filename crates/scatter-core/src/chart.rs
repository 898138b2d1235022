// File: crates/scatter-core/src/chart.rs
// Summary: Chart state machine: axis selection, scale refits, and pure scene computation.

use std::time::Duration;

use crate::dataset::Dataset;
use crate::dimension::{DimensionChoice, XDimension, YDimension};
use crate::error::ChartError;
use crate::layout::{Layout, CIRCLE_RADIUS};
use crate::scale::{self, LinearScale};
use crate::scene::{AxisGroup, Caption, Mark, Scene};
use crate::ticks::{self, X_TICK_COUNT, Y_TICK_COUNT};
use crate::tooltip;
use crate::transition::{MarkMotion, TickMotion, Transition};

/// Explicit chart state: the selected dimension pair, the scale fitted for
/// each, the canvas layout, and the in-flight transition if a selection just
/// changed. Selection changes consume the state and return a new one; a
/// viewport resize drops the state entirely and rebuilds from the dataset.
#[derive(Clone, Debug)]
pub struct ChartState {
    pub x_dim: XDimension,
    pub y_dim: YDimension,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub layout: Layout,
    pub transition: Option<Transition>,
    pub hovered: Option<usize>,
}

impl ChartState {
    /// Build the default state (poverty vs obesity) for a dataset.
    pub fn new(dataset: &Dataset, layout: Layout) -> Result<Self, ChartError> {
        let x_dim = XDimension::Poverty;
        let y_dim = YDimension::Obesity;
        let plot = layout.plot();
        let x_scale = scale::fit_x(dataset, x_dim, plot.left as f32, plot.right as f32)?;
        let y_scale = scale::fit_y(dataset, y_dim, plot.top as f32, plot.bottom as f32)?;
        Ok(Self {
            x_dim,
            y_dim,
            x_scale,
            y_scale,
            layout,
            transition: None,
            hovered: None,
        })
    }

    /// Dispatch a caption click to the owning axis group.
    pub fn select(self, dataset: &Dataset, choice: DimensionChoice) -> Result<Self, ChartError> {
        match choice {
            DimensionChoice::X(dim) => self.select_x(dataset, dim),
            DimensionChoice::Y(dim) => self.select_y(dataset, dim),
        }
    }

    /// Re-bind the horizontal axis. The scale is refitted from the unchanged
    /// dataset and every mark animates to its new position together with the
    /// axis ticks. Re-selecting the already-active dimension still recomputes
    /// and redraws.
    pub fn select_x(self, dataset: &Dataset, dim: XDimension) -> Result<Self, ChartError> {
        let plot = self.layout.plot();
        let new_scale = scale::fit_x(dataset, dim, plot.left as f32, plot.right as f32)?;

        let from = positions(dataset, &self.x_scale, &self.y_scale, self.x_dim, self.y_dim);
        let to = positions(dataset, &new_scale, &self.y_scale, dim, self.y_dim);
        let marks = mark_motions(&from, &to);

        let ticks = ticks::ticks_for(&new_scale, X_TICK_COUNT)
            .into_iter()
            .map(|t| TickMotion {
                value: t.value,
                from_px: self.x_scale.to_px(t.value),
                to_px: t.px,
                label: t.label,
            })
            .collect();

        Ok(Self {
            x_dim: dim,
            x_scale: new_scale,
            transition: Some(Transition::new(AxisGroup::X, marks, ticks)),
            ..self
        })
    }

    /// Re-bind the vertical axis; mirrors `select_x`.
    pub fn select_y(self, dataset: &Dataset, dim: YDimension) -> Result<Self, ChartError> {
        let plot = self.layout.plot();
        let new_scale = scale::fit_y(dataset, dim, plot.top as f32, plot.bottom as f32)?;

        let from = positions(dataset, &self.x_scale, &self.y_scale, self.x_dim, self.y_dim);
        let to = positions(dataset, &self.x_scale, &new_scale, self.x_dim, dim);
        let marks = mark_motions(&from, &to);

        let ticks = ticks::ticks_for(&new_scale, Y_TICK_COUNT)
            .into_iter()
            .map(|t| TickMotion {
                value: t.value,
                from_px: self.y_scale.to_px(t.value),
                to_px: t.px,
                label: t.label,
            })
            .collect();

        Ok(Self {
            y_dim: dim,
            y_scale: new_scale,
            transition: Some(Transition::new(AxisGroup::Y, marks, ticks)),
            ..self
        })
    }

    /// Record index under a pointer position, through the current scales.
    pub fn hover_at(&self, dataset: &Dataset, px: f32, py: f32) -> Option<usize> {
        let pts = positions(dataset, &self.x_scale, &self.y_scale, self.x_dim, self.y_dim);
        let mut best: Option<(usize, f32)> = None;
        for (i, (x, y)) in pts.iter().enumerate() {
            let d2 = (x - px) * (x - px) + (y - py) * (y - py);
            if d2 <= CIRCLE_RADIUS * CIRCLE_RADIUS {
                match best {
                    Some((_, bd2)) if bd2 <= d2 => {}
                    _ => best = Some((i, d2)),
                }
            }
        }
        best.map(|(i, _)| i)
    }

    /// Drop a completed transition so callers can stop animating.
    pub fn settle(&mut self) {
        self.transition = None;
    }

    /// Compute everything needed to draw one frame. Pure: no canvas, no
    /// clock; callers pass elapsed time since the last selection change.
    pub fn scene_at(&self, dataset: &Dataset, elapsed: Duration) -> Scene {
        let plot = self.layout.plot();

        let animating = self
            .transition
            .as_ref()
            .filter(|t| !t.is_finished(elapsed));

        // Ticks: the changed axis slides its ticks between the old and new
        // scale projections; the other axis stays put.
        let mut x_ticks = ticks::ticks_for(&self.x_scale, X_TICK_COUNT);
        let mut y_ticks = ticks::ticks_for(&self.y_scale, Y_TICK_COUNT);
        if let Some(tr) = animating {
            let moved = tr
                .ticks
                .iter()
                .zip(tr.tick_positions(elapsed))
                .map(|(k, px)| crate::scene::Tick { value: k.value, px, label: k.label.clone() })
                .collect();
            match tr.axis {
                AxisGroup::X => x_ticks = moved,
                AxisGroup::Y => y_ticks = moved,
            }
        }

        // Marks: interpolated mid-transition, otherwise straight projection.
        let pts = match animating {
            Some(tr) => tr.mark_positions(elapsed),
            None => positions(dataset, &self.x_scale, &self.y_scale, self.x_dim, self.y_dim),
        };
        let marks: Vec<Mark> = dataset
            .records()
            .iter()
            .zip(&pts)
            .enumerate()
            .map(|(i, (r, &(x, y)))| Mark {
                x,
                y,
                abbr: r.abbr.clone(),
                hovered: self.hovered == Some(i),
            })
            .collect();

        let captions = self.captions();

        // Tooltip content closes over the current dimension pair, so it is
        // rebuilt from the live selection on every frame.
        let tooltip = self.hovered.and_then(|i| {
            let record = dataset.records().get(i)?;
            let (mx, my) = *pts.get(i)?;
            Some(tooltip::tooltip_for(
                record,
                self.x_dim,
                self.y_dim,
                mx,
                my - CIRCLE_RADIUS - 5.0,
            ))
        });

        Scene { plot, x_ticks, y_ticks, captions, marks, tooltip }
    }

    /// The six axis captions; exactly one active per group.
    pub fn captions(&self) -> Vec<Caption> {
        let mut out = Vec::with_capacity(6);
        for (slot, dim) in XDimension::ALL.into_iter().enumerate() {
            let (x, y) = self.layout.x_caption_pos(slot);
            out.push(Caption {
                group: AxisGroup::X,
                text: dim.caption(),
                x,
                y,
                rotated: false,
                active: dim == self.x_dim,
            });
        }
        for (slot, dim) in YDimension::ALL.into_iter().enumerate() {
            let (x, y) = self.layout.y_caption_pos(slot);
            out.push(Caption {
                group: AxisGroup::Y,
                text: dim.caption(),
                x,
                y,
                rotated: true,
                active: dim == self.y_dim,
            });
        }
        out
    }
}

/// Project every record through a scale pair.
fn positions(
    dataset: &Dataset,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    x_dim: XDimension,
    y_dim: YDimension,
) -> Vec<(f32, f32)> {
    dataset
        .records()
        .iter()
        .map(|r| (x_scale.to_px(x_dim.value_of(r)), y_scale.to_px(y_dim.value_of(r))))
        .collect()
}

fn mark_motions(from: &[(f32, f32)], to: &[(f32, f32)]) -> Vec<MarkMotion> {
    from.iter()
        .zip(to)
        .map(|(&f, &t)| MarkMotion { from: f, to: t })
        .collect()
}

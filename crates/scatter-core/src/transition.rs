// File: crates/scatter-core/src/transition.rs
// Summary: Timed interpolation of mark positions and axis ticks after a selection change.

use std::time::Duration;

use crate::scene::AxisGroup;

/// Fixed duration shared by the axis tick animation and the mark animation;
/// both start together and run concurrently.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(1000);

/// One mark's start and end position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkMotion {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

/// One tick of the changed axis, sliding from its position under the old
/// scale to its position under the new one.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMotion {
    pub value: f64,
    pub from_px: f32,
    pub to_px: f32,
    pub label: String,
}

/// Declarative animation state: start values, end values, fixed duration.
/// Sampling is pure; callers supply elapsed wall time.
#[derive(Clone, Debug)]
pub struct Transition {
    pub axis: AxisGroup,
    pub duration: Duration,
    pub marks: Vec<MarkMotion>,
    pub ticks: Vec<TickMotion>,
}

impl Transition {
    pub fn new(axis: AxisGroup, marks: Vec<MarkMotion>, ticks: Vec<TickMotion>) -> Self {
        Self { axis, duration: TRANSITION_DURATION, marks, ticks }
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Interpolated mark positions at `elapsed`.
    pub fn mark_positions(&self, elapsed: Duration) -> Vec<(f32, f32)> {
        let t = self.progress(elapsed);
        self.marks.iter().map(|m| (lerp(m.from.0, m.to.0, t), lerp(m.from.1, m.to.1, t))).collect()
    }

    /// Interpolated pixel offsets for the changed axis's ticks at `elapsed`.
    pub fn tick_positions(&self, elapsed: Duration) -> Vec<f32> {
        let t = self.progress(elapsed);
        self.ticks.iter().map(|k| lerp(k.from_px, k.to_px, t)).collect()
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

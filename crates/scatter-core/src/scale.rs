// File: crates/scatter-core/src/scale.rs
// Summary: Linear data-to-pixel scales with padded domain fitting.

use crate::dataset::Dataset;
use crate::dimension::{XDimension, YDimension};
use crate::error::ChartError;

/// Padding factors applied to the data extent when fitting a domain.
pub const DOMAIN_PAD_LOW: f64 = 0.8;
pub const DOMAIN_PAD_HIGH: f64 = 1.2;

/// Pure mapping from a numeric domain onto a pixel range.
///
/// Never mutated in place; a dimension change replaces the scale wholesale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let (mut d0, mut d1) = domain;
        // Guard degenerate domains so to_px never divides by zero.
        if (d1 - d0).abs() < 1e-12 {
            d1 = d0 + 1.0;
            d0 -= 1.0;
        }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.r0 + (((v - self.d0) / (self.d1 - self.d0)) as f32) * (self.r1 - self.r0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        self.d0 + ((px - self.r0) / (self.r1 - self.r0)) as f64 * (self.d1 - self.d0)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f32, f32) {
        (self.r0, self.r1)
    }
}

/// Fit the horizontal scale for one dimension: domain [min*0.8, max*1.2],
/// range left -> right.
pub fn fit_x(
    dataset: &Dataset,
    dim: XDimension,
    left_px: f32,
    right_px: f32,
) -> Result<LinearScale, ChartError> {
    let (min_v, max_v) = dataset
        .min_max(|r| dim.value_of(r))
        .ok_or(ChartError::EmptyDataset)?;
    Ok(LinearScale::new(
        (min_v * DOMAIN_PAD_LOW, max_v * DOMAIN_PAD_HIGH),
        (left_px, right_px),
    ))
}

/// Fit the vertical scale. The pixel range is inverted (bottom -> top) so
/// larger values plot higher.
pub fn fit_y(
    dataset: &Dataset,
    dim: YDimension,
    top_px: f32,
    bottom_px: f32,
) -> Result<LinearScale, ChartError> {
    let (min_v, max_v) = dataset
        .min_max(|r| dim.value_of(r))
        .ok_or(ChartError::EmptyDataset)?;
    Ok(LinearScale::new(
        (min_v * DOMAIN_PAD_LOW, max_v * DOMAIN_PAD_HIGH),
        (bottom_px, top_px),
    ))
}

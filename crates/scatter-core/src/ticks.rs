// File: crates/scatter-core/src/ticks.rs
// Summary: Tick layout and label formatting helpers.

use crate::scale::LinearScale;
use crate::scene::Tick;

/// Tick counts matched to the plot proportions.
pub const X_TICK_COUNT: usize = 10;
pub const Y_TICK_COUNT: usize = 8;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced ticks across a scale's domain, projected to pixels.
pub fn ticks_for(scale: &LinearScale, count: usize) -> Vec<Tick> {
    let (d0, d1) = scale.domain();
    linspace(d0, d1, count)
        .into_iter()
        .map(|value| Tick {
            value,
            px: scale.to_px(value),
            label: format_tick(value),
        })
        .collect()
}

/// Compact tick label: grouped integers for large magnitudes, one decimal
/// otherwise.
pub fn format_tick(v: f64) -> String {
    if v.abs() >= 1000.0 {
        group_thousands(v.round() as i64)
    } else {
        let s = format!("{v:.1}");
        s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
    }
}

/// Insert comma separators into an integer: 43613 -> "43,613".
pub fn group_thousands(n: i64) -> String {
    let neg = n < 0;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if neg {
        format!("-{out}")
    } else {
        out
    }
}

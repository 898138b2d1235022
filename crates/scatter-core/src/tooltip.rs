// File: crates/scatter-core/src/tooltip.rs
// Summary: Tooltip text for the hovered record under the current axis selection.

use crate::dataset::DataRecord;
use crate::dimension::{XDimension, YDimension};
use crate::scene::TooltipBox;
use crate::ticks::group_thousands;

/// Tooltip block for one record: full state name, then one line per axis,
/// formatted for the currently selected dimension pair.
pub fn tooltip_for(
    record: &DataRecord,
    x_dim: XDimension,
    y_dim: YDimension,
    anchor_x: f32,
    anchor_y: f32,
) -> TooltipBox {
    TooltipBox {
        anchor_x,
        anchor_y,
        title: record.state.clone(),
        x_line: format!("{} {}", x_dim.tooltip_prefix(), format_x_value(x_dim, x_dim.value_of(record))),
        y_line: format!("{} {}", y_dim.tooltip_prefix(), format_y_value(y_dim.value_of(record))),
    }
}

/// Income is currency with thousands separators; age is a plain number; the
/// remaining x dimension is percentage-valued.
pub fn format_x_value(dim: XDimension, v: f64) -> String {
    match dim {
        XDimension::Income => format!("${}", group_thousands(v.round() as i64)),
        XDimension::Age => format_plain(v),
        XDimension::Poverty => format!("{}%", format_plain(v)),
    }
}

/// Every y dimension is percentage-valued.
pub fn format_y_value(v: f64) -> String {
    format!("{}%", format_plain(v))
}

/// Plain numeric rendering without trailing ".0" noise: 38.0 -> "38",
/// 18.2 -> "18.2".
fn format_plain(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

// File: crates/scatter-core/tests/tooltip.rs
// Purpose: Tooltip value formatting rules per dimension.

use scatter_core::dimension::XDimension;
use scatter_core::ticks::group_thousands;
use scatter_core::tooltip::{format_x_value, format_y_value};

#[test]
fn income_is_currency_with_thousands_separators() {
    assert_eq!(format_x_value(XDimension::Income, 43613.0), "$43,613");
    assert_eq!(format_x_value(XDimension::Income, 69017.0), "$69,017");
    assert_eq!(format_x_value(XDimension::Income, 999.0), "$999");
    assert_eq!(format_x_value(XDimension::Income, 1234567.0), "$1,234,567");
}

#[test]
fn age_is_plain_numeric() {
    assert_eq!(format_x_value(XDimension::Age, 38.0), "38");
    assert_eq!(format_x_value(XDimension::Age, 33.5), "33.5");
}

#[test]
fn poverty_gets_a_percent_suffix() {
    assert_eq!(format_x_value(XDimension::Poverty, 18.2), "18.2%");
    assert_eq!(format_x_value(XDimension::Poverty, 10.0), "10%");
}

#[test]
fn y_dimensions_are_all_percentages() {
    assert_eq!(format_y_value(33.6), "33.6%");
    assert_eq!(format_y_value(18.6), "18.6%");
    assert_eq!(format_y_value(15.0), "15%");
}

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(43613), "43,613");
    assert_eq!(group_thousands(-43613), "-43,613");
}

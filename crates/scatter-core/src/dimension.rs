// File: crates/scatter-core/src/dimension.rs
// Summary: Closed dimension enums for the two axis groups.

use std::fmt;
use std::str::FromStr;

use crate::dataset::DataRecord;
use crate::error::ChartError;

/// Dimensions eligible to drive the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XDimension {
    Poverty,
    Age,
    Income,
}

/// Dimensions eligible to drive the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YDimension {
    Obesity,
    Smokes,
    Healthcare,
}

/// A clicked axis caption, resolved to the axis group that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionChoice {
    X(XDimension),
    Y(YDimension),
}

impl XDimension {
    pub const ALL: [XDimension; 3] = [XDimension::Poverty, XDimension::Age, XDimension::Income];

    pub fn value_of(&self, r: &DataRecord) -> f64 {
        match self {
            XDimension::Poverty => r.poverty,
            XDimension::Age => r.age,
            XDimension::Income => r.income,
        }
    }

    /// Axis caption shown under the plot.
    pub fn caption(&self) -> &'static str {
        match self {
            XDimension::Poverty => "In Poverty (%)",
            XDimension::Age => "Age (Median)",
            XDimension::Income => "Household Income (Median)",
        }
    }

    /// Short prefix used in tooltip lines.
    pub fn tooltip_prefix(&self) -> &'static str {
        match self {
            XDimension::Poverty => "Poverty:",
            XDimension::Age => "Age:",
            XDimension::Income => "Income:",
        }
    }

    /// Dataset column name.
    pub fn key(&self) -> &'static str {
        match self {
            XDimension::Poverty => "poverty",
            XDimension::Age => "age",
            XDimension::Income => "income",
        }
    }
}

impl YDimension {
    pub const ALL: [YDimension; 3] = [YDimension::Obesity, YDimension::Smokes, YDimension::Healthcare];

    pub fn value_of(&self, r: &DataRecord) -> f64 {
        match self {
            YDimension::Obesity => r.obesity,
            YDimension::Smokes => r.smokes,
            YDimension::Healthcare => r.healthcare,
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            YDimension::Obesity => "Obese (%)",
            YDimension::Smokes => "Smokes (%)",
            YDimension::Healthcare => "Lacks Healthcare (%)",
        }
    }

    pub fn tooltip_prefix(&self) -> &'static str {
        match self {
            YDimension::Obesity => "Obesity:",
            YDimension::Smokes => "Smokes:",
            YDimension::Healthcare => "Healthcare:",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            YDimension::Obesity => "obesity",
            YDimension::Smokes => "smokes",
            YDimension::Healthcare => "healthcare",
        }
    }
}

impl fmt::Display for XDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for YDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for XDimension {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "poverty" => Ok(XDimension::Poverty),
            "age" => Ok(XDimension::Age),
            "income" => Ok(XDimension::Income),
            other => Err(ChartError::UnknownDimension(other.to_string())),
        }
    }
}

impl FromStr for YDimension {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "obesity" => Ok(YDimension::Obesity),
            "smokes" => Ok(YDimension::Smokes),
            "healthcare" => Ok(YDimension::Healthcare),
            other => Err(ChartError::UnknownDimension(other.to_string())),
        }
    }
}

impl FromStr for DimensionChoice {
    type Err = ChartError;

    /// Resolve a column name to its owning axis group; x names win first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(x) = s.parse::<XDimension>() {
            return Ok(DimensionChoice::X(x));
        }
        s.parse::<YDimension>().map(DimensionChoice::Y)
    }
}

use serde::{Deserialize, Serialize};

/// An IEC 60063 standard resistor value series.
///
/// Selects both the significand table and the decade-multiplier set used to
/// build the candidate resistor value list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", value(rename_all = "UPPER"))]
pub enum Series {
    E12,
    E24,
    E96,
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Series::E12 => write!(f, "E12"),
            Series::E24 => write!(f, "E24"),
            Series::E96 => write!(f, "E96"),
        }
    }
}

use crate::enums::Series;
use serde::{Deserialize, Serialize};

/// One evaluated resistor pair for the feedback divider Vout = Vfb * (1 + R1/R2).
///
/// `r1` sits between the output and the feedback node, `r2` between the
/// feedback node and ground. `vout` and `error` are the values computed
/// during the scan, carried along so callers never recompute them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidatePair {
    /// Output-to-feedback-node resistor, in ohms.
    pub r1: f64,
    /// Feedback-node-to-ground resistor, in ohms.
    pub r2: f64,
    /// Output voltage produced by this pair, in volts.
    pub vout: f64,
    /// Absolute deviation from the target output voltage, in volts.
    pub error: f64,
}

/// The full set of inputs for one divider search run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Target output voltage, in volts.
    pub vout_target: f64,
    /// Feedback reference voltage of the regulator, in volts.
    pub vfb: f64,
    /// Inclusive lower bound on resistor magnitude, in ohms.
    pub r_min: f64,
    /// Inclusive upper bound on resistor magnitude, in ohms.
    pub r_max: f64,
    /// Standard series to draw candidate values from.
    pub series: Series,
}

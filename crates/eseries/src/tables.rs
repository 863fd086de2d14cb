//! IEC 60063 significand tables and decade-multiplier sets.
//!
//! These are process-wide constant data, read-only after compilation. Every
//! entry is strictly positive; the divider scan relies on that invariant to
//! rule out division by zero.

/// E12 significands (two significant digits, 12 per decade).
pub const E12_SIGNIFICANDS: [f64; 12] = [
    10.0, 12.0, 15.0, 18.0, 22.0, 27.0, 33.0, 39.0, 47.0, 56.0, 68.0, 82.0,
];

/// Decade multipliers applied to the E12 significands.
pub const E12_DECADES: [f64; 6] = [1e1, 1e2, 1e3, 1e4, 1e5, 1e6];

/// E24 significands (two significant digits, 24 per decade).
pub const E24_SIGNIFICANDS: [f64; 24] = [
    10.0, 11.0, 12.0, 13.0, 15.0, 16.0, 18.0, 20.0, 22.0, 24.0, 27.0, 30.0, 33.0, 36.0, 39.0,
    43.0, 47.0, 51.0, 56.0, 62.0, 68.0, 75.0, 82.0, 91.0,
];

/// Decade multipliers applied to the E24 significands.
pub const E24_DECADES: [f64; 6] = [1e1, 1e2, 1e3, 1e4, 1e5, 1e6];

/// E96 significands (three significant digits, 96 per decade).
pub const E96_SIGNIFICANDS: [f64; 96] = [
    100.0, 102.0, 105.0, 107.0, 110.0, 113.0, 115.0, 118.0, 121.0, 124.0, 127.0, 130.0, 133.0,
    137.0, 140.0, 143.0, 147.0, 150.0, 154.0, 158.0, 162.0, 165.0, 169.0, 174.0, 178.0, 182.0,
    187.0, 191.0, 196.0, 200.0, 205.0, 210.0, 215.0, 221.0, 226.0, 232.0, 237.0, 243.0, 249.0,
    255.0, 261.0, 267.0, 274.0, 280.0, 287.0, 294.0, 301.0, 309.0, 316.0, 324.0, 332.0, 340.0,
    348.0, 357.0, 365.0, 374.0, 383.0, 392.0, 402.0, 412.0, 422.0, 432.0, 442.0, 453.0, 464.0,
    475.0, 487.0, 499.0, 511.0, 523.0, 536.0, 549.0, 562.0, 576.0, 590.0, 604.0, 619.0, 634.0,
    649.0, 665.0, 681.0, 698.0, 715.0, 732.0, 750.0, 768.0, 787.0, 806.0, 825.0, 845.0, 866.0,
    887.0, 909.0, 931.0, 953.0, 976.0,
];

/// Decade multipliers applied to the E96 significands. Wider than the E12/E24
/// set because the combined table also backfills the sub-ohm and 10-megohm
/// ranges.
pub const E96_DECADES: [f64; 10] = [1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e-1, 1e-2, 1e-3];

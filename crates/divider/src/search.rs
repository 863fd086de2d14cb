use core_types::{CandidatePair, SearchParams};
use itertools::Itertools;

/// Finds the best resistor pair(s) for the requested divider.
///
/// Generates the series value set, keeps the magnitudes inside
/// `[r_min, r_max]` (inclusive on both ends), and scans every ordered pair.
/// Returns all pairs tied for the minimum absolute voltage error, in
/// encounter order; empty when the range excludes every series value.
pub fn find_best_divider(params: &SearchParams) -> Vec<CandidatePair> {
    let resistors: Vec<f64> = eseries::generate(params.series)
        .into_iter()
        .filter(|&r| params.r_min <= r && r <= params.r_max)
        .collect();

    tracing::debug!(
        series = %params.series,
        candidates = resistors.len(),
        "filtered resistor value set"
    );

    let best = scan_pairs(&resistors, params.vout_target, params.vfb);

    tracing::debug!(
        evaluated = resistors.len() * resistors.len(),
        ties = best.len(),
        "pair scan complete"
    );
    best
}

/// Evaluates every ordered pair `(r1, r2)` drawn with replacement from
/// `resistors` and returns the pair(s) minimizing `|Vout - target|`.
///
/// Tie tracking: a strictly smaller error clears the list and starts over; an
/// exactly equal error (bit-for-bit on the computed `f64`) appends. Pairs are
/// visited with `r1` varying slowest, so ties come out ascending in `r1`
/// first, then `r2`, provided the input slice is sorted.
///
/// Every standard series value is strictly positive, so `r1 / r2` is always
/// well-defined.
pub fn scan_pairs(resistors: &[f64], vout_target: f64, vfb: f64) -> Vec<CandidatePair> {
    let mut best_error = f64::INFINITY;
    let mut best_pairs: Vec<CandidatePair> = Vec::new();

    for (&r1, &r2) in resistors.iter().cartesian_product(resistors.iter()) {
        let vout = vfb * (1.0 + r1 / r2);
        let error = (vout - vout_target).abs();

        if error < best_error {
            best_error = error;
            best_pairs.clear();
            best_pairs.push(CandidatePair { r1, r2, vout, error });
        } else if error == best_error {
            best_pairs.push(CandidatePair { r1, r2, vout, error });
        }
    }

    best_pairs
}

use crate::tables::{
    E12_DECADES, E12_SIGNIFICANDS, E24_DECADES, E24_SIGNIFICANDS, E96_DECADES, E96_SIGNIFICANDS,
};
use core_types::Series;
use itertools::Itertools;

/// Returns the candidate resistor value set for a series, in ohms.
///
/// Values are the Cartesian product of the series' significand table and
/// decade multipliers, rounded to one decimal place, deduplicated, and
/// sorted ascending.
///
/// For E96 the result is the union of the E96-derived and E24-derived value
/// sets, so every coarse E24 value remains available when the finer series
/// is requested.
// TODO: generalize the inheritance chain (E96 includes E24 includes E12);
// today only the E96 -> E24 fallback exists, and E24 does not pull in E12.
pub fn generate(series: Series) -> Vec<f64> {
    let mut values = match series {
        Series::E12 => product(&E12_SIGNIFICANDS, &E12_DECADES),
        Series::E24 => product(&E24_SIGNIFICANDS, &E24_DECADES),
        Series::E96 => {
            let mut combined = product(&E96_SIGNIFICANDS, &E96_DECADES);
            combined.extend(product(&E24_SIGNIFICANDS, &E24_DECADES));
            combined
        }
    };

    values.sort_by(f64::total_cmp);
    values.dedup();

    tracing::debug!(%series, count = values.len(), "generated resistor value set");
    values
}

/// Scales every significand by every decade multiplier, rounding each
/// product to one decimal place.
fn product(significands: &[f64], decades: &[f64]) -> Vec<f64> {
    significands
        .iter()
        .cartesian_product(decades.iter())
        .map(|(&s, &d)| round_tenth(s * d))
        .collect()
}

/// Rounds to one decimal place. Series values are rounded once, here, before
/// any divider math; Vout and error are never rounded.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_unique(values: &[f64]) {
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_e12_set() {
        let values = generate(Series::E12);
        // 12 significands x 6 decades, no collisions after rounding.
        assert_eq!(values.len(), 72);
        assert_sorted_unique(&values);
        assert_eq!(values[0], 100.0);
        assert_eq!(*values.last().unwrap(), 82_000_000.0);
    }

    #[test]
    fn test_e24_set() {
        let values = generate(Series::E24);
        // 24 significands x 6 decades, no collisions after rounding.
        assert_eq!(values.len(), 144);
        assert_sorted_unique(&values);
        assert!(values.contains(&2_400.0));
        assert!(values.contains(&7_500.0));
    }

    #[test]
    fn test_e96_set_is_union_with_e24() {
        let values = generate(Series::E96);
        assert_sorted_unique(&values);

        // 110.0 is only reachable through the E24 table: the E96 decade set
        // has no 1e0 multiplier, so 110.0 * 1e0 never occurs natively.
        assert!(values.contains(&110.0));

        // Native E96 contributions across the wider decade range.
        assert!(values.contains(&0.1)); // 100.0 * 1e-3
        assert!(values.contains(&97_600_000.0)); // 976.0 * 1e5
        assert!(values.contains(&9_760_000_000.0)); // 976.0 * 1e7
    }

    #[test]
    fn test_all_values_strictly_positive() {
        for series in [Series::E12, Series::E24, Series::E96] {
            assert!(generate(series).iter().all(|&r| r > 0.0));
        }
    }
}

/// Renders a resistor magnitude in the engineering short form used on
/// schematics: `470.0R`, `4.7K`, `4.7M`, `4.7G`, always one decimal place.
pub fn format_resistance(ohms: f64) -> String {
    if ohms < 1_000.0 {
        format!("{:.1}R", ohms)
    } else if ohms < 1_000_000.0 {
        format!("{:.1}K", ohms / 1_000.0)
    } else if ohms < 1_000_000_000.0 {
        format!("{:.1}M", ohms / 1_000_000.0)
    } else {
        format!("{:.1}G", ohms / 1_000_000_000.0)
    }
}

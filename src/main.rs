use clap::Parser;
use core_types::{SearchParams, Series};
use divider::find_best_divider;
use eseries::format_resistance;
use tracing_subscriber::EnvFilter;

/// The main entry point for the voltdiv application.
fn main() {
    // Log to stderr so stdout stays clean for the search results.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = handle_search(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Selects the best standard resistor pair for a DC/DC feedback divider.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "\
Examples:
  voltdiv --vout 3.3 --vfb 0.8 --series E24
  voltdiv --vout 5 --vfb 1.25 --rmin 1000 --rmax 100000 --series E12

Topology:
  R1 sits between VOUT and the FB pin, R2 between FB and GND.
  Output voltage Vout = Vfb * (1 + R1/R2)")]
struct Cli {
    /// Target output voltage in volts (e.g. 3.3).
    #[arg(long)]
    vout: f64,

    /// Feedback reference voltage of the DC/DC IC in volts (e.g. 0.8).
    #[arg(long)]
    vfb: f64,

    /// Minimum resistor value in ohms.
    #[arg(long, default_value_t = 1_000.0)]
    rmin: f64,

    /// Maximum resistor value in ohms.
    #[arg(long, default_value_t = 1_000_000.0)]
    rmax: f64,

    /// Standard resistor series to draw values from.
    #[arg(long, value_enum, default_value_t = Series::E24)]
    series: Series,
}

// ==============================================================================
// Search Command Logic
// ==============================================================================

/// Runs the divider search and renders the result.
fn handle_search(cli: Cli) -> anyhow::Result<()> {
    let params = SearchParams {
        vout_target: cli.vout,
        vfb: cli.vfb,
        r_min: cli.rmin,
        r_max: cli.rmax,
        series: cli.series,
    };

    tracing::debug!(?params, "starting divider search");

    let best_list = find_best_divider(&params);

    let Some(last) = best_list.last() else {
        anyhow::bail!("no suitable resistor combination found");
    };

    for (index, best) in best_list.iter().enumerate() {
        println!(
            "Best pair {}: R1 = {}, R2 = {}",
            index,
            format_resistance(best.r1),
            format_resistance(best.r2)
        );
    }
    println!(
        "-> Vout = {:.4} V, error = {:.4} V ({:.2} %)",
        last.vout,
        last.error,
        (last.error / cli.vout) * 100.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_flag_accepts_uppercase_names() {
        let cli =
            Cli::try_parse_from(["voltdiv", "--vout", "3.3", "--vfb", "0.8", "--series", "E96"])
                .unwrap();
        assert_eq!(cli.series, Series::E96);
    }

    #[test]
    fn test_series_flag_rejects_lowercase_names() {
        let result =
            Cli::try_parse_from(["voltdiv", "--vout", "3.3", "--vfb", "0.8", "--series", "e24"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_flags_default_to_1k_1m_e24() {
        let cli = Cli::try_parse_from(["voltdiv", "--vout", "3.3", "--vfb", "0.8"]).unwrap();
        assert_eq!(cli.rmin, 1_000.0);
        assert_eq!(cli.rmax, 1_000_000.0);
        assert_eq!(cli.series, Series::E24);
    }

    #[test]
    fn test_missing_required_flags_is_an_error() {
        assert!(Cli::try_parse_from(["voltdiv", "--vout", "3.3"]).is_err());
        assert!(Cli::try_parse_from(["voltdiv"]).is_err());
    }
}

//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

/// deskcalc — terminal calculator with general, scientific, and business modes.
#[derive(Parser, Debug)]
#[command(name = "deskcalc", version, about)]
pub struct AppConfig {
    /// Evaluate an expression and print the result without entering the TUI.
    #[arg(short, long, value_name = "EXPR")]
    pub eval: Option<String>,

    /// Angle unit for trig functions: rad or deg.
    #[arg(long, default_value = "rad", env = "DESKCALC_ANGLE_UNIT")]
    pub angle_unit: String,

    /// Initial mode: general, scientific, or business.
    #[arg(short, long, default_value = "general", env = "DESKCALC_MODE")]
    pub mode: String,

    /// Color theme: dark or light.
    #[arg(long, default_value = "dark", env = "DESKCALC_THEME")]
    pub theme: String,

    /// Location of the persisted business history.
    #[arg(long, value_name = "PATH", env = "DESKCALC_HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    /// Export the persisted business history as CSV to PATH and exit.
    #[arg(long, value_name = "PATH")]
    pub export_csv: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("deskcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert!(config.eval.is_none());
        assert_eq!(config.angle_unit, "rad");
        assert_eq!(config.mode, "general");
        assert_eq!(config.theme, "dark");
        assert!(config.history_file.is_none());
        assert!(config.export_csv.is_none());
    }

    #[test]
    fn eval_flag() {
        let config = parse(&["--eval", "2+2"]);
        assert_eq!(config.eval.as_deref(), Some("2+2"));
        let config = parse(&["-e", "sin(90)"]);
        assert_eq!(config.eval.as_deref(), Some("sin(90)"));
    }

    #[test]
    fn angle_unit_and_mode_flags() {
        let config = parse(&["--angle-unit", "deg", "--mode", "business"]);
        assert_eq!(config.angle_unit, "deg");
        assert_eq!(config.mode, "business");
    }

    #[test]
    fn history_and_export_paths() {
        let config = parse(&["--history-file", "/tmp/h.json", "--export-csv", "out.csv"]);
        assert_eq!(config.history_file.as_deref(), Some(std::path::Path::new("/tmp/h.json")));
        assert_eq!(config.export_csv.as_deref(), Some(std::path::Path::new("out.csv")));
    }
}

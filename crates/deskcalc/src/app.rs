//! Application entry point and dispatch.

use anyhow::Result;
use tracing::debug;

use deskcalc_core::constants::exit_codes;
use deskcalc_core::{
    format_value, AngleUnit, Calculator, Evaluator, HistoryStore, JsonFileStore, Mode,
};
use deskcalc_tui::{App, Theme};

use crate::config::AppConfig;

/// Run the application, returning the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "deskcalc", &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let Some(unit) = AngleUnit::from_name(&config.angle_unit) else {
        eprintln!("invalid angle unit: {}", config.angle_unit);
        return Ok(exit_codes::ERROR_CONFIG);
    };

    // One-shot evaluation
    if let Some(expression) = &config.eval {
        return Ok(run_eval(expression, unit));
    }

    // CSV export without entering the TUI
    if let Some(path) = &config.export_csv {
        return run_export(config, path);
    }

    let Some(mode) = Mode::from_name(&config.mode) else {
        eprintln!("invalid mode: {}", config.mode);
        return Ok(exit_codes::ERROR_CONFIG);
    };
    let Some(theme) = Theme::from_name(&config.theme) else {
        eprintln!("invalid theme: {}", config.theme);
        return Ok(exit_codes::ERROR_CONFIG);
    };

    run_tui(config, unit, mode, theme)
}

/// Evaluate a single expression to stdout. A failed evaluation prints the
/// same `Error` marker the display shows and exits non-zero.
fn run_eval(expression: &str, unit: AngleUnit) -> i32 {
    let evaluator = Evaluator::new(unit);
    match evaluator.evaluate(expression) {
        Ok(value) => {
            println!("{}", format_value(value));
            exit_codes::SUCCESS
        }
        Err(err) => {
            debug!(expression, %err, "one-shot evaluation failed");
            println!("Error");
            exit_codes::ERROR_GENERIC
        }
    }
}

fn run_export(config: &AppConfig, path: &std::path::Path) -> Result<i32> {
    let store = store_for(config);
    let log = store.load();
    std::fs::write(path, log.to_csv())?;
    println!("exported {} entries to {}", log.len(), path.display());
    Ok(exit_codes::SUCCESS)
}

fn run_tui(config: &AppConfig, unit: AngleUnit, mode: Mode, theme: Theme) -> Result<i32> {
    let store = store_for(config);
    let mut calc = Calculator::new(Box::new(store));
    calc.set_angle_unit(unit);
    calc.set_mode(mode);

    let mut app = App::new(calc, theme);
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;
    Ok(exit_codes::SUCCESS)
}

fn store_for(config: &AppConfig) -> JsonFileStore {
    config
        .history_file
        .clone()
        .map_or_else(JsonFileStore::at_default_location, JsonFileStore::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_success_code() {
        assert_eq!(run_eval("2+2", AngleUnit::Radians), exit_codes::SUCCESS);
    }

    #[test]
    fn eval_failure_code() {
        assert_eq!(run_eval("5+*", AngleUnit::Radians), exit_codes::ERROR_GENERIC);
    }

    #[test]
    fn store_honors_history_file_override() {
        let config = AppConfig::try_parse_from(["deskcalc", "--history-file", "/tmp/x.json"])
            .unwrap();
        let store = store_for(&config);
        assert_eq!(store.path(), std::path::Path::new("/tmp/x.json"));
    }
}

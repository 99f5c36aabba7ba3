//! Garage repair tracker console entry point.
//!
//! # Responsibility
//! - Resolve configuration and start file logging.
//! - Hand stdin/stdout to the interactive menu.

mod config;
mod menu;
mod operations;

use config::AppConfig;
use garage_core::{init_logging, Console};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    let config = match AppConfig::from_current_dir() {
        Ok(config) => config,
        Err(err) => {
            let _ = console.error(&format!("Error: cannot resolve working directory: {err}"));
            return ExitCode::FAILURE;
        }
    };

    // Logs are optional; the menu still runs without them.
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        let _ = console.error(&format!("Logging disabled: {err}"));
    }

    match menu::run_menu(&mut console, &config.db_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=console_io module=cli status=error error={err}");
            eprintln!("console error: {err}");
            ExitCode::FAILURE
        }
    }
}

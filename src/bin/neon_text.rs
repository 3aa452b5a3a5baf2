//! Neon text display.
//!
//! Usage: `neon-text [config.json]`
//!
//! Without a config file the default three lines are shown. Set `RUST_LOG`
//! (e.g. `RUST_LOG=neon_text=debug`) for more output.

use neon_text::prelude::*;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(path) => match DisplayConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::error!("{}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => DisplayConfig::default(),
    };

    match NeonDisplay::new().with_config(config).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

//! Logger initialization for the `unemoji` binary.
//!
//! Logs go to stderr through `env_logger`. An explicit level wins over
//! `RUST_LOG`; without one, `RUST_LOG` is honored and the default is `warn`.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes the global logger. Safe to call more than once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr).format_timestamp(None);

    if let Some(level) = level {
        builder.filter_level(level);
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized; keeping the existing one.");
    }
}

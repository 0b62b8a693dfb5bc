//! Process-wide logger setup
//!
//! `env_logger` is installed once, before the scenario is loaded, so the
//! loading and build messages reach the terminal in every run mode. The
//! Bevy viewer runs with its `LogPlugin` disabled and logs through the
//! same `log` facade.

use log::LevelFilter;

/// Install `env_logger` with `info` as the default level (`RUST_LOG` overrides)
/// Returns false if a logger was already installed, which is harmless
pub fn init_logging() -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .is_ok()
}

/// Whether records at `info` currently reach a logger
pub fn info_enabled() -> bool {
    log::max_level() >= LevelFilter::Info
}

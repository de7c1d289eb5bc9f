//! Logging setup for the CLI.

use std::env;

use log::LevelFilter;

/// Map a `-v` count to a level filter.
///
/// 0 is quiet (errors only), 1 is the default (warnings), 2 info, 3+ debug.
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Initialize logging for the CLI.
///
/// `RUST_LOG`, when set, overrides the level derived from `verbosity`.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_logger(verbosity: u8) {
    let level = level_for_verbosity(verbosity);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Error);
        assert_eq!(level_for_verbosity(1), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(2), LevelFilter::Info);
        assert_eq!(level_for_verbosity(9), LevelFilter::Debug);
    }
}

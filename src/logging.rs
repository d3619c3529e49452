//! Logger set-up for the binary.
//!
//! `BLACKBOX_LOG` takes an `env_logger` filter such as `debug` or
//! `blackbox::ray=trace,info`. Records go to stderr so the JSON written by
//! `blackbox trace` stays clean on stdout.

use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BLACKBOX_LOG";

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, "info"));
    builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(true);
    builder
}

/// Install the global logger. Later calls are no-ops.
pub fn init_logging() {
    if builder().try_init().is_ok() {
        log::debug!("logging initialised from {}", LOG_ENV);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging();
        init_logging();
        log::info!("still logging");
    }
}

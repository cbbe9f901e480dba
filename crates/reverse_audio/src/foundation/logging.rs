//! Logging setup
//!
//! The library only talks to the `log` facade. Binaries pick the sink.

pub use log::{debug, error, info, trace, warn};

/// Initialize `env_logger`, honoring `RUST_LOG` and falling back to `info`
pub fn init() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Initialize logging for tests; safe to call from many tests
#[cfg(test)]
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}

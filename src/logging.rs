//! Logger setup shared by the exercises.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs `env_logger` once.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Records go to
/// standard output, next to what the exercises print.
pub fn init() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.target(env_logger::Target::Stdout);
        match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        // A test harness may already own the global logger
        if builder.try_init().is_err() {
            log::debug!("logger already installed");
        }
    });
}

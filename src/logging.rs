//! Logger setup
//!
//! `RUST_LOG` wins when set; otherwise `--verbose` selects debug output and
//! the default shows warnings only.

use log::LevelFilter;

/// Level used when `RUST_LOG` is not set
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the global logger
///
/// Calling it twice is harmless; the second logger is ignored.
pub fn init_logger(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => builder.parse_filters(&filters),
        Err(_) => builder.filter_level(default_level(verbose)),
    };
    let _ = builder.try_init();
}

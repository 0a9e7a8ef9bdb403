// src/log.rs
//
// Engine-wide logging macros. Each one emits a `tracing` event; binaries pick the
// sink by calling `init` once at startup. Library users that install their own
// subscriber never need to call it.

use tracing_subscriber::{EnvFilter, fmt};

#[doc(hidden)]
pub use tracing as __tracing;

/// Subscriber settings for `init`.
#[derive(Clone, Debug)]
pub struct LogOptions {
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: String,
    pub ansi: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self { default_filter: s!("wq_qotd=info"), ansi: true }
    }
}

impl LogOptions {
    /// 0 → info, 1 → debug, 2+ → trace.
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        Self { default_filter: format!("wq_qotd={level}"), ..Self::default() }
    }
}

/// Install the stderr subscriber. Returns false if one was already installed.
pub fn init(opts: &LogOptions) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&opts.default_filter));

    fmt()
        .with_env_filter(filter)
        .with_ansi(opts.ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::__tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!($($arg)*)
    };
}

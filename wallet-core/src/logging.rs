// wallet-core/src/logging.rs
//
// Optional tracing setup for binaries and tests embedding the wallet core.
// Derivation code only logs paths, networks and address types.

use tracing_subscriber::{fmt, EnvFilter};

/// Env var that switches output to JSON lines when set to `1`.
pub const LOG_JSON_ENV: &str = "HDWALLET_LOG_JSON";

/// Installs a global `fmt` subscriber writing to stderr.
///
/// Honours `RUST_LOG` (default `info`). Returns `false` when a subscriber was
/// already installed.
pub fn init_logging() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let use_json = std::env::var(LOG_JSON_ENV)
        .map(|value| value == "1")
        .unwrap_or(false);

    if use_json {
        fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging();
        // Second install must not panic
        assert!(!init_logging());
    }
}

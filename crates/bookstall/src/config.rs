//! # Configuration
//!
//! Everything configurable comes from the environment, with working
//! defaults. A value that fails to parse falls back to its default with a
//! warning; configuration can never abort the application.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `BOOKSTALL_ADDR` | socket address the API binds | `127.0.0.1:8080` |
//! | `BOOKSTALL_ORDER_TIMEOUT_SECS` | client-side order submission timeout | `10` |
//! | `BOOKSTALL_CART_DIR` | directory for file-backed cart storage | `.bookstall` |
//! | `RUST_LOG` | log filtering | unset |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP API binds.
    pub bind_addr: SocketAddr,
    /// Client-side bound on one order submission round trip.
    pub order_timeout: Duration,
    /// Directory used by the file-backed cart storage.
    pub cart_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: ([127, 0, 0, 1], 8080).into(),
            order_timeout: Duration::from_secs(10),
            cart_dir: PathBuf::from(".bookstall"),
        }
    }
}

impl Config {
    /// Read the environment, falling back per value on anything unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_addr = match std::env::var("BOOKSTALL_ADDR") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "BOOKSTALL_ADDR is not a socket address, using default");
                defaults.bind_addr
            }),
            Err(_) => defaults.bind_addr,
        };

        let order_timeout = match std::env::var("BOOKSTALL_ORDER_TIMEOUT_SECS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(value = %raw, "BOOKSTALL_ORDER_TIMEOUT_SECS is not a positive integer, using default");
                    defaults.order_timeout
                }
            },
            Err(_) => defaults.order_timeout,
        };

        let cart_dir = std::env::var("BOOKSTALL_CART_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.cart_dir);

        Self {
            bind_addr,
            order_timeout,
            cart_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.order_timeout, Duration::from_secs(10));
        assert_eq!(config.cart_dir, PathBuf::from(".bookstall"));
    }
}

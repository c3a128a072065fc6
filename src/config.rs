use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use anyhow::Context;

const DEFAULT_CONCURRENCY_LIMIT: usize = 100;
const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub concurrency_limit: usize,
    pub body_limit_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl AppConfig {
    /// Read settings from the environment. Numeric values that do not parse
    /// fall back to their defaults; an invalid host is an error.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = match env::var("APP_HOST") {
            Ok(host) => host
                .parse::<IpAddr>()
                .with_context(|| format!("APP_HOST '{host}' is not an IP address"))?,
            Err(_) => defaults.host,
        };
        let port = parse_var("APP_PORT").unwrap_or(defaults.port);
        let concurrency_limit =
            parse_var("APP_CONCURRENCY_LIMIT").unwrap_or(defaults.concurrency_limit);
        let body_limit_bytes =
            parse_var("APP_BODY_LIMIT_BYTES").unwrap_or(defaults.body_limit_bytes);

        Ok(Self {
            host,
            port,
            concurrency_limit,
            body_limit_bytes,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_localhost_3000() {
        let config = AppConfig::default();
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.concurrency_limit, 100);
        assert_eq!(config.body_limit_bytes, 1024 * 1024);
    }
}

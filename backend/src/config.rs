//! Application configuration.
//!
//! The data file location is resolved once at startup and injected into the
//! server state; nothing downstream looks at the working directory.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Data file used when none is configured.
pub const DEFAULT_DATA_FILE: &str = "data/housing_road_analysis.csv";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Seconds a shared cache may treat a successful response as fresh.
pub const CACHE_MAX_AGE_SECS: u32 = 300;

/// Seconds a stale response may be served while revalidating.
pub const STALE_WHILE_REVALIDATE_SECS: u32 = 300;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// CSV file behind the analysis endpoint.
    pub data_file: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// `Cache-Control` value for successful analysis responses.
pub fn cache_control_value() -> String {
    format!(
        "s-maxage={}, stale-while-revalidate={}",
        CACHE_MAX_AGE_SECS, STALE_WHILE_REVALIDATE_SECS
    )
}

//! Configuration for meteo
//!
//! Centralized configuration with sensible defaults, shared by the server
//! and client binaries.

/// Default server host the client connects to
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default TCP port for the weather service
pub const DEFAULT_PORT: u16 = 56700;

/// Main configuration for a meteo endpoint
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server host: the address the client connects to.
    /// The server always binds 0.0.0.0 and only uses `port`.
    pub host: String,

    /// TCP port
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The client-side connect address, `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The server-side bind address, `0.0.0.0:port`
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the TCP port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

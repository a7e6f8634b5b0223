//! Server configuration from environment variables
//!
//! - `PORT`: listen port (default 3000)
//! - `BIND_ADDR`: listen address (default 0.0.0.0)
//! - `MOUNT_ID`: element id the page mounts into (default `app`)
//!
//! Unparseable values fall back to the default with a warning.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::mount::MountPoint;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub mount: MountPoint,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            mount: MountPoint::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by `from_env` and tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid BIND_ADDR {:?}, using {}", raw, defaults.bind_addr);
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let mount = match lookup("MOUNT_ID") {
            Some(raw) => MountPoint::new(&raw).unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, defaults.mount.selector());
                defaults.mount.clone()
            }),
            None => defaults.mount.clone(),
        };

        Self { bind_addr, port, mount }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1"), ("MOUNT_ID", "#profile")]);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.mount.id(), "profile");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[("PORT", "eighty"), ("BIND_ADDR", "localhost:1"), ("MOUNT_ID", "my app")]);
        assert_eq!(config, ServerConfig::default());
    }
}

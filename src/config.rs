//! Listening address configuration.
//!
//! The only setting read from the environment is `PORT`; the host is fixed
//! to the loopback interface.

use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for PORT '{value}': {reason}")]
    InvalidPort { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Config::with_port(DEFAULT_PORT)
    }
}

impl Config {
    pub fn with_port(port: u16) -> Self {
        Config {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, port)),
        }
    }

    /// Reads `PORT`, falling back to [`DEFAULT_PORT`] when unset.
    ///
    /// `.env` must already have been loaded by the caller.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(env::var("PORT").ok().as_deref())
    }

    pub fn from_port_var(port: Option<&str>) -> Result<Self, ConfigError> {
        match port {
            None => Ok(Config::default()),
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map(Config::with_port)
                .map_err(|err| ConfigError::InvalidPort {
                    value: value.to_owned(),
                    reason: err.to_string(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_uses_default() {
        let config = Config::from_port_var(None).unwrap();
        assert_eq!(config.addr.port(), DEFAULT_PORT);
        assert!(config.addr.ip().is_loopback());
    }

    #[test]
    fn explicit_port_is_parsed() {
        let config = Config::from_port_var(Some("8080")).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_port_var(Some("70000")).unwrap_err();
        let ConfigError::InvalidPort { value, .. } = &err;
        assert_eq!(value, "70000");
        assert!(err.to_string().contains("PORT"));

        assert!(Config::from_port_var(Some("http")).is_err());
    }
}

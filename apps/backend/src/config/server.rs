use std::env;

use crate::error::AppError;

pub const HOST_VAR: &str = "BACKEND_HOST";
pub const PORT_VAR: &str = "BACKEND_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

/// Address the HTTP listener binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT_VAR) {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("{PORT_VAR} must be a valid port number, got '{raw}'"))
            })?,
        };
        Ok(Self { host, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3001);
    }

    #[test]
    fn reads_host_and_port() {
        let config = ServerConfig::from_lookup(|name| match name {
            "BACKEND_HOST" => Some("127.0.0.1".to_string()),
            "BACKEND_PORT" => Some("8080".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn invalid_port_is_config_error() {
        let err = ServerConfig::from_lookup(|name| {
            (name == "BACKEND_PORT").then(|| "70000".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("BACKEND_PORT"));
    }
}

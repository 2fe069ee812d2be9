use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Read `SERVER_HOST` and `PORT`, falling back to `0.0.0.0:3000`
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = match env::var("PORT") {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            _ => DEFAULT_PORT,
        };

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            server_port,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("PORT");
        env::remove_var("SERVER_HOST");
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_reads_port_and_host() {
        clear_env();
        env::set_var("PORT", "8081");
        env::set_var("SERVER_HOST", "127.0.0.1");
        let config = Config::from_env().unwrap();
        assert_eq!(config.server_addr(), "127.0.0.1:8081");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_port_uses_default() {
        clear_env();
        env::set_var("PORT", "");
        assert_eq!(Config::from_env().unwrap().server_port, 3000);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        env::set_var("PORT", "surf");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "surf"));
        clear_env();
    }
}

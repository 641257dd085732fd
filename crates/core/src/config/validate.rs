use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Library root is an absolute path
/// - Prober timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Library validation: containment checks are lexical, so the root must
    // be absolute to be comparable with resolved request paths.
    if !config.library.root.is_absolute() {
        return Err(ConfigError::ValidationError(format!(
            "library.root must be an absolute path, got {:?}",
            config.library.root
        )));
    }

    // Prober validation
    if config.prober.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "prober.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LibraryConfig, ServerConfig};
    use crate::probe::ProberConfig;
    use std::path::PathBuf;

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                host: "0.0.0.0".parse().unwrap(),
                port: 0,
            },
            library: LibraryConfig::default(),
            prober: ProberConfig::default(),
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_validate_relative_root_fails() {
        let config = Config {
            server: ServerConfig::default(),
            library: LibraryConfig {
                root: PathBuf::from("media"),
                codec_config: PathBuf::from("config.json"),
            },
            prober: ProberConfig::default(),
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let config = Config {
            server: ServerConfig::default(),
            library: LibraryConfig::default(),
            prober: ProberConfig::default().with_timeout(0),
        };
        assert!(validate_config(&config).is_err());
    }
}

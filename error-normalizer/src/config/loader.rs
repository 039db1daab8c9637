use crate::config::types::NormalizerConfig;
use crate::error::{NormalizerError, Result};
use std::path::Path;

/// File name looked up when no configuration path is given
pub const DEFAULT_CONFIG_FILE: &str = "errnorm.toml";

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<NormalizerConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<NormalizerConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a TOML file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<NormalizerConfig> {
        let content = std::fs::read_to_string(&path)
            .map_err(|_| NormalizerError::ConfigNotFound {
                path: path.as_ref().to_path_buf(),
            })?;

        let config: NormalizerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load and validate configuration, with the file path in error messages
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<NormalizerConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(NormalizerError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)
            .map_err(NormalizerError::Io)?;

        let config: NormalizerConfig = toml::from_str(&content)
            .map_err(|e| {
                NormalizerError::invalid_config(format!(
                    "Failed to parse TOML in {}: {}",
                    path_ref.display(),
                    e
                ))
            })?;

        crate::config::ConfigValidatorImpl::new().validate_with_context(&config, path_ref)?;

        Ok(config)
    }
}

// Convenience functions maintaining the API
impl NormalizerConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::NormalizerConfigBuilder {
        crate::config::builder::NormalizerConfigBuilder::new()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration and validate it
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }

    /// Load the file if it exists, otherwise use the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_with_validation(path)
        } else {
            Ok(Self::default())
        }
    }
}

pub mod types;
pub mod loader;
pub mod builder;
pub mod validator;
pub mod templates;

pub use types::{LimitsConfig, MessagesConfig, NormalizerConfig};
pub use loader::{ConfigLoader, DefaultConfigLoader, DEFAULT_CONFIG_FILE};
pub use builder::NormalizerConfigBuilder;
pub use validator::ConfigValidatorImpl;
pub use templates::{generate_default_config_template, ensure_config_file_exists};

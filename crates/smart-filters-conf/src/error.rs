use crate::env::EnvError;

/// Errors raised while loading settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error(transparent)]
	Env(#[from] EnvError),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Settings parsed but cannot be used
	#[error("Invalid settings: {0}")]
	Invalid(String),
}

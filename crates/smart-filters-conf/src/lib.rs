//! Settings for smart filters
//!
//! ## Loading
//!
//! ```
//! use smart_filters_conf::SmartFilterSettings;
//!
//! // From a settings file section
//! let settings = SmartFilterSettings::from_toml_str("[smart_filters]\ncookie_age = 7200").unwrap();
//! assert_eq!(settings.cookie_age, 7200);
//!
//! // In code
//! let settings = SmartFilterSettings::default().with_prefix("ORDERS_");
//! assert!(settings.validate().is_ok());
//! ```
//!
//! `SmartFilterSettings::from_env()` reads the same keys from
//! `SMART_FILTERS_*` environment variables.

pub mod env;
pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{DEFAULT_COOKIE_AGE, DEFAULT_PREFIX, ENV_PREFIX, MAX_COOKIE_AGE, SmartFilterSettings};

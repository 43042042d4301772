//! Smart filter settings
//!
//! Settings are loaded once (from the environment or a TOML document) and
//! handed to the change list controller when it is constructed.

use crate::env::Env;
use crate::error::ConfigError;
use serde::Deserialize;
use smart_filters_http::SameSite;
use std::time::Duration;

/// Default prefix for per-page filter cookies
pub const DEFAULT_PREFIX: &str = "SMARTFILTER_";

/// Default lifetime of a remembered filter, in seconds (4 hours)
pub const DEFAULT_COOKIE_AGE: u64 = 60 * 60 * 4;

/// Longest accepted cookie lifetime, in seconds (400 days, the browser cap)
pub const MAX_COOKIE_AGE: u64 = 400 * 24 * 60 * 60;

/// Prefix of the environment variables read by [`SmartFilterSettings::from_env`]
pub const ENV_PREFIX: &str = "SMART_FILTERS_";

/// Characters that may not appear in a cookie name
const COOKIE_NAME_SEPARATORS: &str = "()<>@,;:\\\"/[]?={} \t";

/// Cookie naming and lifetime for remembered filters
///
/// # Examples
///
/// ```
/// use smart_filters_conf::SmartFilterSettings;
///
/// let settings = SmartFilterSettings::default();
/// assert_eq!(settings.prefix, "SMARTFILTER_");
/// assert_eq!(settings.cookie_age, 14400);
/// assert_eq!(settings.cookie_path, "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmartFilterSettings {
	/// Prepended to the per-page hash to form the cookie name
	pub prefix: String,
	/// Max age of a remembered filter cookie, in seconds
	pub cookie_age: u64,
	pub cookie_path: String,
	pub cookie_secure: bool,
	pub cookie_http_only: bool,
	pub cookie_same_site: Option<SameSite>,
}

impl Default for SmartFilterSettings {
	fn default() -> Self {
		Self {
			prefix: DEFAULT_PREFIX.to_string(),
			cookie_age: DEFAULT_COOKIE_AGE,
			cookie_path: "/".to_string(),
			cookie_secure: false,
			cookie_http_only: false,
			cookie_same_site: None,
		}
	}
}

impl SmartFilterSettings {
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	pub fn with_cookie_age(mut self, seconds: u64) -> Self {
		self.cookie_age = seconds;
		self
	}

	pub fn with_cookie_path(mut self, path: impl Into<String>) -> Self {
		self.cookie_path = path.into();
		self
	}

	pub fn with_cookie_secure(mut self, secure: bool) -> Self {
		self.cookie_secure = secure;
		self
	}

	pub fn with_cookie_http_only(mut self, http_only: bool) -> Self {
		self.cookie_http_only = http_only;
		self
	}

	pub fn with_cookie_same_site(mut self, same_site: Option<SameSite>) -> Self {
		self.cookie_same_site = same_site;
		self
	}

	/// Cookie max age as a [`Duration`]
	pub fn cookie_max_age(&self) -> Duration {
		Duration::from_secs(self.cookie_age)
	}

	/// Load settings from `SMART_FILTERS_*` environment variables
	///
	/// Unset variables keep their defaults. Recognised variables:
	/// `PREFIX`, `COOKIE_AGE`, `COOKIE_PATH`, `COOKIE_SECURE`,
	/// `COOKIE_HTTP_ONLY`, `COOKIE_SAME_SITE`.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_env_with(&Env::new().with_prefix(ENV_PREFIX))
	}

	/// Load settings through the given environment reader
	pub fn from_env_with(env: &Env) -> Result<Self, ConfigError> {
		let mut settings = Self::default();

		if let Some(prefix) = env.str("PREFIX")? {
			settings.prefix = prefix;
		}
		if let Some(age) = env.u64("COOKIE_AGE")? {
			settings.cookie_age = age;
		}
		if let Some(path) = env.str("COOKIE_PATH")? {
			settings.cookie_path = path;
		}
		if let Some(secure) = env.bool("COOKIE_SECURE")? {
			settings.cookie_secure = secure;
		}
		if let Some(http_only) = env.bool("COOKIE_HTTP_ONLY")? {
			settings.cookie_http_only = http_only;
		}
		if let Some(same_site) = env.parsed("COOKIE_SAME_SITE", |v| v.trim().parse::<SameSite>())? {
			settings.cookie_same_site = Some(same_site);
		}

		settings.validate()?;
		tracing::debug!(prefix = %settings.prefix, cookie_age = settings.cookie_age, "loaded smart filter settings from environment");
		Ok(settings)
	}

	/// Load settings from a TOML document
	///
	/// Reads the `[smart_filters]` table when present, otherwise the whole
	/// document.
	///
	/// # Examples
	///
	/// ```
	/// use smart_filters_conf::SmartFilterSettings;
	///
	/// let settings = SmartFilterSettings::from_toml_str(r#"
	///     [smart_filters]
	///     prefix = "LISTFILTER_"
	///     cookie_age = 600
	/// "#).unwrap();
	///
	/// assert_eq!(settings.prefix, "LISTFILTER_");
	/// assert_eq!(settings.cookie_age, 600);
	/// assert_eq!(settings.cookie_path, "/");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let mut document: toml::Table = toml::from_str(source)?;
		let section = match document.remove("smart_filters") {
			Some(toml::Value::Table(table)) => table,
			Some(_) => {
				return Err(ConfigError::Invalid(
					"'smart_filters' must be a table".to_string(),
				));
			}
			None => document,
		};

		let settings: Self = toml::Value::Table(section).try_into()?;
		settings.validate()?;
		Ok(settings)
	}

	/// Check that the settings can produce valid cookies
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.prefix.is_empty() {
			return Err(ConfigError::Invalid("prefix must not be empty".to_string()));
		}
		if let Some(c) = self
			.prefix
			.chars()
			.find(|c| !c.is_ascii_graphic() || COOKIE_NAME_SEPARATORS.contains(*c))
		{
			return Err(ConfigError::Invalid(format!(
				"prefix contains '{}', which is not allowed in a cookie name",
				c.escape_default()
			)));
		}
		if self.cookie_age == 0 || self.cookie_age > MAX_COOKIE_AGE {
			return Err(ConfigError::Invalid(format!(
				"cookie_age must be between 1 and {} seconds, got {}",
				MAX_COOKIE_AGE, self.cookie_age
			)));
		}
		if !self.cookie_path.starts_with('/') || self.cookie_path.contains(';') {
			return Err(ConfigError::Invalid(format!(
				"cookie_path '{}' must start with '/' and not contain ';'",
				self.cookie_path
			)));
		}
		if self.cookie_same_site == Some(SameSite::None) && !self.cookie_secure {
			return Err(ConfigError::Invalid(
				"cookie_same_site = None requires cookie_secure".to_string(),
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_default_is_valid() {
		SmartFilterSettings::default().validate().unwrap();
	}

	#[test]
	fn test_cookie_max_age() {
		let settings = SmartFilterSettings::default().with_cookie_age(90);
		assert_eq!(settings.cookie_max_age(), Duration::from_secs(90));
	}

	#[rstest]
	#[case(SmartFilterSettings::default().with_prefix(""))]
	#[case(SmartFilterSettings::default().with_prefix("MY FILTER_"))]
	#[case(SmartFilterSettings::default().with_prefix("FILTER;"))]
	#[case(SmartFilterSettings::default().with_prefix("FILTRÉ_"))]
	#[case(SmartFilterSettings::default().with_cookie_age(0))]
	#[case(SmartFilterSettings::default().with_cookie_age(MAX_COOKIE_AGE + 1))]
	#[case(SmartFilterSettings::default().with_cookie_age(u64::MAX))]
	#[case(SmartFilterSettings::default().with_cookie_path("admin"))]
	#[case(SmartFilterSettings::default().with_cookie_same_site(Some(SameSite::None)))]
	fn test_invalid_settings(#[case] settings: SmartFilterSettings) {
		assert!(matches!(settings.validate(), Err(ConfigError::Invalid(_))));
	}

	#[test]
	fn test_max_cookie_age_is_valid() {
		SmartFilterSettings::default()
			.with_cookie_age(MAX_COOKIE_AGE)
			.validate()
			.unwrap();
	}

	#[test]
	fn test_same_site_none_with_secure_is_valid() {
		SmartFilterSettings::default()
			.with_cookie_secure(true)
			.with_cookie_same_site(Some(SameSite::None))
			.validate()
			.unwrap();
	}

	#[test]
	fn test_toml_bare_table() {
		let settings = SmartFilterSettings::from_toml_str(
			r#"
			cookie_age = 3600
			cookie_http_only = true
			cookie_same_site = "Strict"
			"#,
		)
		.unwrap();

		assert_eq!(settings.prefix, DEFAULT_PREFIX);
		assert_eq!(settings.cookie_age, 3600);
		assert!(settings.cookie_http_only);
		assert_eq!(settings.cookie_same_site, Some(SameSite::Strict));
	}

	#[rstest]
	#[case("lax", SameSite::Lax)]
	#[case("STRICT", SameSite::Strict)]
	fn test_toml_same_site_ignores_case(#[case] value: &str, #[case] expected: SameSite) {
		let source = format!("cookie_same_site = \"{}\"", value);
		let settings = SmartFilterSettings::from_toml_str(&source).unwrap();
		assert_eq!(settings.cookie_same_site, Some(expected));
	}

	#[test]
	fn test_toml_rejects_huge_cookie_age() {
		let result = SmartFilterSettings::from_toml_str("cookie_age = 1000000000000");
		assert!(matches!(result, Err(ConfigError::Invalid(_))));
	}

	#[test]
	fn test_toml_unknown_key_rejected() {
		let result = SmartFilterSettings::from_toml_str("cookie_ttl = 5");
		assert!(matches!(result, Err(ConfigError::Toml(_))));
	}

	#[test]
	fn test_toml_section_must_be_table() {
		let result = SmartFilterSettings::from_toml_str("smart_filters = 3");
		assert!(matches!(result, Err(ConfigError::Invalid(_))));
	}

	#[test]
	fn test_toml_values_are_validated() {
		let result = SmartFilterSettings::from_toml_str("[smart_filters]\ncookie_age = 0");
		assert!(matches!(result, Err(ConfigError::Invalid(_))));
	}
}

//! Environment variable handling
//!
//! Reads prefixed environment variables with typed parsing. A variable that
//! is not set is not an error; one that is set but cannot be parsed is.

use std::env;

/// Environment variable reader with prefix support
#[derive(Debug, Clone, Default)]
pub struct Env {
	/// Optional prefix for environment variables (e.g., "SMART_FILTERS_")
	pub prefix: Option<String>,
}

impl Env {
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Set a prefix for all environment variable lookups
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Get the full key name with prefix
	pub fn key_name(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	/// Read a string value, `None` when unset
	pub fn str(&self, key: &str) -> Result<Option<String>, EnvError> {
		let full_key = self.key_name(key);
		validate_env_var_name(&full_key)?;

		match env::var(&full_key) {
			Ok(val) => Ok(Some(val)),
			Err(env::VarError::NotPresent) => Ok(None),
			Err(env::VarError::NotUnicode(_)) => Err(EnvError::ParseError {
				key: full_key,
				value_len: 0,
				error: "value is not valid unicode".to_string(),
			}),
		}
	}

	/// Read a boolean value, `None` when unset
	pub fn bool(&self, key: &str) -> Result<Option<bool>, EnvError> {
		self.parsed(key, parse_bool)
	}

	/// Read an unsigned integer value, `None` when unset
	pub fn u64(&self, key: &str) -> Result<Option<u64>, EnvError> {
		self.parsed(key, |val| val.trim().parse::<u64>().map_err(|e| e.to_string()))
	}

	/// Read a value and parse it with `parse`, `None` when unset
	pub fn parsed<T, F>(&self, key: &str, parse: F) -> Result<Option<T>, EnvError>
	where
		F: FnOnce(&str) -> Result<T, String>,
	{
		let Some(val) = self.str(key)? else {
			return Ok(None);
		};
		parse(&val).map(Some).map_err(|error| EnvError::ParseError {
			key: self.key_name(key),
			value_len: val.len(),
			error,
		})
	}
}

/// Parse a boolean the way settings files usually spell them
///
/// # Examples
///
/// ```
/// use smart_filters_conf::env::parse_bool;
///
/// assert_eq!(parse_bool("Yes"), Ok(true));
/// assert_eq!(parse_bool("off"), Ok(false));
/// assert!(parse_bool("maybe").is_err());
/// ```
pub fn parse_bool(value: &str) -> Result<bool, String> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" => Ok(false),
		other => Err(format!("'{}' is not a boolean", other)),
	}
}

/// Validates an environment variable name.
///
/// Rejects names that are empty, contain control characters, or contain
/// the `=` character (which is used as the key-value separator).
pub fn validate_env_var_name(name: &str) -> Result<(), EnvError> {
	if name.is_empty() {
		return Err(EnvError::InvalidVariableName {
			name: name.to_string(),
			reason: "environment variable name must not be empty".to_string(),
		});
	}

	if let Some(pos) = name.find(|c: char| c.is_control()) {
		return Err(EnvError::InvalidVariableName {
			name: name.to_string(),
			reason: format!(
				"environment variable name contains control character at position {}",
				pos
			),
		});
	}

	if name.contains('=') {
		return Err(EnvError::InvalidVariableName {
			name: name.to_string(),
			reason: "environment variable name must not contain '='".to_string(),
		});
	}

	Ok(())
}

/// Environment variable errors
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
	#[error("Failed to parse environment variable '{key}' (value length: {value_len}): {error}")]
	ParseError {
		key: String,
		/// Length of the original value, the value itself is not echoed
		value_len: usize,
		error: String,
	},

	#[error("Invalid environment variable name '{name}': {reason}")]
	InvalidVariableName { name: String, reason: String },
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;

	#[rstest]
	#[case("true", true)]
	#[case("TRUE", true)]
	#[case("1", true)]
	#[case(" on ", true)]
	#[case("false", false)]
	#[case("No", false)]
	#[case("0", false)]
	fn test_parse_bool(#[case] input: &str, #[case] expected: bool) {
		assert_eq!(parse_bool(input), Ok(expected));
	}

	#[test]
	fn test_key_name_with_prefix() {
		let env = Env::new().with_prefix("SMART_FILTERS_");
		assert_eq!(env.key_name("PREFIX"), "SMART_FILTERS_PREFIX");
		assert_eq!(Env::new().key_name("PREFIX"), "PREFIX");
	}

	#[rstest]
	#[case("")]
	#[case("BAD=NAME")]
	#[case("BAD\nNAME")]
	fn test_invalid_names_rejected(#[case] name: &str) {
		assert!(matches!(
			validate_env_var_name(name),
			Err(EnvError::InvalidVariableName { .. })
		));
	}

	#[test]
	#[serial(smart_filters_env)]
	fn test_unset_variable_is_none() {
		let env = Env::new().with_prefix("SMART_FILTERS_ENV_TEST_");
		assert_eq!(env.str("UNSET").unwrap(), None);
		assert_eq!(env.u64("UNSET").unwrap(), None);
	}

	#[test]
	#[serial(smart_filters_env)]
	fn test_parse_error_hides_value() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("SMART_FILTERS_ENV_TEST_AGE", "four hours");
		}
		let env = Env::new().with_prefix("SMART_FILTERS_ENV_TEST_");
		let err = env.u64("AGE").unwrap_err();
		// SAFETY: see above
		unsafe {
			env::remove_var("SMART_FILTERS_ENV_TEST_AGE");
		}

		let message = err.to_string();
		assert!(message.contains("SMART_FILTERS_ENV_TEST_AGE"));
		assert!(message.contains("value length: 10"));
		assert!(!message.contains("four hours"));
	}
}

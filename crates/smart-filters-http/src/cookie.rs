//! Set-Cookie construction
//!
//! Cookie values are written as given. Callers that store arbitrary text in a
//! cookie encode it first (see [`encode_cookie_value`]).

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime};

/// First instant an HTTP date cannot express (year 10000)
const HTTP_DATE_LIMIT: Duration = Duration::from_secs(253_402_300_800);

/// Characters escaped in cookie values: everything but unreserved URL characters
const COOKIE_VALUE: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'.')
	.remove(b'_')
	.remove(b'~');

/// Percent-encode text for storage in a cookie value
///
/// # Examples
///
/// ```
/// use smart_filters_http::cookie::encode_cookie_value;
///
/// assert_eq!(encode_cookie_value("status__exact=active"), "status__exact%3Dactive");
/// ```
pub fn encode_cookie_value(value: &str) -> String {
	utf8_percent_encode(value, COOKIE_VALUE).to_string()
}

/// Reverse [`encode_cookie_value`]
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn decode_cookie_value(value: &str) -> String {
	percent_decode_str(value).decode_utf8_lossy().into_owned()
}

/// SameSite cookie attribute
///
/// Parsing is case-insensitive, both through [`FromStr`] and when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum SameSite {
	Strict,
	Lax,
	None,
}

impl fmt::Display for SameSite {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let value = match self {
			SameSite::Strict => "Strict",
			SameSite::Lax => "Lax",
			SameSite::None => "None",
		};
		f.write_str(value)
	}
}

impl FromStr for SameSite {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"strict" => Ok(SameSite::Strict),
			"lax" => Ok(SameSite::Lax),
			"none" => Ok(SameSite::None),
			other => Err(format!("invalid SameSite value '{}'", other)),
		}
	}
}

impl TryFrom<String> for SameSite {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// A cookie to be sent in a `Set-Cookie` header
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use smart_filters_http::SetCookie;
///
/// let cookie = SetCookie::new("SMARTFILTER_abc", "ALL");
/// assert_eq!(cookie.to_header_value(), "SMARTFILTER_abc=ALL; Path=/");
///
/// let cookie = SetCookie::new("pref", "1").with_max_age(Duration::from_secs(60));
/// assert!(cookie.to_header_value().contains("Max-Age=60"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
	pub name: String,
	pub value: String,
	/// `None` makes this a session cookie
	pub max_age: Option<Duration>,
	pub path: String,
	pub domain: Option<String>,
	pub secure: bool,
	pub http_only: bool,
	pub same_site: Option<SameSite>,
}

impl SetCookie {
	/// Create a session cookie scoped to `/`
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			max_age: None,
			path: "/".to_string(),
			domain: None,
			secure: false,
			http_only: false,
			same_site: None,
		}
	}

	pub fn with_max_age(mut self, max_age: Duration) -> Self {
		self.max_age = Some(max_age);
		self
	}

	pub fn with_path(mut self, path: impl Into<String>) -> Self {
		self.path = path.into();
		self
	}

	pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
		self.domain = Some(domain.into());
		self
	}

	pub fn with_secure(mut self, secure: bool) -> Self {
		self.secure = secure;
		self
	}

	pub fn with_http_only(mut self, http_only: bool) -> Self {
		self.http_only = http_only;
		self
	}

	pub fn with_same_site(mut self, same_site: Option<SameSite>) -> Self {
		self.same_site = same_site;
		self
	}

	/// Build the `Set-Cookie` header value
	///
	/// Persistent cookies carry both `Expires` and `Max-Age`.
	pub fn to_header_value(&self) -> String {
		let mut parts = vec![format!("{}={}", self.name, self.value)];

		if let Some(max_age) = self.max_age {
			if let Some(expires) = expiry_date(max_age) {
				parts.push(format!("Expires={}", httpdate::fmt_http_date(expires)));
			}
			parts.push(format!("Max-Age={}", max_age.as_secs()));
		}

		parts.push(format!("Path={}", self.path));

		if let Some(domain) = &self.domain {
			parts.push(format!("Domain={}", domain));
		}

		if self.secure {
			parts.push("Secure".to_string());
		}

		if self.http_only {
			parts.push("HttpOnly".to_string());
		}

		if let Some(same_site) = self.same_site {
			parts.push(format!("SameSite={}", same_site));
		}

		parts.join("; ")
	}
}

/// `Expires` instant for a cookie living `max_age` from now
///
/// `None` when the instant overflows or lies beyond what an HTTP date can
/// express; `Max-Age` alone then carries the lifetime.
fn expiry_date(max_age: Duration) -> Option<SystemTime> {
	let expires = SystemTime::now().checked_add(max_age)?;
	let since_epoch = expires.duration_since(SystemTime::UNIX_EPOCH).ok()?;
	(since_epoch < HTTP_DATE_LIMIT).then_some(expires)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_session_cookie_has_no_expiry() {
		let header = SetCookie::new("k", "v").to_header_value();
		assert_eq!(header, "k=v; Path=/");
		assert!(!header.contains("Max-Age"));
		assert!(!header.contains("Expires"));
	}

	#[test]
	fn test_persistent_cookie_attributes() {
		let header = SetCookie::new("k", "v")
			.with_max_age(Duration::from_secs(14400))
			.with_path("/admin/")
			.with_domain("example.com")
			.with_secure(true)
			.with_http_only(true)
			.with_same_site(Some(SameSite::Lax))
			.to_header_value();

		assert!(header.starts_with("k=v; Expires="));
		assert!(header.contains("; Max-Age=14400; Path=/admin/; Domain=example.com"));
		assert!(header.ends_with("; Secure; HttpOnly; SameSite=Lax"));
	}

	#[rstest]
	#[case("strict", SameSite::Strict)]
	#[case("Lax", SameSite::Lax)]
	#[case("NONE", SameSite::None)]
	fn test_same_site_from_str(#[case] input: &str, #[case] expected: SameSite) {
		assert_eq!(input.parse::<SameSite>().unwrap(), expected);
	}

	#[rstest]
	#[case(Duration::from_secs(1_000_000_000_000))]
	#[case(Duration::from_secs(u64::MAX))]
	fn test_out_of_range_max_age_omits_expires(#[case] max_age: Duration) {
		let header = SetCookie::new("k", "v").with_max_age(max_age).to_header_value();

		assert_eq!(
			header,
			format!("k=v; Max-Age={}; Path=/", max_age.as_secs())
		);
	}

	#[rstest]
	#[case("\"strict\"", SameSite::Strict)]
	#[case("\"lax\"", SameSite::Lax)]
	#[case("\"None\"", SameSite::None)]
	fn test_same_site_deserialize_ignores_case(#[case] json: &str, #[case] expected: SameSite) {
		assert_eq!(serde_json::from_str::<SameSite>(json).unwrap(), expected);
	}

	#[test]
	fn test_same_site_rejects_unknown() {
		assert!(serde_json::from_str::<SameSite>("\"sometimes\"").is_err());
		assert!("sometimes".parse::<SameSite>().is_err());
	}

	#[rstest]
	#[case("ALL", "ALL")]
	#[case("status__exact=active", "status__exact%3Dactive")]
	#[case("a=1&b=two+words", "a%3D1%26b%3Dtwo%2Bwords")]
	#[case("name=caf%C3%A9", "name%3Dcaf%25C3%25A9")]
	fn test_cookie_value_codec(#[case] raw: &str, #[case] encoded: &str) {
		assert_eq!(encode_cookie_value(raw), encoded);
		assert_eq!(decode_cookie_value(encoded), raw);
	}
}

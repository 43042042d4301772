//! Querystring parsing and encoding
//!
//! Parsing follows `application/x-www-form-urlencoded` rules (`+` is a space,
//! percent escapes are decoded). Malformed input never fails: escapes that do
//! not form valid UTF-8 decode to the replacement character.

use crate::{Error, Result};

/// Parse a raw querystring into ordered key/value pairs
///
/// Keys without `=` get an empty value. Empty segments are dropped.
///
/// # Examples
///
/// ```
/// use smart_filters_http::querystring::parse;
///
/// let pairs = parse("status__exact=active&q=two+words&clear");
/// assert_eq!(
///     pairs,
///     vec![
///         ("status__exact".to_string(), "active".to_string()),
///         ("q".to_string(), "two words".to_string()),
///         ("clear".to_string(), String::new()),
///     ]
/// );
/// ```
pub fn parse(query: &str) -> Vec<(String, String)> {
	// Invalid UTF-8 is replaced while decoding, not rejected
	serde_urlencoded::from_str::<Vec<(String, String)>>(query).unwrap_or_else(|e| {
		tracing::debug!(error = %e, "querystring could not be decoded");
		Vec::new()
	})
}

/// Encode key/value pairs as a querystring, preserving their order
///
/// # Examples
///
/// ```
/// use smart_filters_http::querystring::encode;
///
/// let pairs = vec![
///     ("status__exact".to_string(), "active".to_string()),
///     ("owner__exact".to_string(), "Jane Doe".to_string()),
/// ];
/// assert_eq!(
///     encode(&pairs).unwrap(),
///     "status__exact=active&owner__exact=Jane+Doe"
/// );
/// ```
pub fn encode(pairs: &[(String, String)]) -> Result<String> {
	serde_urlencoded::to_string(pairs).map_err(|e| Error::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", vec![])]
	#[case("a=1", vec![("a", "1")])]
	#[case("a=1&&b=2", vec![("a", "1"), ("b", "2")])]
	#[case("token=abc==", vec![("token", "abc==")])]
	#[case("name=%E6%97%A5%E6%9C%AC", vec![("name", "日本")])]
	fn test_parse(#[case] input: &str, #[case] expected: Vec<(&str, &str)>) {
		let expected: Vec<(String, String)> = expected
			.into_iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		assert_eq!(parse(input), expected);
	}

	#[test]
	fn test_parse_replaces_invalid_utf8() {
		let pairs = parse("name=%FF&ok=1&bad%FEkey=x");
		assert_eq!(pairs.len(), 3);
		assert_eq!(pairs[0].0, "name");
		assert_eq!(pairs[0].1, "\u{FFFD}");
		assert_eq!(pairs[1], ("ok".to_string(), "1".to_string()));
		assert_eq!(pairs[2], ("bad\u{FFFD}key".to_string(), "x".to_string()));
	}

	#[test]
	fn test_encode_escapes_reserved_characters() {
		let pairs = vec![("q".to_string(), "a&b=c".to_string())];
		assert_eq!(encode(&pairs).unwrap(), "q=a%26b%3Dc");
	}

	#[test]
	fn test_encode_empty() {
		assert_eq!(encode(&[]).unwrap(), "");
	}
}

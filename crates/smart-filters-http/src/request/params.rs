use super::Request;
use crate::cookie::decode_cookie_value;
use hyper::Uri;
use indexmap::IndexMap;

impl Request {
	/// Parse query parameters from URI
	pub(super) fn parse_query_params(uri: &Uri) -> IndexMap<String, String> {
		uri.query().map(Self::parse_query).unwrap_or_default()
	}

	/// Get the request path
	///
	/// # Examples
	///
	/// ```
	/// use smart_filters_http::Request;
	///
	/// let request = Request::builder()
	///     .uri("/admin/shop/product/?page=2")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.path(), "/admin/shop/product/");
	/// ```
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Get the raw, undecoded querystring
	///
	/// Empty when the URI has no `?` or nothing after it.
	pub fn query_string(&self) -> &str {
		self.uri.query().unwrap_or("")
	}

	/// Get the decoded query parameters in the order they first appeared
	///
	/// When a key repeats, the last value is kept.
	///
	/// # Examples
	///
	/// ```
	/// use smart_filters_http::Request;
	///
	/// let request = Request::builder()
	///     .uri("/list/?owner__exact=Jane%20Doe&status__exact=open")
	///     .build()
	///     .unwrap();
	///
	/// let params = request.query_params();
	/// assert_eq!(params.get("owner__exact"), Some(&"Jane Doe".to_string()));
	/// assert_eq!(params.get_index(1).unwrap().0, "status__exact");
	/// ```
	pub fn query_params(&self) -> &IndexMap<String, String> {
		&self.query_params
	}

	/// Check whether a query parameter is present, whatever its value
	pub fn has_query_param(&self, key: &str) -> bool {
		self.query_params.contains_key(key)
	}

	/// Get a cookie sent by the client
	///
	/// The value is percent-decoded and unquoted. When the client sends the
	/// same name more than once, the first occurrence wins.
	///
	/// # Examples
	///
	/// ```
	/// use smart_filters_http::Request;
	///
	/// let request = Request::builder()
	///     .uri("/admin/")
	///     .header("cookie", "sessionid=abc; SMARTFILTER_1=status__exact%3Dopen")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(
	///     request.cookie("SMARTFILTER_1").as_deref(),
	///     Some("status__exact=open")
	/// );
	/// assert!(request.cookie("missing").is_none());
	/// ```
	pub fn cookie(&self, name: &str) -> Option<String> {
		self.cookies().shift_remove(name)
	}

	/// Get all cookies sent by the client
	pub fn cookies(&self) -> IndexMap<String, String> {
		let mut cookies = IndexMap::new();
		for header in self.headers.get_all(hyper::header::COOKIE) {
			let Ok(cookie_str) = header.to_str() else {
				continue;
			};
			for cookie in cookie_str.split(';') {
				let parts: Vec<&str> = cookie.trim().splitn(2, '=').collect();
				if parts.len() == 2 && !parts[0].is_empty() {
					cookies
						.entry(parts[0].to_string())
						.or_insert_with(|| decode_cookie_value(unquote(parts[1])));
				}
			}
		}
		cookies
	}
}

fn unquote(value: &str) -> &str {
	value
		.strip_prefix('"')
		.and_then(|v| v.strip_suffix('"'))
		.unwrap_or(value)
}

use crate::{Error, Result, querystring};
use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Uri, Version};
use indexmap::IndexMap;

mod params;

/// HTTP Request representation
///
/// Query parameters are decoded once, when the request is built.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	query_params: IndexMap<String, String>,
}

impl Request {
	/// Start building a request
	///
	/// # Examples
	///
	/// ```
	/// use smart_filters_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/admin/orders/order/?status__exact=open")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.path(), "/admin/orders/order/");
	/// assert_eq!(request.query_string(), "status__exact=open");
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	fn from_parts(
		method: Method,
		uri: Uri,
		version: Version,
		headers: HeaderMap,
		body: Bytes,
	) -> Self {
		let query_params = Self::parse_query_params(&uri);
		Self {
			method,
			uri,
			version,
			headers,
			body,
			query_params,
		}
	}
}

/// Builder for [`Request`]
#[derive(Debug, Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<String>,
	version: Option<Version>,
	headers: HeaderMap,
	body: Bytes,
	error: Option<Error>,
}

impl RequestBuilder {
	/// Set the HTTP method (defaults to GET)
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	/// Set the request URI (path and optional querystring)
	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	/// Set the HTTP version (defaults to HTTP/1.1)
	pub fn version(mut self, version: Version) -> Self {
		self.version = Some(version);
		self
	}

	/// Replace all headers
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	/// Append a single header
	///
	/// An invalid name or value is reported by [`RequestBuilder::build`].
	pub fn header(mut self, name: &str, value: &str) -> Self {
		let parsed = HeaderName::from_bytes(name.as_bytes())
			.map_err(|e| Error::Http(format!("invalid header name '{}': {}", name, e)))
			.and_then(|name| {
				HeaderValue::from_str(value)
					.map(|value| (name, value))
					.map_err(|e| Error::Http(format!("invalid header value: {}", e)))
			});
		match parsed {
			Ok((name, value)) => {
				self.headers.append(name, value);
			}
			Err(e) => {
				self.error.get_or_insert(e);
			}
		}
		self
	}

	/// Append a cookie to the `Cookie` header
	///
	/// # Examples
	///
	/// ```
	/// use smart_filters_http::Request;
	///
	/// let request = Request::builder()
	///     .uri("/admin/")
	///     .cookie("theme", "dark")
	///     .cookie("lang", "en")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.cookie("lang").as_deref(), Some("en"));
	/// ```
	pub fn cookie(self, name: &str, value: &str) -> Self {
		let pair = format!("{}={}", name, value);
		self.header(hyper::header::COOKIE.as_str(), &pair)
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Build the request
	///
	/// Fails when the URI or a header given to [`RequestBuilder::header`] is invalid.
	pub fn build(self) -> Result<Request> {
		if let Some(e) = self.error {
			return Err(e);
		}
		let raw_uri = self.uri.unwrap_or_else(|| "/".to_string());
		let uri = raw_uri
			.parse::<Uri>()
			.map_err(|e| Error::Http(format!("invalid URI '{}': {}", raw_uri, e)))?;
		Ok(Request::from_parts(
			self.method.unwrap_or(Method::GET),
			uri,
			self.version.unwrap_or(Version::HTTP_11),
			self.headers,
			self.body,
		))
	}
}

impl Request {
	pub(crate) fn parse_query(raw: &str) -> IndexMap<String, String> {
		let mut params = IndexMap::new();
		for (key, value) in querystring::parse(raw) {
			// Last value wins, first position is kept
			params.insert(key, value);
		}
		params
	}
}

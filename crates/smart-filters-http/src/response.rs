use crate::{Error, Result, SetCookie};
use bytes::Bytes;
use hyper::header::{self, HeaderValue};
use hyper::{HeaderMap, StatusCode};

/// HTTP Response representation
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use smart_filters_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Create a Response with HTTP 200 OK status
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a Response with HTTP 404 Not Found status
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// Create a Response with HTTP 500 Internal Server Error status
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Create a Response with HTTP 302 Found (temporary redirect)
	///
	/// # Examples
	///
	/// ```
	/// use smart_filters_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::temporary_redirect("/admin/orders/order/?status__exact=open");
	/// assert_eq!(response.status, StatusCode::FOUND);
	/// assert_eq!(
	///     response.headers.get("location").unwrap().to_str().unwrap(),
	///     "/admin/orders/order/?status__exact=open"
	/// );
	/// ```
	pub fn temporary_redirect(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::FOUND).with_location(location.as_ref())
	}

	/// Set the response body
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Set an HTML body with the matching Content-Type
	pub fn with_html(mut self, html: impl Into<String>) -> Self {
		self.body = Bytes::from(html.into());
		self.headers.insert(
			header::CONTENT_TYPE,
			HeaderValue::from_static("text/html; charset=utf-8"),
		);
		self
	}

	/// Add a custom header to the response
	///
	/// Invalid names or values are skipped.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = header::HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}

	/// Add a Location header to the response
	pub fn with_location(mut self, location: &str) -> Self {
		if let Ok(value) = HeaderValue::from_str(location) {
			self.headers.insert(header::LOCATION, value);
		}
		self
	}

	/// Append a `Set-Cookie` header
	///
	/// Earlier cookies are kept, so one response can set several.
	///
	/// # Examples
	///
	/// ```
	/// use smart_filters_http::{Response, SetCookie};
	///
	/// let mut response = Response::ok();
	/// response.set_cookie(&SetCookie::new("a", "1")).unwrap();
	/// response.set_cookie(&SetCookie::new("b", "2")).unwrap();
	/// assert_eq!(response.set_cookies(), vec!["a=1; Path=/", "b=2; Path=/"]);
	/// ```
	pub fn set_cookie(&mut self, cookie: &SetCookie) -> Result<()> {
		let value = HeaderValue::from_str(&cookie.to_header_value()).map_err(|e| {
			Error::Internal(format!(
				"Failed to create cookie header for '{}': {}",
				cookie.name, e
			))
		})?;
		self.headers.append(header::SET_COOKIE, value);
		Ok(())
	}

	/// All `Set-Cookie` header values, in insertion order
	pub fn set_cookies(&self) -> Vec<&str> {
		self.headers
			.get_all(header::SET_COOKIE)
			.iter()
			.filter_map(|v| v.to_str().ok())
			.collect()
	}

	/// Value of the `Location` header, if any
	pub fn location(&self) -> Option<&str> {
		self.headers
			.get(header::LOCATION)
			.and_then(|v| v.to_str().ok())
	}

	/// Check if the response is a redirect (3xx)
	pub fn is_redirect(&self) -> bool {
		self.status.is_redirection()
	}
}

impl From<Error> for Response {
	fn from(error: Error) -> Self {
		let status =
			StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		let body = serde_json::json!({
			"error": error.to_string(),
		});

		match serde_json::to_vec(&body) {
			Ok(json) => Response::new(status)
				.with_body(json)
				.with_header("content-type", "application/json"),
			Err(_) => Response::internal_server_error(),
		}
	}
}

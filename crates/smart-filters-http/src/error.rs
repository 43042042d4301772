//! Error type shared by the smart-filters crates

/// Errors raised while handling a request
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The request could not be interpreted (bad URI, bad header)
	#[error("HTTP error: {0}")]
	Http(String),

	#[error("Serialization error: {0}")]
	Serialization(String),

	/// Rendering the change list template failed
	#[error("Template error: {0}")]
	Template(String),

	#[error("Internal server error: {0}")]
	Internal(String),
}

impl Error {
	/// HTTP status code this error maps to
	///
	/// # Examples
	///
	/// ```
	/// use smart_filters_http::Error;
	///
	/// assert_eq!(Error::Http("bad uri".into()).status_code(), 400);
	/// assert_eq!(Error::Template("missing block".into()).status_code(), 500);
	/// ```
	pub fn status_code(&self) -> u16 {
		match self {
			Error::Http(_) => 400,
			Error::Serialization(_) | Error::Template(_) | Error::Internal(_) => 500,
		}
	}
}

/// Result alias used across request handling
pub type Result<T> = std::result::Result<T, Error>;

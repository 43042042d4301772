//! HTTP primitives.
//!
//! Request and response types, cookies and querystring helpers used by the
//! change list controller.
//!
//! # Examples
//!
//! ```rust
//! use smart_filters::http::{Request, Response, SetCookie};
//!
//! let request = Request::builder().uri("/admin/shop/order/?o=1").build().unwrap();
//! assert_eq!(request.query_string(), "o=1");
//!
//! let mut response = Response::ok();
//! response.set_cookie(&SetCookie::new("seen", "1")).unwrap();
//! assert_eq!(response.set_cookies(), vec!["seen=1; Path=/"]);
//! ```

pub use smart_filters_http::*;

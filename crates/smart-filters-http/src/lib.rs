//! HTTP primitives for smart-filters
//!
//! The request and response types here carry exactly what a change list
//! controller needs: the request path, decoded query parameters, cookies,
//! redirects and `Set-Cookie` headers.
//!
//! ## Example
//!
//! ```
//! use smart_filters_http::{Request, Response, SetCookie};
//!
//! let request = Request::builder()
//!     .uri("/admin/orders/order/?status__exact=open")
//!     .build()
//!     .unwrap();
//! assert_eq!(request.query_params().get("status__exact").unwrap(), "open");
//!
//! let mut response = Response::ok();
//! response.set_cookie(&SetCookie::new("SMARTFILTER_x", "ALL")).unwrap();
//! assert_eq!(response.set_cookies().len(), 1);
//! ```

pub mod cookie;
pub mod error;
pub mod handler;
pub mod querystring;
pub mod request;
pub mod response;

pub use cookie::{SameSite, SetCookie};
pub use error::{Error, Result};
pub use handler::Handler;
pub use request::{Request, RequestBuilder};
pub use response::Response;

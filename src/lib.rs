//! # Smart Filters
//!
//! Cookie-backed filter memory for admin change list pages.
//!
//! An admin list page filtered with `?status__exact=open` is remembered per
//! page path. Coming back to the bare page redirects to the remembered
//! filters, `?clear=1` forgets them, and the list view receives a readable
//! summary such as `"Status: Open"` while filters are active.
//!
//! ## Feature Flags
//!
//! - `minimal` - Request/response primitives only
//! - `conf` - Settings loading from environment variables and TOML
//! - `admin` - The change list controller (implies `conf`)
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use smart_filters::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let model = ModelMeta::new("Order").with_field(
//!     FieldMeta::new("status", FieldType::Char).with_choices([("open", "Open")]),
//! );
//! let view = SmartFilterView::new(
//!     TemplateChangeList::new(model)?,
//!     SmartFilterSettings::default(),
//! );
//!
//! let key = view.cookie_key("/admin/shop/order/");
//! let request = Request::builder()
//!     .uri("/admin/shop/order/")
//!     .cookie(&key, "status__exact%3Dopen")
//!     .build()?;
//!
//! let response = view.handle(request).await?;
//! assert_eq!(response.status, StatusCode::FOUND);
//! assert_eq!(response.location(), Some("/admin/shop/order/?status__exact=open"));
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "admin")]
pub mod admin;
#[cfg(feature = "conf")]
pub mod conf;
pub mod http;

// Re-export HTTP types
pub use smart_filters_http::{Error, Handler, Request, Response, Result, SameSite, SetCookie};
pub use hyper::StatusCode;

// Re-export settings
#[cfg(feature = "conf")]
pub use smart_filters_conf::{ConfigError, SmartFilterSettings};

// Re-export the controller
#[cfg(feature = "admin")]
pub use smart_filters_admin::{
	AdminError, ChangeListContext, ChangeListView, FieldMeta, FieldType, ModelMeta,
	SmartFilterHooks, SmartFilterView, TemplateChangeList,
};

/// Prelude module for convenient imports
///
/// ```rust
/// use smart_filters::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{Error, Handler, Request, Response, Result, SetCookie, StatusCode};

	#[cfg(feature = "conf")]
	pub use crate::SmartFilterSettings;

	#[cfg(feature = "admin")]
	pub use crate::{
		ChangeListContext, ChangeListView, FieldMeta, FieldType, ModelMeta, SmartFilterHooks,
		SmartFilterView, TemplateChangeList,
	};

	// External
	pub use async_trait::async_trait;
}

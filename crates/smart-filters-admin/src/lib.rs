//! # Smart Filters Admin
//!
//! Admin change list support that remembers list filters per page.
//!
//! A [`SmartFilterView`] wraps any [`ChangeListView`]. Visiting a list page
//! with exact-match filters (`?status__exact=open`) stores them in a cookie
//! named after the page path; coming back without a querystring redirects to
//! the stored filters, and `?clear=1` forgets them. While filters are active,
//! the wrapped view receives a human-readable `filter_msg` such as
//! `"Status: Open"` along with a `title`.
//!
//! ## Example
//!
//! ```
//! use smart_filters_admin::{FieldMeta, FieldType, ModelMeta, SmartFilterView, TemplateChangeList};
//! use smart_filters_http::{Handler, Request};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> smart_filters_http::Result<()> {
//! let model = ModelMeta::new("Order").with_field(
//!     FieldMeta::new("status", FieldType::Char).with_choices([("open", "Open")]),
//! );
//! let view = SmartFilterView::with_defaults(TemplateChangeList::new(model)?);
//!
//! let request = Request::builder()
//!     .uri("/admin/shop/order/?status__exact=open")
//!     .build()?;
//! let response = view.handle(request).await?;
//!
//! assert_eq!(response.set_cookies().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod changelist;
pub mod error;
pub mod filters;
pub mod model;
pub mod smart_filter;
pub mod template;
pub mod text;

pub use changelist::{ChangeListContext, ChangeListView, FILTER_MSG_KEY, SmartFilterHooks, TITLE_KEY};
pub use error::AdminError;
pub use filters::{FilterResolution, ResolvedFilters, resolve_filters};
pub use model::{FieldMeta, FieldType, FieldValue, ModelMeta};
pub use smart_filter::{ALL_SENTINEL, CLEAR_PARAM, SmartFilterView};
pub use template::{CHANGE_LIST_TEMPLATE, TemplateChangeList};

//! Change list seam
//!
//! [`ChangeListView`] is the host framework's list page: it knows the model
//! and renders a response from a template context. [`SmartFilterHooks`] adds
//! the override points the smart filter controller consults on every request.

use crate::filters::{ResolvedFilters, default_filter_msg};
use crate::model::ModelMeta;
use crate::text::title_case;
use async_trait::async_trait;
use smart_filters_http::{Request, Response, Result};
use std::sync::Arc;

/// Template context handed to a change list
pub type ChangeListContext = serde_json::Map<String, serde_json::Value>;

/// Context key holding the page title
pub const TITLE_KEY: &str = "title";

/// Context key holding the filter summary
pub const FILTER_MSG_KEY: &str = "filter_msg";

/// An admin list page for one model
#[async_trait]
pub trait ChangeListView: Send + Sync {
	/// Metadata of the model listed on this page
	fn model(&self) -> &ModelMeta;

	/// Render the list page with `extra_context` merged into its template context
	async fn changelist_view(
		&self,
		request: &Request,
		extra_context: ChangeListContext,
	) -> Result<Response>;
}

/// Override points for the smart filter controller
///
/// Every hook has a default; return `None` (or an empty string) to leave the
/// corresponding context key unset.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use smart_filters_admin::{ChangeListContext, ChangeListView, ModelMeta, SmartFilterHooks};
/// use smart_filters_admin::filters::ResolvedFilters;
/// use smart_filters_http::{Request, Response, Result};
///
/// struct OrderList {
///     model: ModelMeta,
/// }
///
/// #[async_trait]
/// impl ChangeListView for OrderList {
///     fn model(&self) -> &ModelMeta {
///         &self.model
///     }
///
///     async fn changelist_view(&self, _request: &Request, _context: ChangeListContext) -> Result<Response> {
///         Ok(Response::ok())
///     }
/// }
///
/// impl SmartFilterHooks for OrderList {
///     // New visitors start on open orders
///     fn default_querystring(&self, _request: &Request) -> Option<String> {
///         Some("status__exact=open".to_string())
///     }
///
///     // Keep the host framework's own title
///     fn title(&self, _request: &Request, _filters: &ResolvedFilters) -> Option<String> {
///         None
///     }
/// }
/// ```
pub trait SmartFilterHooks: ChangeListView {
	/// Querystring to send first-time visitors to
	///
	/// Consulted only when the request has no querystring and no remembered
	/// filter cookie.
	fn default_querystring(&self, _request: &Request) -> Option<String> {
		None
	}

	/// Page title; defaults to the model's plural name, title-cased
	fn title(&self, _request: &Request, _filters: &ResolvedFilters) -> Option<String> {
		Some(title_case(&self.model().verbose_name_plural()))
	}

	/// Filter summary; only consulted when at least one filter resolved
	fn filter_msg(&self, _request: &Request, filters: &ResolvedFilters) -> Option<String> {
		Some(default_filter_msg(filters))
	}
}

#[async_trait]
impl<T: ChangeListView + ?Sized> ChangeListView for Arc<T> {
	fn model(&self) -> &ModelMeta {
		(**self).model()
	}

	async fn changelist_view(
		&self,
		request: &Request,
		extra_context: ChangeListContext,
	) -> Result<Response> {
		(**self).changelist_view(request, extra_context).await
	}
}

impl<T: SmartFilterHooks + ?Sized> SmartFilterHooks for Arc<T> {
	fn default_querystring(&self, request: &Request) -> Option<String> {
		(**self).default_querystring(request)
	}

	fn title(&self, request: &Request, filters: &ResolvedFilters) -> Option<String> {
		(**self).title(request, filters)
	}

	fn filter_msg(&self, request: &Request, filters: &ResolvedFilters) -> Option<String> {
		(**self).filter_msg(request, filters)
	}
}

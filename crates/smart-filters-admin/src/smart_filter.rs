//! Filter-remembering change list controller
//!
//! Wraps a [`ChangeListView`] so that each list page remembers the last
//! exact-match filters a visitor used, in a cookie scoped to that page.
//!
//! Per request:
//!
//! 1. a `clear` parameter redirects to the bare page and stores [`ALL_SENTINEL`];
//! 2. an empty querystring redirects to the remembered filters (or to the
//!    default querystring hook when nothing is remembered);
//! 3. otherwise the filters are resolved into `title`/`filter_msg` context,
//!    the wrapped view renders, and the exact-match filters are stored.

use crate::changelist::{ChangeListContext, FILTER_MSG_KEY, SmartFilterHooks, TITLE_KEY};
use crate::filters::resolve_filters;
use async_trait::async_trait;
use serde_json::Value;
use sha2::{Digest, Sha256};
use smart_filters_conf::SmartFilterSettings;
use smart_filters_http::cookie::encode_cookie_value;
use smart_filters_http::{Handler, Request, Response, Result, SetCookie, querystring};

/// Cookie value meaning "show everything, do not restore a filter"
pub const ALL_SENTINEL: &str = "ALL";

/// Query parameter that resets the remembered filter
pub const CLEAR_PARAM: &str = "clear";

/// Bytes of the path digest used in the cookie name
const PATH_HASH_BYTES: usize = 8;

/// Change list controller with cookie-backed filter memory
///
/// # Examples
///
/// ```
/// use smart_filters_admin::{SmartFilterView, TemplateChangeList, ModelMeta};
/// use smart_filters_conf::SmartFilterSettings;
///
/// let list = TemplateChangeList::new(ModelMeta::new("Order")).unwrap();
/// let view = SmartFilterView::new(list, SmartFilterSettings::default());
///
/// let key = view.cookie_key("/admin/shop/order/");
/// assert!(key.starts_with("SMARTFILTER_"));
/// assert_eq!(key, view.cookie_key("/admin/shop/order/"));
/// assert_ne!(key, view.cookie_key("/admin/shop/product/"));
/// ```
pub struct SmartFilterView<V> {
	view: V,
	settings: SmartFilterSettings,
}

impl<V: SmartFilterHooks> SmartFilterView<V> {
	pub fn new(view: V, settings: SmartFilterSettings) -> Self {
		Self { view, settings }
	}

	/// Wrap `view` using the default settings
	pub fn with_defaults(view: V) -> Self {
		Self::new(view, SmartFilterSettings::default())
	}

	pub fn view(&self) -> &V {
		&self.view
	}

	pub fn settings(&self) -> &SmartFilterSettings {
		&self.settings
	}

	/// Name of the cookie remembering filters for the page at `path`
	///
	/// The hash is a truncated SHA-256 of the path, so the name is the same
	/// in every process.
	pub fn cookie_key(&self, path: &str) -> String {
		let digest = Sha256::digest(path.as_bytes());
		format!(
			"{}{}",
			self.settings.prefix,
			hex::encode(&digest[..PATH_HASH_BYTES])
		)
	}

	/// Handle a change list request
	///
	/// Returns a redirect when the filter is cleared or restored, otherwise
	/// the wrapped view's response with the current exact-match filters
	/// stored in the page cookie. Errors come only from the wrapped view.
	pub async fn changelist_view(
		&self,
		request: &Request,
		extra_context: Option<ChangeListContext>,
	) -> Result<Response> {
		let key = self.cookie_key(request.path());

		if request.has_query_param(CLEAR_PARAM) {
			tracing::debug!(path = request.path(), cookie = %key, "clearing remembered filter");
			let mut response = Response::temporary_redirect(request.path());
			self.attach_cookie(&mut response, SetCookie::new(&key, ALL_SENTINEL));
			return Ok(response);
		}

		if request.query_string().is_empty()
			&& let Some(saved) = self.remembered_querystring(request, &key)
		{
			tracing::debug!(path = request.path(), querystring = %saved, "restoring remembered filter");
			return Ok(Response::temporary_redirect(format!(
				"{}?{}",
				request.path(),
				saved
			)));
		}

		let resolution = resolve_filters(
			self.view.model(),
			request
				.query_params()
				.iter()
				.map(|(k, v)| (k.as_str(), v.as_str())),
		);

		let mut context = extra_context.unwrap_or_default();
		if !resolution.filters.is_empty()
			&& let Some(filter_msg) = self
				.view
				.filter_msg(request, &resolution.filters)
				.filter(|msg| !msg.is_empty())
		{
			context.insert(FILTER_MSG_KEY.to_string(), Value::String(filter_msg));
		}
		if let Some(title) = self
			.view
			.title(request, &resolution.filters)
			.filter(|title| !title.is_empty())
		{
			context.insert(TITLE_KEY.to_string(), Value::String(title));
		}
		tracing::trace!(filters = resolution.filters.len(), "rendering change list");

		let mut response = self.view.changelist_view(request, context).await?;

		if !resolution.saved.is_empty() {
			match resolution.saved_querystring() {
				Ok(saved) => {
					let cookie = SetCookie::new(&key, encode_cookie_value(&saved))
						.with_max_age(self.settings.cookie_max_age());
					self.attach_cookie(&mut response, cookie);
				}
				Err(e) => {
					tracing::warn!(cookie = %key, error = %e, "could not encode filters for cookie");
				}
			}
		}

		Ok(response)
	}

	/// Querystring to restore for a request without one, if any
	///
	/// The cookie wins over the default hook, even when it holds the
	/// `ALL` sentinel. The result is re-encoded so a tampered cookie
	/// cannot inject raw characters into the `Location` header.
	fn remembered_querystring(&self, request: &Request, key: &str) -> Option<String> {
		let candidate = match request.cookie(key) {
			Some(saved) => saved,
			None => self.view.default_querystring(request)?,
		};
		let candidate = candidate.trim_start_matches('?');
		if candidate.is_empty() || candidate == ALL_SENTINEL {
			return None;
		}
		querystring::encode(&querystring::parse(candidate))
			.ok()
			.filter(|normalized| !normalized.is_empty())
	}

	fn attach_cookie(&self, response: &mut Response, cookie: SetCookie) {
		let cookie = cookie
			.with_path(self.settings.cookie_path.clone())
			.with_secure(self.settings.cookie_secure)
			.with_http_only(self.settings.cookie_http_only)
			.with_same_site(self.settings.cookie_same_site);
		if let Err(e) = response.set_cookie(&cookie) {
			tracing::warn!(cookie = %cookie.name, error = %e, "dropping filter cookie");
		}
	}
}

#[async_trait]
impl<V: SmartFilterHooks> Handler for SmartFilterView<V> {
	async fn handle(&self, request: Request) -> Result<Response> {
		self.changelist_view(&request, None).await
	}
}

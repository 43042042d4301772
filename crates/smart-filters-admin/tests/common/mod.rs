//! Shared fixtures for smart filter integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use smart_filters_admin::filters::{ResolvedFilters, default_filter_msg};
use smart_filters_admin::text::title_case;
use smart_filters_admin::{
	ChangeListContext, ChangeListView, FieldMeta, FieldType, ModelMeta, SmartFilterHooks,
};
use smart_filters_http::{Error, Request, Response, Result};
use std::sync::Mutex;

pub const ORDER_PATH: &str = "/admin/shop/order/";

pub fn order_model() -> ModelMeta {
	ModelMeta::new("Order")
		.with_field(
			FieldMeta::new("status", FieldType::Char)
				.with_choices([("active", "Active"), ("closed", "Closed")]),
		)
		.with_field(FieldMeta::new("is_paid", FieldType::Boolean))
		.with_field(FieldMeta::new("total", FieldType::Decimal))
		.with_field(FieldMeta::new("placed", FieldType::Date).with_verbose_name("placed on"))
}

/// List view that records every context it is asked to render
pub struct RecordingList {
	model: ModelMeta,
	pub default_querystring: Option<String>,
	pub title: Option<Option<String>>,
	pub filter_msg: Option<Option<String>>,
	pub fail: bool,
	contexts: Mutex<Vec<ChangeListContext>>,
}

impl RecordingList {
	pub fn new() -> Self {
		Self {
			model: order_model(),
			default_querystring: None,
			title: None,
			filter_msg: None,
			fail: false,
			contexts: Mutex::new(Vec::new()),
		}
	}

	pub fn with_default_querystring(mut self, querystring: &str) -> Self {
		self.default_querystring = Some(querystring.to_string());
		self
	}

	pub fn with_title(mut self, title: Option<&str>) -> Self {
		self.title = Some(title.map(str::to_string));
		self
	}

	pub fn with_filter_msg(mut self, filter_msg: Option<&str>) -> Self {
		self.filter_msg = Some(filter_msg.map(str::to_string));
		self
	}

	pub fn failing(mut self) -> Self {
		self.fail = true;
		self
	}

	pub fn calls(&self) -> usize {
		self.contexts.lock().unwrap().len()
	}

	pub fn last_context(&self) -> ChangeListContext {
		self.contexts
			.lock()
			.unwrap()
			.last()
			.cloned()
			.expect("list view was not rendered")
	}
}

#[async_trait]
impl ChangeListView for RecordingList {
	fn model(&self) -> &ModelMeta {
		&self.model
	}

	async fn changelist_view(
		&self,
		_request: &Request,
		extra_context: ChangeListContext,
	) -> Result<Response> {
		self.contexts.lock().unwrap().push(extra_context);
		if self.fail {
			return Err(Error::Internal("list query failed".to_string()));
		}
		Ok(Response::ok().with_body("rendered"))
	}
}

impl SmartFilterHooks for RecordingList {
	fn default_querystring(&self, _request: &Request) -> Option<String> {
		self.default_querystring.clone()
	}

	fn title(&self, _request: &Request, _filters: &ResolvedFilters) -> Option<String> {
		match &self.title {
			Some(title) => title.clone(),
			None => Some(title_case(&self.model.verbose_name_plural())),
		}
	}

	fn filter_msg(&self, _request: &Request, filters: &ResolvedFilters) -> Option<String> {
		match &self.filter_msg {
			Some(msg) => msg.clone(),
			None => Some(default_filter_msg(filters)),
		}
	}
}

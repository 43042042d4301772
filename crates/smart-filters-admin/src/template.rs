//! Tera-backed change list
//!
//! [`TemplateChangeList`] is a ready-made [`ChangeListView`] for hosts that do
//! not bring their own list page. The smart filter context (`title`,
//! `filter_msg`) is rendered together with whatever `columns`/`results`
//! the caller passes as extra context.

use crate::changelist::{ChangeListContext, ChangeListView, SmartFilterHooks};
use crate::model::ModelMeta;
use async_trait::async_trait;
use serde_json::Value;
use smart_filters_http::{Error, Request, Response, Result};
use std::sync::Arc;
use tera::{Context, Tera};

/// Name of the built-in change list template
pub const CHANGE_LIST_TEMPLATE: &str = "admin/change_list_smart.html";

const CHANGE_LIST_SOURCE: &str = include_str!("../templates/admin/change_list_smart.html");

/// A change list page rendered from a Tera template
///
/// # Examples
///
/// ```
/// use smart_filters_admin::{ChangeListContext, ModelMeta, TemplateChangeList};
///
/// let list = TemplateChangeList::new(ModelMeta::new("Order")).unwrap();
///
/// let mut context = ChangeListContext::new();
/// context.insert("filter_msg".into(), "Status: Open".into());
///
/// let html = list.render(context).unwrap();
/// assert!(html.contains("<h1>orders</h1>"));
/// assert!(html.contains("Status: Open"));
/// assert!(html.contains(r#"href="?clear=1""#));
/// ```
#[derive(Clone)]
pub struct TemplateChangeList {
	model: ModelMeta,
	tera: Arc<Tera>,
	template_name: String,
}

impl TemplateChangeList {
	/// Use the built-in template
	pub fn new(model: ModelMeta) -> Result<Self> {
		Self::with_template(model, CHANGE_LIST_TEMPLATE, CHANGE_LIST_SOURCE)
	}

	/// Use a custom template source registered under `name`
	///
	/// Fails when the source does not parse.
	pub fn with_template(
		model: ModelMeta,
		name: impl Into<String>,
		source: &str,
	) -> Result<Self> {
		let template_name = name.into();
		let mut tera = Tera::default();
		tera.add_raw_template(&template_name, source).map_err(|e| {
			Error::Template(format!("Failed to load template '{}': {}", template_name, e))
		})?;
		Ok(Self {
			model,
			tera: Arc::new(tera),
			template_name,
		})
	}

	pub fn template_name(&self) -> &str {
		&self.template_name
	}

	/// Render the template with the model's names added to `context`
	///
	/// Keys already present in `context` are left alone.
	pub fn render(&self, mut context: ChangeListContext) -> Result<String> {
		context
			.entry("model_name")
			.or_insert_with(|| Value::String(self.model.model_name().to_string()));
		context
			.entry("verbose_name_plural")
			.or_insert_with(|| Value::String(self.model.verbose_name_plural().into_owned()));

		let context = Context::from_value(Value::Object(context))
			.map_err(|e| Error::Template(format!("Invalid template context: {}", e)))?;
		self.tera.render(&self.template_name, &context).map_err(|e| {
			Error::Template(format!(
				"Failed to render change list template '{}': {}",
				self.template_name, e
			))
		})
	}
}

#[async_trait]
impl ChangeListView for TemplateChangeList {
	fn model(&self) -> &ModelMeta {
		&self.model
	}

	async fn changelist_view(
		&self,
		request: &Request,
		mut extra_context: ChangeListContext,
	) -> Result<Response> {
		extra_context
			.entry("query_string")
			.or_insert_with(|| Value::String(request.query_string().to_string()));
		let html = self.render(extra_context)?;
		Ok(Response::ok().with_html(html))
	}
}

impl SmartFilterHooks for TemplateChangeList {}

//! Facade Integration Tests
//!
//! Wires a host list view through the `smart_filters` prelude and serves it
//! as a plain `Handler`.

use rstest::{fixture, rstest};
use smart_filters::prelude::*;
use std::sync::Arc;

/// Host list page that answers with its template context as JSON
struct JsonOrderList {
	model: ModelMeta,
}

#[async_trait]
impl ChangeListView for JsonOrderList {
	fn model(&self) -> &ModelMeta {
		&self.model
	}

	async fn changelist_view(
		&self,
		_request: &Request,
		extra_context: ChangeListContext,
	) -> Result<Response> {
		let body = serde_json::to_vec(&extra_context)
			.map_err(|e| Error::Serialization(e.to_string()))?;
		Ok(Response::ok().with_body(body))
	}
}

impl SmartFilterHooks for JsonOrderList {
	fn default_querystring(&self, _request: &Request) -> Option<String> {
		Some("is_paid__exact=0".to_string())
	}
}

#[fixture]
fn handler() -> Arc<dyn Handler> {
	let model = ModelMeta::new("Order")
		.with_field(FieldMeta::new("is_paid", FieldType::Boolean))
		.with_field(FieldMeta::new("status", FieldType::Char).with_choices([("active", "Active")]));
	let settings = SmartFilterSettings::default().with_cookie_http_only(true);
	Arc::new(SmartFilterView::new(JsonOrderList { model }, settings))
}

#[rstest]
#[tokio::test]
async fn test_first_visit_uses_default_filter(handler: Arc<dyn Handler>) {
	let request = Request::builder().uri("/admin/shop/order/").build().unwrap();

	let response = handler.handle(request).await.unwrap();

	assert_eq!(response.status, StatusCode::FOUND);
	assert_eq!(
		response.location(),
		Some("/admin/shop/order/?is_paid__exact=0")
	);
}

#[rstest]
#[tokio::test]
async fn test_filtered_visit_renders_summary(handler: Arc<dyn Handler>) {
	let request = Request::builder()
		.uri("/admin/shop/order/?status__exact=active&is_paid__exact=0")
		.build()
		.unwrap();

	let response = handler.handle(request).await.unwrap();

	let context: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
	assert_eq!(
		context,
		serde_json::json!({
			"filter_msg": "Status: Active, Is Paid: No",
			"title": "Orders",
		})
	);
	let cookie = response.set_cookies()[0];
	assert!(cookie.contains("=status__exact%3Dactive%26is_paid__exact%3D0; Expires="));
	assert!(cookie.ends_with("; HttpOnly"));
}

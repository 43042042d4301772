//! Handler Integration Tests
//!
//! Drives requests through a `Handler` and checks how cookies, query
//! parameters and redirects travel between request and response.

use async_trait::async_trait;
use hyper::StatusCode;
use rstest::{fixture, rstest};
use smart_filters_http::{Handler, Request, Response, Result, SetCookie};
use std::sync::Arc;
use std::time::Duration;

/// Echoes the `page` cookie back and remembers the querystring in a cookie
struct RememberingHandler;

#[async_trait]
impl Handler for RememberingHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		if request.query_string().is_empty() {
			if let Some(saved) = request.cookie("page") {
				return Ok(Response::temporary_redirect(format!(
					"{}?{}",
					request.path(),
					saved
				)));
			}
			return Ok(Response::ok().with_body("no filter"));
		}

		let mut response = Response::ok().with_body(request.query_string().to_string());
		response.set_cookie(
			&SetCookie::new("page", request.query_string())
				.with_max_age(Duration::from_secs(60)),
		)?;
		Ok(response)
	}
}

#[fixture]
fn handler() -> Arc<dyn Handler> {
	Arc::new(RememberingHandler)
}

#[rstest]
#[tokio::test]
async fn test_querystring_is_remembered(handler: Arc<dyn Handler>) {
	let request = Request::builder().uri("/list/?a=1").build().unwrap();

	let response = handler.handle(request).await.unwrap();

	assert_eq!(response.status, StatusCode::OK);
	let cookies = response.set_cookies();
	assert_eq!(cookies.len(), 1);
	assert!(cookies[0].starts_with("page=a=1; Expires="));
	assert!(cookies[0].contains("Max-Age=60"));
}

#[rstest]
#[tokio::test]
async fn test_remembered_querystring_redirects(handler: Arc<dyn Handler>) {
	let request = Request::builder()
		.uri("/list/")
		.cookie("page", "a%3D1")
		.build()
		.unwrap();

	let response = handler.handle(request).await.unwrap();

	assert_eq!(response.status, StatusCode::FOUND);
	assert_eq!(response.location(), Some("/list/?a=1"));
	assert!(response.set_cookies().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_no_cookie_renders(handler: Arc<dyn Handler>) {
	let request = Request::builder().uri("/list/").build().unwrap();

	let response = handler.handle(request).await.unwrap();

	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.body, "no filter");
}

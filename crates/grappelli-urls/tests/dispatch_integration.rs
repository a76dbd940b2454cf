// End-to-end dispatch: matching, binding, coercion and response shaping

use async_trait::async_trait;
use grappelli_http::{
	ActionArgs, ActionDescriptor, ActionValue, Controller, ControllerDescriptor, ParamType,
	Result, StatusCode,
};
use grappelli_urls::{ControllerRegistry, Dispatcher, FileRouteSource, RouteMeta, RouteTableBuilder};
use hyper::Method;
use std::sync::Arc;

// Controller covering every HTTP verb plus typed parameter actions,
// mirroring the shapes a real site controller declares in code
struct TestController;

#[async_trait]
impl Controller for TestController {
	fn descriptor(&self) -> ControllerDescriptor {
		ControllerDescriptor::new("TestController")
			.with_action(ActionDescriptor::new("test").with_route(Method::GET, "/test"))
			.with_action(ActionDescriptor::new("postData").with_route(Method::POST, "/test/data"))
			.with_action(ActionDescriptor::new("testPut").with_route(Method::PUT, "/test/put"))
			.with_action(
				ActionDescriptor::new("testDelete").with_route(Method::DELETE, "/test/delete"),
			)
			.with_action(
				ActionDescriptor::new("testOptions").with_route(Method::OPTIONS, "/test/options"),
			)
			.with_action(ActionDescriptor::new("testHead").with_route(Method::HEAD, "/test/head"))
			.with_action(
				ActionDescriptor::new("testPatch").with_route(Method::PATCH, "/test/patch"),
			)
			.with_action(
				ActionDescriptor::new("getUser")
					.with_param("id", ParamType::Int)
					.with_route(Method::GET, "/user/{id}"),
			)
			.with_action(
				ActionDescriptor::new("getPostComment")
					.with_param("postId", ParamType::Str)
					.with_param("commentId", ParamType::Str)
					.with_route(Method::GET, "/post/{postId}/comment/{commentId}"),
			)
			.with_action(
				ActionDescriptor::new("getProduct")
					.with_param("category", ParamType::Str)
					.with_param("productId", ParamType::Int)
					.with_route(Method::GET, "/product/{category}/{productId}"),
			)
			.with_action(
				ActionDescriptor::new("getFlag")
					.with_param("enabled", ParamType::Bool)
					.with_route(Method::GET, "/flag/{enabled}"),
			)
			.with_action(
				ActionDescriptor::new("getPrice")
					.with_param("amount", ParamType::Float)
					.with_route(Method::GET, "/price/{amount}"),
			)
	}

	async fn call(&self, action: &str, args: ActionArgs) -> Result<ActionValue> {
		let body = match action {
			"test" => "Hello from TestController::test".to_string(),
			"postData" => "Data received in TestController::postData".to_string(),
			"testPut" => "Hello from TestController::testPut".to_string(),
			"testDelete" => "Hello from TestController::testDelete".to_string(),
			"testOptions" => "Hello from TestController::testOptions".to_string(),
			"testHead" => "Hello from TestController::testHead".to_string(),
			"testPatch" => "Hello from TestController::testPatch".to_string(),
			"getUser" => format!("User ID: {}", args.get(0).and_then(|v| v.as_int()).unwrap()),
			"getPostComment" => format!(
				"Post ID: {}, Comment ID: {}",
				args.get(0).and_then(|v| v.as_str()).unwrap(),
				args.get(1).and_then(|v| v.as_str()).unwrap()
			),
			"getProduct" => format!(
				"Category: {}, Product ID: {}",
				args.get(0).and_then(|v| v.as_str()).unwrap(),
				args.get(1).and_then(|v| v.as_int()).unwrap()
			),
			"getFlag" => format!("Flag: {}", args.get(0).and_then(|v| v.as_bool()).unwrap()),
			"getPrice" => format!("Price: {}", args.get(0).and_then(|v| v.as_float()).unwrap()),
			other => format!("unknown action {}", other),
		};
		Ok(Some(body))
	}
}

fn dispatcher_with(controllers: Vec<Arc<dyn Controller>>) -> Dispatcher {
	let mut registry = ControllerRegistry::new();
	for controller in controllers {
		registry.register(controller);
	}
	let table = RouteTableBuilder::new().build(&registry).unwrap();
	Dispatcher::new(Arc::new(table), Arc::new(registry))
}

fn test_dispatcher() -> Dispatcher {
	dispatcher_with(vec![Arc::new(TestController)])
}

// Test: every declared verb reaches its action
#[tokio::test]
async fn test_verb_coverage() {
	let dispatcher = test_dispatcher();

	let cases = [
		("GET", "/test", "Hello from TestController::test"),
		("POST", "/test/data", "Data received in TestController::postData"),
		("PUT", "/test/put", "Hello from TestController::testPut"),
		("DELETE", "/test/delete", "Hello from TestController::testDelete"),
		("OPTIONS", "/test/options", "Hello from TestController::testOptions"),
		("HEAD", "/test/head", "Hello from TestController::testHead"),
		("PATCH", "/test/patch", "Hello from TestController::testPatch"),
	];

	for (method, path, expected) in cases {
		let response = dispatcher.dispatch(method, path).await.unwrap();
		assert_eq!(response.status, StatusCode::OK, "{} {}", method, path);
		assert!(response.body_text().contains(expected));
	}
}

// Test: method comparison is case-insensitive
#[tokio::test]
async fn test_method_case_insensitive() {
	let dispatcher = test_dispatcher();

	let response = dispatcher.dispatch("get", "/test").await.unwrap();
	assert_eq!(response.status, StatusCode::OK);
}

// Test: trailing-slash normalization is idempotent
#[tokio::test]
async fn test_trailing_slash_normalization() {
	let dispatcher = test_dispatcher();

	let with_slash = dispatcher.dispatch("GET", "/test/").await.unwrap();
	let without = dispatcher.dispatch("GET", "/test").await.unwrap();

	assert_eq!(with_slash.status, without.status);
	assert_eq!(with_slash.body_text(), without.body_text());
}

// Test: int parameter binds and reaches the action typed
#[tokio::test]
async fn test_int_parameter_binding() {
	let dispatcher = test_dispatcher();

	let response = dispatcher.dispatch("GET", "/user/123").await.unwrap();
	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.body_text(), "User ID: 123");
}

// Test: a non-numeric segment for an int parameter is a 404 naming the
// parameter, not a server error
#[tokio::test]
async fn test_int_coercion_failure_is_404() {
	let dispatcher = test_dispatcher();

	let response = dispatcher.dispatch("GET", "/user/abc").await.unwrap();
	assert_eq!(response.status, StatusCode::NOT_FOUND);
	assert!(response.body_text().contains("id"));
	assert!(response.body_text().contains("abc"));
}

// Test: multiple parameters bind in declaration order
#[tokio::test]
async fn test_multiple_parameters() {
	let dispatcher = test_dispatcher();

	let response = dispatcher
		.dispatch("GET", "/post/45/comment/67")
		.await
		.unwrap();
	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.body_text(), "Post ID: 45, Comment ID: 67");
}

// Test: mixed string and int parameters
#[tokio::test]
async fn test_mixed_parameter_types() {
	let dispatcher = test_dispatcher();

	let response = dispatcher
		.dispatch("GET", "/product/electronics/89")
		.await
		.unwrap();
	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.body_text(), "Category: electronics, Product ID: 89");
}

// Test: permissive bool literals bind, unrecognized ones are 404
#[tokio::test]
async fn test_bool_coercion() {
	let dispatcher = test_dispatcher();

	let response = dispatcher.dispatch("GET", "/flag/true").await.unwrap();
	assert_eq!(response.body_text(), "Flag: true");

	let response = dispatcher.dispatch("GET", "/flag/yes").await.unwrap();
	assert_eq!(response.body_text(), "Flag: true");

	let response = dispatcher.dispatch("GET", "/flag/0").await.unwrap();
	assert_eq!(response.body_text(), "Flag: false");

	let response = dispatcher.dispatch("GET", "/flag/maybe").await.unwrap();
	assert_eq!(response.status, StatusCode::NOT_FOUND);
	assert!(response.body_text().contains("enabled"));
}

// Test: float literals bind, malformed ones are 404
#[tokio::test]
async fn test_float_coercion() {
	let dispatcher = test_dispatcher();

	let response = dispatcher.dispatch("GET", "/price/19.99").await.unwrap();
	assert_eq!(response.body_text(), "Price: 19.99");

	let response = dispatcher.dispatch("GET", "/price/cheap").await.unwrap();
	assert_eq!(response.status, StatusCode::NOT_FOUND);
}

// Test: an unmatched path is a plain 404 regardless of table contents
#[tokio::test]
async fn test_unmatched_route_is_404() {
	let dispatcher = test_dispatcher();

	let response = dispatcher
		.dispatch("GET", "/does-not-exist")
		.await
		.unwrap();
	assert_eq!(response.status, StatusCode::NOT_FOUND);
	assert_eq!(response.body_text(), "not found");
}

// Test: a matching path with the wrong method is a 404
#[tokio::test]
async fn test_method_mismatch_is_404() {
	let dispatcher = test_dispatcher();

	let response = dispatcher.dispatch("POST", "/test").await.unwrap();
	assert_eq!(response.status, StatusCode::NOT_FOUND);
}

// Controller with a parameter type the engine cannot coerce
struct BrokenController;

#[async_trait]
impl Controller for BrokenController {
	fn descriptor(&self) -> ControllerDescriptor {
		ControllerDescriptor::new("BrokenController").with_action(
			ActionDescriptor::new("list")
				.with_param("ids", ParamType::Other("Vec<i64>"))
				.with_route(Method::GET, "/broken/{ids}"),
		)
	}

	async fn call(&self, _action: &str, _args: ActionArgs) -> Result<ActionValue> {
		Ok(Some("never reached".to_string()))
	}
}

// Test: an uncoercible declared type is a 500, never a 200
#[tokio::test]
async fn test_unsupported_parameter_type_is_500() {
	let dispatcher = dispatcher_with(vec![Arc::new(BrokenController)]);

	let response = dispatcher.dispatch("GET", "/broken/1,2,3").await.unwrap();
	assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
	assert!(response.body_text().contains("unsupported parameter type"));
}

// Controller whose formal parameter has no matching placeholder
struct AbsentParamController;

#[async_trait]
impl Controller for AbsentParamController {
	fn descriptor(&self) -> ControllerDescriptor {
		ControllerDescriptor::new("AbsentParamController").with_action(
			ActionDescriptor::new("show")
				.with_param("missing", ParamType::Str)
				.with_route(Method::GET, "/absent"),
		)
	}

	async fn call(&self, _action: &str, args: ActionArgs) -> Result<ActionValue> {
		assert!(args.get(0).unwrap().is_absent());
		Ok(None)
	}
}

// Test: a formal parameter without a captured segment binds absent, and a
// None return is an empty 200 body
#[tokio::test]
async fn test_absent_parameter_and_empty_body() {
	let dispatcher = dispatcher_with(vec![Arc::new(AbsentParamController)]);

	let response = dispatcher.dispatch("GET", "/absent").await.unwrap();
	assert_eq!(response.status, StatusCode::OK);
	assert!(response.body.is_empty());
}

// Controllers for declaration-order disambiguation
struct LiteralFirstController;

#[async_trait]
impl Controller for LiteralFirstController {
	fn descriptor(&self) -> ControllerDescriptor {
		ControllerDescriptor::new("LiteralFirstController")
			.with_action(ActionDescriptor::new("new").with_route(Method::GET, "/user/new"))
			.with_action(
				ActionDescriptor::new("show")
					.with_param("id", ParamType::Str)
					.with_route(Method::GET, "/user/{id}"),
			)
	}

	async fn call(&self, action: &str, _args: ActionArgs) -> Result<ActionValue> {
		Ok(Some(action.to_string()))
	}
}

// Test: overlapping patterns resolve by declaration order, first match wins
#[tokio::test]
async fn test_first_declared_route_wins() {
	let dispatcher = dispatcher_with(vec![Arc::new(LiteralFirstController)]);

	let response = dispatcher.dispatch("GET", "/user/new").await.unwrap();
	assert_eq!(response.body_text(), "new");

	let response = dispatcher.dispatch("GET", "/user/42").await.unwrap();
	assert_eq!(response.body_text(), "show");
}

// Controller declaring the same action both in code and in the file
struct PrecedenceController;

#[async_trait]
impl Controller for PrecedenceController {
	fn descriptor(&self) -> ControllerDescriptor {
		ControllerDescriptor::new("PrecedenceController").with_action(
			ActionDescriptor::new("show").with_route(Method::GET, "/from-code"),
		)
	}

	async fn call(&self, _action: &str, _args: ActionArgs) -> Result<ActionValue> {
		Ok(Some("reached".to_string()))
	}
}

// Test: when both sources declare an action, only the code-level path is
// reachable
#[tokio::test]
async fn test_code_path_shadows_file_path() {
	let mut registry = ControllerRegistry::new();
	registry.register(Arc::new(PrecedenceController));

	let mut file = FileRouteSource::new();
	file.declare_route(
		"PrecedenceController",
		"show",
		RouteMeta::new(Method::GET, "/from-file"),
	);

	let table = RouteTableBuilder::new()
		.with_file_source(file)
		.build(&registry)
		.unwrap();
	let dispatcher = Dispatcher::new(Arc::new(table), Arc::new(registry));

	let response = dispatcher.dispatch("GET", "/from-code").await.unwrap();
	assert_eq!(response.status, StatusCode::OK);

	let response = dispatcher.dispatch("GET", "/from-file").await.unwrap();
	assert_eq!(response.status, StatusCode::NOT_FOUND);
}

// Test: concurrent dispatches share the table without interference
#[tokio::test]
async fn test_concurrent_dispatch() {
	let dispatcher = Arc::new(test_dispatcher());

	let mut handles = Vec::new();
	for i in 0..16 {
		let dispatcher = dispatcher.clone();
		handles.push(tokio::spawn(async move {
			dispatcher.dispatch("GET", &format!("/user/{}", i)).await
		}));
	}

	for (i, handle) in handles.into_iter().enumerate() {
		let response = handle.await.unwrap().unwrap();
		assert_eq!(response.status, StatusCode::OK);
		assert_eq!(response.body_text(), format!("User ID: {}", i));
	}
}

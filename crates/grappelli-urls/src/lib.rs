//! # Grappelli URLs
//!
//! The request-routing engine: reconciles three route-declaration sources
//! into one ordered route table, compiles path patterns into matchers, and
//! dispatches inbound `(method, path)` pairs to controller actions with
//! typed path parameters.
//!
//! Declaration sources, in precedence order:
//!
//! 1. In-code metadata attached to an action descriptor ([`RouteMeta`])
//! 2. Explicit file-declared routes keyed by `(controller, action)`
//! 3. File-declared base paths (or the naming convention) per controller
//!    group
//!
//! # Examples
//!
//! ```
//! use grappelli_http::{
//! 	ActionArgs, ActionDescriptor, ActionValue, Controller, ControllerDescriptor, ParamType,
//! 	Result,
//! };
//! use grappelli_urls::{ControllerRegistry, Dispatcher, RouteTableBuilder};
//! use hyper::Method;
//! use std::sync::Arc;
//!
//! struct UserController;
//!
//! #[async_trait::async_trait]
//! impl Controller for UserController {
//! 	fn descriptor(&self) -> ControllerDescriptor {
//! 		ControllerDescriptor::new("UserController").with_action(
//! 			ActionDescriptor::new("show")
//! 				.with_param("id", ParamType::Int)
//! 				.with_route(Method::GET, "/user/{id}"),
//! 		)
//! 	}
//!
//! 	async fn call(&self, _action: &str, args: ActionArgs) -> Result<ActionValue> {
//! 		let id = args.get(0).and_then(|v| v.as_int()).unwrap_or_default();
//! 		Ok(Some(format!("User ID: {}", id)))
//! 	}
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut registry = ControllerRegistry::new();
//! registry.register(Arc::new(UserController));
//!
//! let table = RouteTableBuilder::new().build(&registry).unwrap();
//! let dispatcher = Dispatcher::new(Arc::new(table), Arc::new(registry));
//!
//! let response = dispatcher.dispatch("GET", "/user/123").await.unwrap();
//! assert_eq!(response.body_text(), "User ID: 123");
//! # }
//! ```

pub mod converters;
pub mod dispatcher;
pub mod error;
pub mod pattern;
pub mod registry;
pub mod sources;
pub mod table;

pub use converters::{
	BoolConverter, Converter, ConverterError, ConverterResult, FloatConverter, IntegerConverter,
	StrConverter, converter_for,
};
pub use dispatcher::Dispatcher;
pub use error::{RouterError, RouterResult};
pub use pattern::PathPattern;
pub use registry::ControllerRegistry;
pub use sources::FileRouteSource;
pub use table::{CompiledRoute, RouteTable, RouteTableBuilder};

// Re-exported so callers can declare routes without importing grappelli-http
pub use grappelli_http::{HandlerRef, RouteMeta};

//! # Grappelli
//!
//! Attribute, file and convention based request routing for Rust web
//! applications.
//!
//! Grappelli reconciles three route-declaration sources — in-code metadata
//! on controller actions, explicit file-declared routes, and per-group base
//! paths with a naming-convention fallback — into one ordered route table,
//! then dispatches inbound `(method, path)` pairs to controller actions
//! with typed path parameters.
//!
//! ## Crates
//!
//! - [`http`] — response and error values, the controller boundary
//! - [`urls`] — pattern compiler, route table, dispatcher, registry
//! - [`conf`] — declarative route-file and settings loading
//!
//! ## Example
//!
//! ```
//! use grappelli::http::{
//! 	ActionArgs, ActionDescriptor, ActionValue, Controller, ControllerDescriptor, Result,
//! };
//! use grappelli::urls::{ControllerRegistry, Dispatcher, RouteTableBuilder};
//! use std::sync::Arc;
//!
//! struct HomeController;
//!
//! #[async_trait::async_trait]
//! impl Controller for HomeController {
//! 	fn descriptor(&self) -> ControllerDescriptor {
//! 		ControllerDescriptor::new("HomeController")
//! 			.with_action(ActionDescriptor::new("index"))
//! 	}
//!
//! 	async fn call(&self, _action: &str, _args: ActionArgs) -> Result<ActionValue> {
//! 		Ok(Some("welcome".to_string()))
//! 	}
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut registry = ControllerRegistry::new();
//! registry.register(Arc::new(HomeController));
//!
//! let table = RouteTableBuilder::new().build(&registry).unwrap();
//! let dispatcher = Dispatcher::new(Arc::new(table), Arc::new(registry));
//!
//! // Convention fallback: HomeController::index resolves to /home
//! let response = dispatcher.dispatch("GET", "/home").await.unwrap();
//! assert_eq!(response.body_text(), "welcome");
//! # }
//! ```

pub use grappelli_conf as conf;
pub use grappelli_http as http;
pub use grappelli_urls as urls;

pub use grappelli_http::{Error, Response, Result};
pub use grappelli_urls::{ControllerRegistry, Dispatcher, RouteTable, RouteTableBuilder};

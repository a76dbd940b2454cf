//! Request dispatch.
//!
//! `dispatch` is stateless across calls: per-request state is the table
//! scan and the binding map, both discarded when the response is built.
//! Routing failures never escape as errors — a missing route and a
//! parameter that fails coercion both come back as 404 response values,
//! and an uncoercible declared type comes back as 500. Only
//! controller-level faults propagate as `Err`, to whatever error policy
//! the caller runs.

use crate::converters::converter_for;
use crate::registry::ControllerRegistry;
use crate::table::{CompiledRoute, RouteTable};
use grappelli_http::{ParamType, ParamValue, Response, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves inbound `(method, path)` pairs against the route table and
/// invokes the matched controller action.
///
/// Holds its collaborators behind `Arc` so concurrent dispatches share the
/// immutable table and registry freely.
pub struct Dispatcher {
	table: Arc<RouteTable>,
	registry: Arc<ControllerRegistry>,
}

impl Dispatcher {
	pub fn new(table: Arc<RouteTable>, registry: Arc<ControllerRegistry>) -> Self {
		Self { table, registry }
	}

	/// Dispatch a request to the first matching route.
	///
	/// The path is normalized by stripping a single trailing slash (unless
	/// the path is exactly `/`); methods compare case-insensitively.
	pub async fn dispatch(&self, method: &str, path: &str) -> Result<Response> {
		let path = normalize_path(path);
		let method = method.to_ascii_uppercase();

		for route in self.table.routes() {
			if route.method.as_str() != method {
				continue;
			}
			let Some(values) = route.pattern.capture_values(path) else {
				continue;
			};

			debug!(method = %method, path = %path, handler = %route.handler, "route matched");
			return self.invoke_route(route, values).await;
		}

		debug!(method = %method, path = %path, "no route matched");
		Ok(Response::not_found().with_body("not found"))
	}

	/// Bind and coerce parameters, then invoke the handler.
	async fn invoke_route(&self, route: &CompiledRoute, values: Vec<String>) -> Result<Response> {
		// Captured values zip with placeholder names in pattern order
		let captured: HashMap<&str, &str> = route
			.pattern
			.param_names()
			.iter()
			.map(String::as_str)
			.zip(values.iter().map(String::as_str))
			.collect();

		let params = self.registry.params(&route.handler).unwrap_or_default();

		let mut args = Vec::with_capacity(params.len());
		for param in params {
			let Some(raw) = captured.get(param.name.as_str()) else {
				// Formal parameter with no captured segment binds absent
				args.push(ParamValue::Absent);
				continue;
			};

			let converter = match &param.ty {
				ParamType::Other(declared) => {
					warn!(
						handler = %route.handler,
						param = %param.name,
						declared = %declared,
						"unsupported parameter type",
					);
					return Ok(Response::internal_server_error().with_body(format!(
						"unsupported parameter type `{}` for parameter `{}`",
						declared, param.name
					)));
				}
				ty => converter_for(ty).expect("coercible type has a converter"),
			};

			match converter.convert(raw) {
				Ok(value) => args.push(value),
				Err(err) => {
					debug!(
						handler = %route.handler,
						param = %param.name,
						"parameter coercion failed",
					);
					// An uncoercible segment means the URL doesn't name a
					// valid route shape
					return Ok(Response::not_found()
						.with_body(format!("not found: parameter `{}`: {}", param.name, err)));
				}
			}
		}

		let value = self.registry.invoke(&route.handler, args.into()).await?;
		Ok(match value {
			Some(body) => Response::ok().with_body(body),
			None => Response::ok(),
		})
	}
}

/// Strip a single trailing slash unless the path is exactly `/`.
fn normalize_path(path: &str) -> &str {
	if path.len() > 1 && path.ends_with('/') {
		&path[..path.len() - 1]
	} else {
		path
	}
}

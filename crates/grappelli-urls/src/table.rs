//! Route table construction.
//!
//! The table is built once at startup from the registered controllers and
//! the declaration sources, then shared read-only for the life of the
//! process. Registration order is preserved: the first matching entry wins
//! at dispatch, with no specificity ranking. Overlapping patterns (a
//! literal `/user/new` and a parametric `/user/{id}`) are disambiguated by
//! declaration order alone.

use crate::error::RouterResult;
use crate::pattern::PathPattern;
use crate::registry::ControllerRegistry;
use crate::sources::FileRouteSource;
use grappelli_http::{ActionDescriptor, ControllerId, HandlerRef};
use hyper::Method;
use tracing::debug;

/// One resolved, compiled route.
///
/// Immutable after construction and owned exclusively by the table.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
	pub method: Method,
	pub raw_path: String,
	pub pattern: PathPattern,
	pub handler: HandlerRef,
}

/// Ordered, immutable collection of compiled routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
	routes: Vec<CompiledRoute>,
}

impl RouteTable {
	pub fn routes(&self) -> &[CompiledRoute] {
		&self.routes
	}

	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

/// Builds a [`RouteTable`] from the registry and declaration sources.
///
/// Per discovered action, exactly one method + path pair is resolved:
/// in-code metadata first, then the explicit file route for
/// `(controller, action)`, then a base path (file-declared or
/// convention-derived) combined with the action name.
#[derive(Debug, Clone, Default)]
pub struct RouteTableBuilder {
	file: FileRouteSource,
}

impl RouteTableBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Use file-declared routes and group base paths during resolution.
	pub fn with_file_source(mut self, file: FileRouteSource) -> Self {
		self.file = file;
		self
	}

	/// Build the table over every action of every registered controller,
	/// in discovery order.
	///
	/// Fails fast on the first malformed path pattern; a table is either
	/// fully built or not built at all.
	pub fn build(&self, registry: &ControllerRegistry) -> RouterResult<RouteTable> {
		let mut routes = Vec::new();

		for descriptor in registry.descriptors() {
			for action in &descriptor.actions {
				let (method, raw_path) = self.resolve(&descriptor.id, action);
				let pattern = PathPattern::new(&raw_path)?;

				debug!(
					controller = %descriptor.id,
					action = %action.name,
					method = %method,
					path = %raw_path,
					"registered route",
				);

				routes.push(CompiledRoute {
					method,
					raw_path,
					pattern,
					handler: HandlerRef::new(descriptor.id.clone(), action.name.clone()),
				});
			}
		}

		Ok(RouteTable { routes })
	}

	/// Resolve the method + path for one action by source precedence.
	fn resolve(&self, controller: &ControllerId, action: &ActionDescriptor) -> (Method, String) {
		// 1. In-code metadata
		if let Some(meta) = &action.route {
			return (meta.method.clone(), meta.path.clone());
		}

		// 2. Explicit file route keyed by (controller, action)
		if let Some(meta) = self.file.route_for(controller, &action.name) {
			return (meta.method.clone(), meta.path.clone());
		}

		// 3. Base path + convention; methodless sources default to GET
		let base = match self.file.base_path(controller) {
			Some(Some(path)) => path.to_string(),
			_ => convention_base_path(controller),
		};
		(Method::GET, convention_action_path(&base, &action.name))
	}
}

/// Derive a controller group's base path from its identifier: strip a
/// trailing `Controller` from each segment, lowercase, join with `/`.
///
/// # Examples
///
/// ```
/// use grappelli_http::ControllerId;
/// use grappelli_urls::table::convention_base_path;
///
/// let id = ControllerId::new("Admin/DashboardController");
/// assert_eq!(convention_base_path(&id), "/admin/dashboard");
/// ```
pub fn convention_base_path(controller: &ControllerId) -> String {
	let segments: Vec<String> = controller
		.segments()
		.map(|s| s.strip_suffix("Controller").unwrap_or(s).to_lowercase())
		.collect();
	format!("/{}", segments.join("/"))
}

/// Combine a base path with an action name: `index` yields the base path
/// verbatim, any other action appends its lowercased name.
fn convention_action_path(base: &str, action: &str) -> String {
	if action.eq_ignore_ascii_case("index") {
		if base.is_empty() || base == "/" {
			"/".to_string()
		} else {
			base.to_string()
		}
	} else {
		format!("{}/{}", base.trim_end_matches('/'), action.to_lowercase())
	}
}

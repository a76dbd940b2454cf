//! Route-declaration sources.
//!
//! Three sources feed the route table, in precedence order:
//!
//! 1. In-code metadata — the optional [`RouteMeta`] riding on each
//!    registered [`ActionDescriptor`](grappelli_http::ActionDescriptor);
//!    read directly off the registry during the build.
//! 2. Explicit file routes — `(controller, action)` → method + path,
//!    from the `routes:` section of the declaration file.
//! 3. File-declared groups — controller → optional base path, from the
//!    `controllers:` section; a group without a base path (or not declared
//!    at all) falls back to the naming convention.
//!
//! This module holds the file-backed source; the in-code source needs no
//! representation of its own.

use crate::error::{RouterError, RouterResult};
use grappelli_conf::RoutesConfig;
use grappelli_http::{ControllerId, RouteMeta};
use hyper::Method;
use std::collections::HashMap;

/// File-declared routes and controller base paths.
#[derive(Debug, Clone, Default)]
pub struct FileRouteSource {
	/// (controller, action) → declared method + path.
	routes: HashMap<(String, String), RouteMeta>,
	/// controller → declared base path, `None` for a declared group that
	/// leaves the path to the convention.
	groups: HashMap<String, Option<String>>,
}

impl FileRouteSource {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build the source from a parsed declaration file.
	///
	/// Method strings are validated here, at build time; an unparseable
	/// method aborts startup instead of surfacing during dispatch.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_conf::RoutesConfig;
	/// use grappelli_urls::FileRouteSource;
	/// use grappelli_http::ControllerId;
	///
	/// let config = RoutesConfig::from_str(
	///     "routes:\n  - controller: Site/HomeController\n    action: show\n    method: get\n    path: /home/{id}\n",
	/// )
	/// .unwrap();
	/// let source = FileRouteSource::from_config(&config).unwrap();
	///
	/// let id = ControllerId::new("Site/HomeController");
	/// let meta = source.route_for(&id, "show").unwrap();
	/// assert_eq!(meta.method, hyper::Method::GET);
	/// assert_eq!(meta.path, "/home/{id}");
	/// ```
	pub fn from_config(config: &RoutesConfig) -> RouterResult<Self> {
		let mut source = Self::new();

		for entry in &config.routes {
			let method = parse_method(&entry.method).ok_or_else(|| RouterError::InvalidMethod {
				method: entry.method.clone(),
				controller: entry.controller.clone(),
				action: entry.action.clone(),
			})?;
			source.declare_route(
				&entry.controller,
				&entry.action,
				RouteMeta::new(method, entry.path.clone()),
			);
		}

		for entry in &config.controllers {
			source.declare_group(&entry.controller, entry.path.clone());
		}

		Ok(source)
	}

	/// Declare an explicit route for one controller action.
	pub fn declare_route(&mut self, controller: &str, action: &str, meta: RouteMeta) {
		self.routes
			.insert((controller.to_string(), action.to_string()), meta);
	}

	/// Declare a controller group, optionally with an explicit base path.
	pub fn declare_group(&mut self, controller: &str, base_path: Option<String>) {
		self.groups.insert(controller.to_string(), base_path);
	}

	/// The explicit file route for `(controller, action)`, if declared.
	pub fn route_for(&self, controller: &ControllerId, action: &str) -> Option<&RouteMeta> {
		self.routes
			.get(&(controller.as_str().to_string(), action.to_string()))
	}

	/// The declared base path for a controller group.
	///
	/// Outer `None` means the group is not declared in the file at all;
	/// `Some(None)` means it is declared without an explicit base path.
	/// Both cases resolve through the naming convention.
	pub fn base_path(&self, controller: &ControllerId) -> Option<Option<&str>> {
		self.groups
			.get(controller.as_str())
			.map(|path| path.as_deref())
	}
}

/// Parse a declared method string, normalizing case first.
fn parse_method(raw: &str) -> Option<Method> {
	let upper = raw.trim().to_ascii_uppercase();
	if upper.is_empty() {
		return None;
	}
	Method::from_bytes(upper.as_bytes()).ok()
}

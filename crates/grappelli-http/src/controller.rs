//! Controller boundary types.
//!
//! The routing engine never owns controller instances. It sees controllers
//! through two things defined here: a [`ControllerDescriptor`] describing
//! the public actions a controller exposes (names, formal parameters,
//! optional in-code route metadata), and the [`Controller`] trait through
//! which a resolved action is invoked with an ordered, coerced argument
//! list.
//!
//! Descriptors are supplied explicitly at registration time. This stands in
//! for runtime reflection: the descriptor carries exactly the metadata a
//! reflective runtime would read off the controller type.

use crate::Result;
use async_trait::async_trait;
use hyper::Method;
use std::fmt;

/// Identifier of a controller group, e.g. `"Admin/DashboardController"`.
///
/// Nested groups are separated by `/`; the segments feed the convention
/// fallback when no explicit route declaration exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControllerId(String);

impl ControllerId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The `/`-separated group segments
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::ControllerId;
	///
	/// let id = ControllerId::new("Admin/DashboardController");
	/// let segments: Vec<&str> = id.segments().collect();
	/// assert_eq!(segments, vec!["Admin", "DashboardController"]);
	/// ```
	pub fn segments(&self) -> impl Iterator<Item = &str> {
		self.0.split('/').filter(|s| !s.is_empty())
	}
}

impl fmt::Display for ControllerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for ControllerId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

/// Opaque reference to a controller action.
///
/// Resolved to a live instance only at invocation time, through the
/// registry. Never owns the handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerRef {
	pub controller: ControllerId,
	pub action: String,
}

impl HandlerRef {
	pub fn new(controller: impl Into<ControllerId>, action: impl Into<String>) -> Self {
		Self {
			controller: controller.into(),
			action: action.into(),
		}
	}
}

impl fmt::Display for HandlerRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}::{}", self.controller, self.action)
	}
}

/// Declared semantic type of a formal action parameter.
///
/// Only the first four are coercible from a path segment. `Other` records
/// any declared type the engine cannot coerce; dispatching to an action
/// with a captured `Other` parameter is a configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
	Str,
	Int,
	Float,
	Bool,
	Other(&'static str),
}

/// A bound argument produced per dispatch and discarded after the call.
///
/// `Absent` is the null binding for a formal parameter whose name does not
/// appear among the captured path segments.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
	Str(String),
	Int(i64),
	Float(f64),
	Bool(bool),
	Absent,
}

impl ParamValue {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ParamValue::Str(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			ParamValue::Int(n) => Some(*n),
			_ => None,
		}
	}

	pub fn as_float(&self) -> Option<f64> {
		match self {
			ParamValue::Float(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			ParamValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn is_absent(&self) -> bool {
		matches!(self, ParamValue::Absent)
	}
}

/// Ordered argument list passed to an action invocation.
///
/// Argument order follows the action's formal parameter declaration order.
#[derive(Debug, Clone, Default)]
pub struct ActionArgs(Vec<ParamValue>);

impl ActionArgs {
	pub fn new(values: Vec<ParamValue>) -> Self {
		Self(values)
	}

	pub fn get(&self, index: usize) -> Option<&ParamValue> {
		self.0.get(index)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &ParamValue> {
		self.0.iter()
	}
}

impl From<Vec<ParamValue>> for ActionArgs {
	fn from(values: Vec<ParamValue>) -> Self {
		Self(values)
	}
}

/// Value returned by an action; `None` becomes an empty response body.
pub type ActionValue = Option<String>;

/// In-code route metadata attached to an action declaration.
///
/// The highest-precedence declaration source: when present, file-declared
/// routes and convention fallback are ignored for that action.
#[derive(Debug, Clone)]
pub struct RouteMeta {
	pub method: Method,
	pub path: String,
}

impl RouteMeta {
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
		}
	}
}

/// A formal parameter of an action: name plus declared semantic type.
#[derive(Debug, Clone)]
pub struct ActionParam {
	pub name: String,
	pub ty: ParamType,
}

/// Description of one public, invocable action.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
	pub name: String,
	pub params: Vec<ActionParam>,
	pub route: Option<RouteMeta>,
}

impl ActionDescriptor {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			params: Vec::new(),
			route: None,
		}
	}

	/// Append a formal parameter; declaration order is binding order
	pub fn with_param(mut self, name: impl Into<String>, ty: ParamType) -> Self {
		self.params.push(ActionParam {
			name: name.into(),
			ty,
		});
		self
	}

	/// Attach in-code route metadata
	pub fn with_route(mut self, method: Method, path: impl Into<String>) -> Self {
		self.route = Some(RouteMeta::new(method, path));
		self
	}
}

/// Description of a controller: its id and the ordered set of public
/// actions it exposes.
///
/// # Examples
///
/// ```
/// use grappelli_http::{ActionDescriptor, ControllerDescriptor, ParamType};
/// use hyper::Method;
///
/// let descriptor = ControllerDescriptor::new("Site/UserController")
///     .with_action(
///         ActionDescriptor::new("show")
///             .with_param("id", ParamType::Int)
///             .with_route(Method::GET, "/user/{id}"),
///     );
/// assert_eq!(descriptor.actions.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ControllerDescriptor {
	pub id: ControllerId,
	pub actions: Vec<ActionDescriptor>,
}

impl ControllerDescriptor {
	pub fn new(id: impl Into<ControllerId>) -> Self {
		Self {
			id: id.into(),
			actions: Vec::new(),
		}
	}

	pub fn with_action(mut self, action: ActionDescriptor) -> Self {
		self.actions.push(action);
		self
	}

	pub fn action(&self, name: &str) -> Option<&ActionDescriptor> {
		self.actions.iter().find(|a| a.name == name)
	}
}

/// A live controller capable of executing its declared actions.
#[async_trait]
pub trait Controller: Send + Sync {
	/// The controller's action metadata, as a reflective runtime would
	/// report it
	fn descriptor(&self) -> ControllerDescriptor;

	/// Execute the named action with the bound, ordered argument list
	async fn call(&self, action: &str, args: ActionArgs) -> Result<ActionValue>;
}

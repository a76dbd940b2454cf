//! HTTP value types and the controller boundary for the Grappelli routing
//! engine.
//!
//! This crate defines the values that cross the routing core's boundary:
//! the [`Response`] returned to the transport layer, the framework-wide
//! [`Error`]/[`Result`] pair, and the [`Controller`] trait through which the
//! router discovers actions and invokes them.

pub mod controller;
pub mod exception;
pub mod response;

pub use controller::{
	ActionArgs, ActionDescriptor, ActionParam, ActionValue, Controller, ControllerDescriptor,
	ControllerId, HandlerRef, ParamType, ParamValue, RouteMeta,
};
pub use exception::{Error, Result};
pub use response::Response;

// Re-exported so downstream crates agree on method and status types
pub use hyper::{Method, StatusCode};

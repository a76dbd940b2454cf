//! Controller registry.
//!
//! The registry is the routing engine's only window onto controllers: it
//! holds the registered instances, exposes their action metadata in
//! registration order (the discovery order the route table preserves), and
//! executes invocations. Controllers register explicitly; the registry is
//! passed to its consumers as an argument, never looked up ambiently.

use grappelli_http::{
	ActionArgs, ActionParam, ActionValue, Controller, ControllerDescriptor, ControllerId, Error,
	HandlerRef, Result,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered store of registered controllers and their descriptors.
#[derive(Default)]
pub struct ControllerRegistry {
	controllers: HashMap<ControllerId, Arc<dyn Controller>>,
	/// Descriptors in registration order.
	descriptors: Vec<ControllerDescriptor>,
}

impl ControllerRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a controller instance.
	///
	/// The descriptor is read once at registration. Re-registering an id
	/// replaces the instance and descriptor in place, keeping the original
	/// discovery position.
	pub fn register(&mut self, controller: Arc<dyn Controller>) {
		let descriptor = controller.descriptor();
		let id = descriptor.id.clone();

		match self.descriptors.iter_mut().find(|d| d.id == id) {
			Some(existing) => *existing = descriptor,
			None => self.descriptors.push(descriptor),
		}
		self.controllers.insert(id, controller);
	}

	/// All registered descriptors, in registration order.
	pub fn descriptors(&self) -> &[ControllerDescriptor] {
		&self.descriptors
	}

	/// The descriptor for one controller.
	pub fn descriptor(&self, id: &ControllerId) -> Option<&ControllerDescriptor> {
		self.descriptors.iter().find(|d| &d.id == id)
	}

	/// The formal parameter list of one action, in declaration order.
	pub fn params(&self, handler: &HandlerRef) -> Option<&[ActionParam]> {
		self.descriptor(&handler.controller)
			.and_then(|d| d.action(&handler.action))
			.map(|a| a.params.as_slice())
	}

	/// Invoke an action through its registered controller.
	///
	/// # Errors
	///
	/// `Error::Internal` when the handler reference does not resolve to a
	/// registered controller; controller-level failures propagate as-is.
	pub async fn invoke(&self, handler: &HandlerRef, args: ActionArgs) -> Result<ActionValue> {
		let controller = self.controllers.get(&handler.controller).ok_or_else(|| {
			Error::Internal(format!("no controller registered for {}", handler))
		})?;
		controller.call(&handler.action, args).await
	}

	pub fn len(&self) -> usize {
		self.descriptors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.descriptors.is_empty()
	}
}

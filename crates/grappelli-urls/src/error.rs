use thiserror::Error;

/// Build-time routing errors.
///
/// These abort route-table construction during startup; none of them can
/// reach a dispatch call.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RouterError {
	#[error("Malformed path pattern `{pattern}`: {reason}")]
	MalformedPattern { pattern: String, reason: String },

	#[error("Duplicate placeholder `{name}` in pattern `{pattern}`")]
	DuplicateParam { pattern: String, name: String },

	#[error("Invalid HTTP method `{method}` declared for {controller}::{action}")]
	InvalidMethod {
		method: String,
		controller: String,
		action: String,
	},
}

pub type RouterResult<T> = std::result::Result<T, RouterError>;

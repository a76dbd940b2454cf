use thiserror::Error;

/// Framework-level error type.
///
/// Routing failures (missing route, bad parameter) never surface through
/// this type — the dispatcher converts them into response values. `Error`
/// carries the failures that do cross the boundary: controller-level faults
/// and misuse of the engine itself.
#[derive(Debug, Error)]
pub enum Error {
	#[error("Not found: {0}")]
	NotFound(String),

	#[error("Http error: {0}")]
	Http(String),

	#[error("Internal error: {0}")]
	Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Route-declaration file loading.
//!
//! The document shape:
//!
//! ```yaml
//! app:
//!   name: example
//!   version: "1.0"
//!
//! routes:
//!   - controller: Site/HomeController
//!     action: show
//!     method: GET
//!     path: /home/{id}
//!
//! controllers:
//!   - controller: Admin/DashboardController
//!     path: /admin
//! ```
//!
//! A `controllers:` entry may omit `path`, which declares the group without
//! a base path and leaves path derivation to the naming convention.

use crate::settings::AppSettings;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error type for declaration-file sources
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("YAML error: {0}")]
	Yaml(#[from] serde_yaml::Error),

	#[error("Routes file not found: {0}")]
	NotFound(String),
}

/// An explicit file-declared route for one controller action.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteEntry {
	pub controller: String,
	pub action: String,
	pub method: String,
	pub path: String,
}

/// A file-declared controller group with an optional base path.
#[derive(Debug, Clone, Deserialize)]
pub struct ControllerEntry {
	pub controller: String,
	#[serde(default)]
	pub path: Option<String>,
}

/// Parsed route-declaration document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoutesConfig {
	#[serde(default)]
	pub app: AppSettings,
	#[serde(default)]
	pub routes: Vec<RouteEntry>,
	#[serde(default)]
	pub controllers: Vec<ControllerEntry>,
}

impl RoutesConfig {
	/// Parse a route-declaration document from a YAML string
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_conf::RoutesConfig;
	///
	/// let config = RoutesConfig::from_str(
	///     "routes:\n  - controller: Site/HomeController\n    action: show\n    method: GET\n    path: /home/{id}\n",
	/// )
	/// .unwrap();
	/// assert_eq!(config.routes.len(), 1);
	/// assert_eq!(config.routes[0].path, "/home/{id}");
	/// ```
	pub fn from_str(source: &str) -> Result<Self, SourceError> {
		Ok(serde_yaml::from_str(source)?)
	}

	/// Load a route-declaration document from a file path
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
		let path = path.as_ref();
		if !path.exists() {
			return Err(SourceError::NotFound(path.display().to_string()));
		}
		let source = fs::read_to_string(path)?;
		Self::from_str(&source)
	}
}

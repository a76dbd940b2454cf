use serde::Deserialize;

/// Basic application settings carried in the `app:` section of the
/// declaration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSettings {
	pub name: String,
	pub version: String,
	pub debug: bool,
}

impl Default for AppSettings {
	fn default() -> Self {
		Self {
			name: "grappelli".to_string(),
			version: "0.0.0".to_string(),
			debug: false,
		}
	}
}

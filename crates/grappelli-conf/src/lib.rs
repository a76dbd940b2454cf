//! Declarative configuration for the Grappelli routing engine.
//!
//! Routing declarations can live outside the code, in a YAML document with
//! two sections: `routes:` (explicit method + path per controller action)
//! and `controllers:` (base paths per controller group, used with the
//! naming-convention fallback). An optional `app:` section carries basic
//! application settings.
//!
//! Loading is a build-time concern: parse failures abort startup, they are
//! never deferred to request time.

pub mod routes_file;
pub mod settings;

pub use routes_file::{ControllerEntry, RouteEntry, RoutesConfig, SourceError};
pub use settings::AppSettings;

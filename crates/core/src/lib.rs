//! brandkit-core
//!
//! Core library for white-label mobile app branding.
//!
//! This crate defines the brand model, the in-memory brand store used by
//! editing frontends, the build-configuration exporter, the installer that
//! writes one brand into an app checkout, and the runtime view the app
//! derives from the installed values.
//!
//! All substantive logic lives here so it is fully testable and reusable
//! from multiple frontends.

pub mod model;
pub mod store;
pub mod export;
pub mod install;
pub mod document;
pub mod runtime;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

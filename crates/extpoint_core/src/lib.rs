//! In-process plugin registry.
//!
//! Hosts declare extension points on named managers; plugins attach
//! implementations to them through `manager/extension` paths, optionally
//! checked against a capability at registration time.

pub mod extension;
pub mod logging;
pub mod registry;

pub use extension::capability::Capability;
pub use extension::implementation::Implementation;
pub use extension::plugin::{Plugin, PluginInfo};
pub use extension::point::{Extension, ExtensionInfo};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use registry::default_registry::{create_manager, register, with_default_registry};
pub use registry::directory::PluginRegistry;
pub use registry::error::{CollisionError, RegisterError};
pub use registry::manager::ManagerHandle;
pub use registry::path::{ExtensionPath, EXTENSION_PATH_SEPARATOR};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

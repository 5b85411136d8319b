//! Per-thread default registry.
//!
//! Convenience surface for hosts that do not thread a [`PluginRegistry`]
//! through their code. Each thread sees its own directory; prefer an explicit
//! registry wherever one can be passed.

use crate::extension::plugin::Plugin;
use crate::registry::directory::{dispatch, PluginRegistry};
use crate::registry::error::RegisterError;
use crate::registry::manager::ManagerHandle;
use std::cell::RefCell;

thread_local! {
    static DEFAULT_REGISTRY: RefCell<PluginRegistry> = RefCell::new(PluginRegistry::new());
}

/// Runs `f` with mutable access to this thread's default registry.
///
/// Calling back into this module from inside `f` panics.
pub fn with_default_registry<R>(f: impl FnOnce(&mut PluginRegistry) -> R) -> R {
    DEFAULT_REGISTRY.with(|registry| f(&mut registry.borrow_mut()))
}

/// Creates a manager in the default registry, replacing any with the same id.
pub fn create_manager(id: impl Into<String>) -> ManagerHandle {
    with_default_registry(|registry| registry.create_manager(id))
}

pub fn manager(id: &str) -> Option<ManagerHandle> {
    DEFAULT_REGISTRY.with(|registry| registry.borrow().manager(id))
}

/// Registers `plugin` against the default registry.
///
/// The directory is only borrowed to resolve the manager, so capability
/// predicates may call any function of this module. They must not run
/// inside a [`with_default_registry`] closure.
pub fn register(plugin: Plugin) -> Result<(), RegisterError> {
    dispatch(plugin, manager)
}

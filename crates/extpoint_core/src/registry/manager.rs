//! Plugin manager: one namespace of extension points.
//!
//! # Responsibility
//! - Own the extensions a host declared and the plugins accepted by each.
//! - Keep a per-extension implementation index for lookup.
//!
//! # Invariants
//! - For every extension, `plugins()[i].implementation()` and
//!   `implementations[id][i]` are the same value, same length, same order.
//! - A rejected registration leaves both sequences untouched.
//! - A plugin is only appended to the extension whose capability accepted it.

use crate::extension::implementation::Implementation;
use crate::extension::plugin::Plugin;
use crate::extension::point::{Extension, ExtensionInfo};
use crate::registry::error::{CollisionError, RegisterError};
use crate::registry::path::ExtensionPath;
use log::{info, warn};
use std::any::Any;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Registry state for one manager id.
#[derive(Debug)]
pub(crate) struct Manager {
    id: String,
    extensions: BTreeMap<String, Extension>,
    implementations: BTreeMap<String, Vec<Implementation>>,
    next_revision: u64,
}

impl Manager {
    fn new(id: String) -> Self {
        Self {
            id,
            extensions: BTreeMap::new(),
            implementations: BTreeMap::new(),
            next_revision: 0,
        }
    }

    #[cfg(test)]
    fn extension(&self, extension_id: &str) -> Option<&Extension> {
        self.extensions.get(extension_id)
    }

    fn insert_extension(&mut self, mut extension: Extension) -> bool {
        self.next_revision += 1;
        extension.set_revision(self.next_revision);
        let id = extension.id().to_string();
        // Plugins of a replaced extension are orphaned with it.
        self.implementations.insert(id.clone(), Vec::new());
        self.extensions.insert(id, extension).is_some()
    }

    /// Appends to the extension stamped `revision`, the one that was checked.
    fn push(
        &mut self,
        extension_id: &str,
        revision: u64,
        plugin: Plugin,
    ) -> Result<usize, RegisterError> {
        let Some(extension) = self.extensions.get_mut(extension_id) else {
            return Err(RegisterError::UnknownExtension {
                manager_id: self.id.clone(),
                extension_id: extension_id.to_string(),
            });
        };
        if extension.revision() != revision {
            return Err(RegisterError::ExtensionReplaced {
                manager_id: self.id.clone(),
                extension_id: extension_id.to_string(),
            });
        }
        let index = self
            .implementations
            .entry(extension_id.to_string())
            .or_default();
        index.push(plugin.implementation().clone());
        extension.push_plugin(plugin);
        Ok(index.len() - 1)
    }
}

/// Shared handle to one manager's registry state.
///
/// Every clone observes the same state, so a plugin registered through the
/// registry is visible to the host that created the manager.
#[derive(Debug, Clone)]
pub struct ManagerHandle {
    inner: Rc<RefCell<Manager>>,
}

impl ManagerHandle {
    pub(crate) fn new(id: String) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Manager::new(id))),
        }
    }

    pub fn id(&self) -> String {
        self.inner.borrow().id.clone()
    }

    /// Adds an extension point, silently replacing one with the same id.
    pub fn add_extension(&self, extension: Extension) {
        let mut manager = self.inner.borrow_mut();
        let extension_id = extension.id().to_string();
        if manager.insert_extension(extension) {
            warn!(
                "event=extension_add module=manager status=replaced manager={} extension={}",
                manager.id, extension_id
            );
        } else {
            info!(
                "event=extension_add module=manager status=ok manager={} extension={}",
                manager.id, extension_id
            );
        }
    }

    /// Adds an extension point, failing if the id is already taken.
    pub fn try_add_extension(&self, extension: Extension) -> Result<(), CollisionError> {
        {
            let manager = self.inner.borrow();
            if manager.extensions.contains_key(extension.id()) {
                return Err(CollisionError::DuplicateExtension {
                    manager_id: manager.id.clone(),
                    extension_id: extension.id().to_string(),
                });
            }
        }
        self.add_extension(extension);
        Ok(())
    }

    /// Implementations registered against `extension_id`, in registration
    /// order. Unknown ids and extensions without plugins both yield an
    /// empty list.
    pub fn implementations(&self, extension_id: &str) -> Vec<Implementation> {
        self.inner
            .borrow()
            .implementations
            .get(extension_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Typed lookup: only implementations holding a `T`, in order.
    pub fn implementations_as<T: Any>(&self, extension_id: &str) -> Vec<Rc<T>> {
        self.inner
            .borrow()
            .implementations
            .get(extension_id)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Implementation::downcast_rc::<T>)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn extension_count(&self) -> usize {
        self.inner.borrow().extensions.len()
    }

    /// Extension and plugin metadata, ordered by extension id.
    pub fn describe(&self) -> Vec<ExtensionInfo> {
        self.inner
            .borrow()
            .extensions
            .values()
            .map(Extension::info)
            .collect()
    }

    #[cfg(test)]
    fn with_manager<R>(&self, f: impl FnOnce(&Manager) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Resolves the extension, checks its capability and appends the plugin.
    ///
    /// Returns the position of the new implementation. Fails with
    /// `ExtensionReplaced` when the capability predicate swapped the
    /// extension out while it ran.
    pub(crate) fn attach(
        &self,
        path: &ExtensionPath,
        plugin: Plugin,
    ) -> Result<usize, RegisterError> {
        let (revision, capability) = {
            let manager = self.inner.borrow();
            let Some(extension) = manager.extensions.get(path.extension_id()) else {
                return Err(RegisterError::UnknownExtension {
                    manager_id: manager.id.clone(),
                    extension_id: path.extension_id().to_string(),
                });
            };
            (extension.revision(), extension.capability().cloned())
        };

        // Evaluated outside the borrow so predicates may read this manager.
        if let Some(capability) = capability {
            if !capability.is_satisfied_by(plugin.implementation()) {
                return Err(RegisterError::CapabilityMismatch {
                    path: path.to_string(),
                    capability: capability.name().to_string(),
                    implementation_type: plugin.implementation().type_name().to_string(),
                });
            }
        }

        self.inner
            .borrow_mut()
            .push(path.extension_id(), revision, plugin)
    }
}

//! Caller-owned directory of plugin managers.

use crate::extension::plugin::Plugin;
use crate::registry::error::{CollisionError, RegisterError};
use crate::registry::manager::ManagerHandle;
use crate::registry::path::ExtensionPath;
use log::{info, warn};
use std::collections::BTreeMap;

/// Maps manager ids to managers and routes plugin registrations.
///
/// Hosts construct one registry in their composition root and pass it to
/// whatever code declares extensions or registers plugins.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    managers: BTreeMap<String, ManagerHandle>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager and stores it under `id`.
    ///
    /// An existing manager with the same id is replaced; its extensions and
    /// plugins stay reachable only through handles the caller still holds.
    pub fn create_manager(&mut self, id: impl Into<String>) -> ManagerHandle {
        let id = id.into();
        let handle = ManagerHandle::new(id.clone());
        if self.managers.insert(id.clone(), handle.clone()).is_some() {
            warn!("event=manager_create module=registry status=replaced manager={id}");
        } else {
            info!("event=manager_create module=registry status=ok manager={id}");
        }
        handle
    }

    /// Like [`PluginRegistry::create_manager`] but refuses to replace.
    pub fn try_create_manager(
        &mut self,
        id: impl Into<String>,
    ) -> Result<ManagerHandle, CollisionError> {
        let id = id.into();
        if self.managers.contains_key(id.as_str()) {
            return Err(CollisionError::DuplicateManager(id));
        }
        Ok(self.create_manager(id))
    }

    pub fn manager(&self, id: &str) -> Option<ManagerHandle> {
        self.managers.get(id).cloned()
    }

    /// Returns sorted manager ids.
    pub fn manager_ids(&self) -> Vec<String> {
        self.managers.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }

    /// Attaches `plugin` to the extension named by its path.
    ///
    /// Fails without touching any state when the path is malformed, the
    /// manager or extension is unknown, or the implementation does not
    /// satisfy the extension capability.
    pub fn register(&self, plugin: Plugin) -> Result<(), RegisterError> {
        dispatch(plugin, |manager_id| self.manager(manager_id))
    }
}

/// Runs registration with `lookup` resolving the manager id, and logs the
/// outcome. `lookup` returns an owned handle so the caller's directory is no
/// longer borrowed while the capability check runs.
pub(crate) fn dispatch(
    plugin: Plugin,
    lookup: impl FnOnce(&str) -> Option<ManagerHandle>,
) -> Result<(), RegisterError> {
    let raw_path = plugin.extension_path().to_string();
    let implementation_type = plugin.implementation().type_name();
    match route(plugin, lookup) {
        Ok(position) => {
            info!(
                "event=plugin_register module=registry status=ok path={} implementation={} position={}",
                raw_path, implementation_type, position
            );
            Ok(())
        }
        Err(err) => {
            warn!(
                "event=plugin_register module=registry status=rejected path={} implementation={} code={}",
                raw_path,
                implementation_type,
                err.code()
            );
            Err(err)
        }
    }
}

fn route(
    plugin: Plugin,
    lookup: impl FnOnce(&str) -> Option<ManagerHandle>,
) -> Result<usize, RegisterError> {
    let path = ExtensionPath::parse(plugin.extension_path())?;
    let manager = lookup(path.manager_id())
        .ok_or_else(|| RegisterError::UnknownManager(path.manager_id().to_string()))?;
    manager.attach(&path, plugin)
}

#[cfg(test)]
mod tests {
    use super::PluginRegistry;
    use crate::extension::implementation::Implementation;
    use crate::extension::plugin::Plugin;
    use crate::extension::point::Extension;
    use crate::registry::error::{CollisionError, RegisterError};

    #[test]
    fn new_registry_is_empty() {
        let registry = PluginRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.manager("foo").is_none());
    }

    #[test]
    fn create_manager_inserts_and_returns_shared_handle() {
        let mut registry = PluginRegistry::new();
        let handle = registry.create_manager("foo");

        let looked_up = registry.manager("foo").expect("manager registered");
        assert!(handle.ptr_eq(&looked_up));
        assert_eq!(registry.manager_ids(), vec!["foo".to_string()]);
    }

    #[test]
    fn register_is_visible_through_host_handle() {
        let mut registry = PluginRegistry::new();
        let host = registry.create_manager("foo");
        host.add_extension(Extension::open("bar"));

        registry
            .register(Plugin::new("foo/bar", Implementation::new(42_u64)))
            .expect("registration should succeed");

        let implementations = host.implementations("bar");
        assert_eq!(implementations.len(), 1);
        assert_eq!(implementations[0].downcast_ref::<u64>(), Some(&42));
    }

    #[test]
    fn register_reports_first_failing_step() {
        let mut registry = PluginRegistry::new();
        registry.create_manager("foo");

        let err = registry
            .register(Plugin::new("onlyonesegment", Implementation::new(())))
            .expect_err("malformed path");
        assert_eq!(err, RegisterError::MalformedPath("onlyonesegment".to_string()));

        let err = registry
            .register(Plugin::new("nope/bar", Implementation::new(())))
            .expect_err("unknown manager");
        assert_eq!(err, RegisterError::UnknownManager("nope".to_string()));

        let err = registry
            .register(Plugin::new("foo/missing", Implementation::new(())))
            .expect_err("unknown extension");
        assert!(matches!(err, RegisterError::UnknownExtension { .. }));
    }

    #[test]
    fn recreated_manager_replaces_previous_one() {
        let mut registry = PluginRegistry::new();
        let first = registry.create_manager("foo");
        first.add_extension(Extension::open("old"));
        let second = registry.create_manager("foo");
        second.add_extension(Extension::open("new"));

        assert_eq!(registry.len(), 1);
        let err = registry
            .register(Plugin::new("foo/old", Implementation::new(1_u8)))
            .expect_err("old extension is no longer reachable");
        assert!(matches!(err, RegisterError::UnknownExtension { .. }));

        registry
            .register(Plugin::new("foo/new", Implementation::new(1_u8)))
            .expect("new manager accepts");
        assert_eq!(second.implementations("new").len(), 1);
        assert!(first.implementations("new").is_empty());
    }

    #[test]
    fn try_create_manager_rejects_taken_id() {
        let mut registry = PluginRegistry::new();
        let original = registry.try_create_manager("foo").expect("first create");

        let err = registry
            .try_create_manager("foo")
            .expect_err("duplicate create must fail");
        assert_eq!(err, CollisionError::DuplicateManager("foo".to_string()));
        let current = registry.manager("foo").expect("manager still present");
        assert!(original.ptr_eq(&current));
    }
}

//! Extension points declared by the host.

use crate::extension::capability::Capability;
use crate::extension::plugin::{Plugin, PluginInfo};
use serde::Serialize;

/// Named slot plugins attach to.
///
/// `id` is unique within the owning manager. When `capability` is set it is
/// evaluated once per registration; otherwise every implementation is
/// accepted and shape mismatches only surface when the host uses the value.
#[derive(Debug)]
pub struct Extension {
    id: String,
    capability: Option<Capability>,
    name: String,
    description: String,
    plugins: Vec<Plugin>,
    revision: u64,
}

impl Extension {
    pub fn new(
        id: impl Into<String>,
        capability: Option<Capability>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            capability,
            name: name.into(),
            description: description.into(),
            plugins: Vec::new(),
            revision: 0,
        }
    }

    /// Extension without capability check or metadata.
    pub fn open(id: impl Into<String>) -> Self {
        Self::new(id, None, "", "")
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn capability(&self) -> Option<&Capability> {
        self.capability.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Accepted plugins in registration order.
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Stamp assigned by the owning manager when the extension is added.
    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn set_revision(&mut self, revision: u64) {
        self.revision = revision;
    }

    pub(crate) fn push_plugin(&mut self, plugin: Plugin) {
        self.plugins.push(plugin);
    }

    pub fn info(&self) -> ExtensionInfo {
        ExtensionInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            capability: self
                .capability
                .as_ref()
                .map(|capability| capability.name().to_string()),
            plugins: self.plugins.iter().map(Plugin::info).collect(),
        }
    }
}

/// Serializable extension snapshot for dynamic management views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub capability: Option<String>,
    pub plugins: Vec<PluginInfo>,
}

//! Plugin descriptions supplied by plugin authors.

use crate::extension::implementation::Implementation;
use serde::Serialize;

/// One implementation plus the extension path it attaches to.
///
/// `extension_path` has the form `<manager_id>/<extension_id>`, for example
/// `helloworld/get_word`. Metadata fields are informational and default to
/// empty strings.
#[derive(Debug, Clone)]
pub struct Plugin {
    extension_path: String,
    implementation: Implementation,
    name: String,
    description: String,
    version: String,
    author: String,
    copyright: String,
}

impl Plugin {
    pub fn new(extension_path: impl Into<String>, implementation: Implementation) -> Self {
        Self {
            extension_path: extension_path.into(),
            implementation,
            name: String::new(),
            description: String::new(),
            version: String::new(),
            author: String::new(),
            copyright: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    pub fn extension_path(&self) -> &str {
        &self.extension_path
    }

    pub fn implementation(&self) -> &Implementation {
        &self.implementation
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Metadata snapshot without the implementation value.
    pub fn info(&self) -> PluginInfo {
        PluginInfo {
            extension_path: self.extension_path.clone(),
            implementation_type: self.implementation.type_name().to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            version: self.version.clone(),
            author: self.author.clone(),
            copyright: self.copyright.clone(),
        }
    }
}

/// Serializable plugin metadata used for dynamic management views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    pub extension_path: String,
    pub implementation_type: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: String,
    pub copyright: String,
}

//! Registry error types.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Plugin registration failures.
///
/// Every variant is terminal for the call and leaves registry state exactly
/// as it was before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// Path does not split into exactly two non-empty `/` segments.
    MalformedPath(String),
    UnknownManager(String),
    UnknownExtension {
        manager_id: String,
        extension_id: String,
    },
    CapabilityMismatch {
        path: String,
        capability: String,
        implementation_type: String,
    },
    /// The extension was replaced while its capability was being evaluated,
    /// so the check no longer applies to the extension now under that id.
    ExtensionReplaced {
        manager_id: String,
        extension_id: String,
    },
}

impl RegisterError {
    /// Stable machine-readable code, used in log records.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedPath(_) => "malformed_path",
            Self::UnknownManager(_) => "unknown_manager",
            Self::UnknownExtension { .. } => "unknown_extension",
            Self::CapabilityMismatch { .. } => "capability_mismatch",
            Self::ExtensionReplaced { .. } => "extension_replaced",
        }
    }
}

impl Display for RegisterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedPath(value) => write!(
                f,
                "extension path is malformed, expected `manager/extension`: {value}"
            ),
            Self::UnknownManager(value) => write!(f, "plugin manager not found: {value}"),
            Self::UnknownExtension {
                manager_id,
                extension_id,
            } => write!(
                f,
                "extension `{extension_id}` not found in manager `{manager_id}`"
            ),
            Self::CapabilityMismatch {
                path,
                capability,
                implementation_type,
            } => write!(
                f,
                "implementation `{implementation_type}` does not satisfy capability `{capability}` required by `{path}`"
            ),
            Self::ExtensionReplaced {
                manager_id,
                extension_id,
            } => write!(
                f,
                "extension `{extension_id}` in manager `{manager_id}` was replaced during its capability check"
            ),
        }
    }
}

impl Error for RegisterError {}

/// Id collisions rejected by the strict `try_*` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionError {
    DuplicateManager(String),
    DuplicateExtension {
        manager_id: String,
        extension_id: String,
    },
}

impl Display for CollisionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateManager(value) => write!(f, "plugin manager already exists: {value}"),
            Self::DuplicateExtension {
                manager_id,
                extension_id,
            } => write!(
                f,
                "extension `{extension_id}` already exists in manager `{manager_id}`"
            ),
        }
    }
}

impl Error for CollisionError {}

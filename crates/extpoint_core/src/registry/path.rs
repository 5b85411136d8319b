//! `manager/extension` path parsing.

use crate::registry::error::RegisterError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Segment separator inside an extension path.
pub const EXTENSION_PATH_SEPARATOR: char = '/';

/// Parsed plugin target: exactly one manager id and one extension id.
///
/// Segments are taken verbatim; no trimming or case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionPath {
    manager_id: String,
    extension_id: String,
}

impl ExtensionPath {
    pub fn parse(raw: &str) -> Result<Self, RegisterError> {
        let mut segments = raw.split(EXTENSION_PATH_SEPARATOR);
        match (segments.next(), segments.next(), segments.next()) {
            (Some(manager_id), Some(extension_id), None)
                if !manager_id.is_empty() && !extension_id.is_empty() =>
            {
                Ok(Self {
                    manager_id: manager_id.to_string(),
                    extension_id: extension_id.to_string(),
                })
            }
            _ => Err(RegisterError::MalformedPath(raw.to_string())),
        }
    }

    pub fn manager_id(&self) -> &str {
        &self.manager_id
    }

    pub fn extension_id(&self) -> &str {
        &self.extension_id
    }
}

impl FromStr for ExtensionPath {
    type Err = RegisterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Display for ExtensionPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.manager_id, EXTENSION_PATH_SEPARATOR, self.extension_id
        )
    }
}

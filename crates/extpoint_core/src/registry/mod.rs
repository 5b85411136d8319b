//! Plugin registration wiring.
//!
//! A [`directory::PluginRegistry`] maps manager ids to managers; each
//! [`manager::ManagerHandle`] owns extension points and the implementations
//! attached to them. Registration resolves a `manager/extension` path,
//! runs the optional capability check and appends in order.

pub mod default_registry;
pub mod directory;
pub mod error;
pub mod manager;
pub mod path;

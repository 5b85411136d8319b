//! Extension point contracts.
//!
//! Value types shared by hosts and plugin authors: the extension slot, the
//! plugin description, the opaque implementation value and the optional
//! capability check. Registration wiring lives in [`crate::registry`].

pub mod capability;
pub mod implementation;
pub mod plugin;
pub mod point;

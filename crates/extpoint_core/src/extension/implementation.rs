//! Type-erased implementation values carried by plugins.

use std::any::{type_name, Any};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Shared implementation value attached to one plugin.
///
/// Cloning keeps pointer identity: the plugin list of an extension and the
/// manager lookup index hold clones of the same value.
#[derive(Clone)]
pub struct Implementation {
    value: Rc<dyn Any>,
    type_name: &'static str,
}

impl Implementation {
    pub fn new<T: Any>(value: T) -> Self {
        Self::from_rc(Rc::new(value))
    }

    /// Wraps an already shared value without another allocation.
    pub fn from_rc<T: Any>(value: Rc<T>) -> Self {
        Self {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Rust type name of the wrapped value, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        (*self.value).is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).downcast_ref::<T>()
    }

    /// Returns a shared handle to the wrapped value when it holds a `T`.
    pub fn downcast_rc<T: Any>(&self) -> Option<Rc<T>> {
        Rc::clone(&self.value).downcast::<T>().ok()
    }

    /// True when both handles point at the same underlying value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl Debug for Implementation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Implementation({})", self.type_name)
    }
}

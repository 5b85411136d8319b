//! Capability descriptors evaluated when a plugin attaches to an extension.
//!
//! # Responsibility
//! - Describe what an implementation must provide to be accepted by one
//!   extension point.
//! - Keep the check opt-in: extensions without a capability accept any value.
//!
//! # Invariants
//! - Evaluating a capability never mutates the implementation.
//! - The same implementation always yields the same verdict.

use crate::extension::implementation::Implementation;
use std::any::{type_name, Any};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Conformance check declared by an extension point.
///
/// [`Capability::of`] accepts implementations holding a `T`. With
/// `T = Box<dyn Trait>` it acts as a trait conformance check, because only
/// types implementing `Trait` can be coerced into that box:
///
/// ```
/// use extpoint_core::{Capability, Implementation};
///
/// trait Sayable {
///     fn say(&self) -> String;
/// }
///
/// struct Bar;
/// impl Sayable for Bar {
///     fn say(&self) -> String {
///         "hello".to_string()
///     }
/// }
///
/// struct NoBar;
///
/// let sayable = Capability::named::<Box<dyn Sayable>>("Sayable");
/// let bar = Implementation::new(Box::new(Bar) as Box<dyn Sayable>);
/// assert!(sayable.is_satisfied_by(&bar));
/// assert!(!sayable.is_satisfied_by(&Implementation::new(NoBar)));
/// // Unwrapped values are rejected even when the type implements the trait.
/// assert!(!sayable.is_satisfied_by(&Implementation::new(Bar)));
/// ```
#[derive(Clone)]
pub struct Capability {
    name: String,
    predicate: Rc<dyn Fn(&Implementation) -> bool>,
}

impl Capability {
    /// Caller-supplied validator form.
    pub fn new(
        name: impl Into<String>,
        predicate: impl Fn(&Implementation) -> bool + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Rc::new(predicate),
        }
    }

    /// Requires the implementation to hold exactly a `T`, named after the
    /// Rust type.
    ///
    /// The match is on the stored type, not on trait impls. For
    /// `T = Box<dyn Trait>`, plugin authors must wrap their value as
    /// `Implementation::new(Box::new(value) as Box<dyn Trait>)`; a bare
    /// `Implementation::new(value)` is rejected even when its type
    /// implements `Trait`.
    pub fn of<T: Any>() -> Self {
        Self::named::<T>(type_name::<T>())
    }

    /// Same as [`Capability::of`] with a human-readable name.
    ///
    /// Plugins targeting a `Capability::named::<Box<dyn Trait>>(..)`
    /// extension must register `Box<dyn Trait>` values; see
    /// [`Capability::of`].
    pub fn named<T: Any>(name: impl Into<String>) -> Self {
        Self::new(name, |implementation: &Implementation| {
            implementation.is::<T>()
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_satisfied_by(&self, implementation: &Implementation) -> bool {
        (self.predicate)(implementation)
    }
}

impl Debug for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

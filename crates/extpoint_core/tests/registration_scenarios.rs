use extpoint_core::{
    Capability, Extension, Implementation, Plugin, PluginRegistry, RegisterError,
};

trait Sayable {
    fn say(&self) -> String;
}

struct Bar;

impl Sayable for Bar {
    fn say(&self) -> String {
        "Hello world".to_string()
    }
}

struct NoBar;

fn sayable(value: impl Sayable + 'static) -> Implementation {
    Implementation::new(Box::new(value) as Box<dyn Sayable>)
}

fn registry_with_sayable_extension() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    let manager = registry.create_manager("foo");
    manager.add_extension(Extension::new(
        "bar",
        Some(Capability::named::<Box<dyn Sayable>>("Sayable")),
        "bar",
        "bar",
    ));
    registry
}

#[test]
fn conforming_plugin_is_accepted_and_non_conforming_is_rejected() {
    let registry = registry_with_sayable_extension();
    let manager = registry.manager("foo").expect("manager foo");

    let a = sayable(Bar);
    registry
        .register(Plugin::new("foo/bar", a.clone()))
        .expect("Bar satisfies Sayable");
    let implementations = manager.implementations("bar");
    assert_eq!(implementations.len(), 1);
    assert!(implementations[0].ptr_eq(&a));

    let err = registry
        .register(Plugin::new("foo/bar", Implementation::new(NoBar)))
        .expect_err("NoBar does not satisfy Sayable");
    assert!(matches!(
        err,
        RegisterError::CapabilityMismatch { ref capability, .. } if capability == "Sayable"
    ));

    let after = manager.implementations("bar");
    assert_eq!(after.len(), 1);
    assert!(after[0].ptr_eq(&a));

    let greeting = after[0]
        .downcast_ref::<Box<dyn Sayable>>()
        .expect("accepted implementation is Sayable")
        .say();
    assert_eq!(greeting, "Hello world");
}

#[test]
fn new_implementation_lands_at_count_of_prior_registrations() {
    let registry = registry_with_sayable_extension();
    let manager = registry.manager("foo").expect("manager foo");

    for expected_position in 0..4 {
        let implementation = sayable(Bar);
        registry
            .register(Plugin::new("foo/bar", implementation.clone()))
            .expect("registration");
        let implementations = manager.implementations("bar");
        assert_eq!(implementations.len(), expected_position + 1);
        assert!(implementations[expected_position].ptr_eq(&implementation));
    }
}

#[test]
fn unknown_extension_in_existing_manager() {
    let registry = registry_with_sayable_extension();
    let err = registry
        .register(Plugin::new("foo/missing", sayable(Bar)))
        .expect_err("missing extension");
    assert_eq!(
        err,
        RegisterError::UnknownExtension {
            manager_id: "foo".to_string(),
            extension_id: "missing".to_string(),
        }
    );
}

#[test]
fn unknown_manager_and_malformed_paths() {
    let registry = registry_with_sayable_extension();

    let err = registry
        .register(Plugin::new("nobody/bar", sayable(Bar)))
        .expect_err("missing manager");
    assert_eq!(err, RegisterError::UnknownManager("nobody".to_string()));

    for raw in ["onlyonesegment", "foo/bar/baz", "foo/", "/bar", ""] {
        let err = registry
            .register(Plugin::new(raw, sayable(Bar)))
            .expect_err("malformed path");
        assert_eq!(err, RegisterError::MalformedPath(raw.to_string()));
    }

    let manager = registry.manager("foo").expect("manager foo");
    assert!(manager.implementations("bar").is_empty());
}

#[test]
fn open_extension_accepts_any_shape() {
    let mut registry = PluginRegistry::new();
    let manager = registry.create_manager("host");
    manager.add_extension(Extension::new("anything", None, "Anything", "no check"));

    registry
        .register(Plugin::new("host/anything", Implementation::new(NoBar)))
        .expect("struct accepted");
    registry
        .register(Plugin::new("host/anything", Implementation::new(17_u16)))
        .expect("integer accepted");
    registry
        .register(Plugin::new("host/anything", sayable(Bar)))
        .expect("trait object accepted");

    assert_eq!(manager.implementations("anything").len(), 3);
    assert_eq!(manager.implementations_as::<u16>("anything").len(), 1);
}

#[test]
fn duplicate_manager_id_routes_to_latest_manager() {
    let mut registry = registry_with_sayable_extension();
    let original = registry.manager("foo").expect("original manager");

    let replacement = registry.create_manager("foo");
    replacement.add_extension(Extension::new("baz", None, "baz", "baz"));

    let err = registry
        .register(Plugin::new("foo/bar", sayable(Bar)))
        .expect_err("bar only existed on the replaced manager");
    assert!(matches!(err, RegisterError::UnknownExtension { .. }));

    registry
        .register(Plugin::new("foo/baz", Implementation::new(1_u8)))
        .expect("replacement manager accepts");
    assert_eq!(replacement.implementations("baz").len(), 1);
    assert!(original.implementations("baz").is_empty());
    assert!(original.implementations("bar").is_empty());
}

#[test]
fn unknown_extension_lookup_is_empty() {
    let registry = registry_with_sayable_extension();
    let manager = registry.manager("foo").expect("manager foo");
    assert!(manager.implementations("never-declared").is_empty());
}

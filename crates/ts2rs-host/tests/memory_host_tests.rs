use ts2rs_host::memory_host::{prop, MemDeclaration, MemType};
use ts2rs_host::{DeclarationKind, HostQuery, MemoryHost};

fn interface(name: &str, path: &str, own_properties: Vec<ts2rs_host::PropertySignature>) -> MemDeclaration {
    MemDeclaration {
        kind: DeclarationKind::Interface,
        name: name.to_string(),
        documentation: None,
        source_path: path.to_string(),
        type_parameters: Vec::new(),
        extends_list: Vec::new(),
        own_properties,
        aliased_type: None,
        enum_members: Vec::new(),
    }
}

#[test]
fn finds_declaration_in_same_module() {
    let host = MemoryHost::new();
    host.declare(
        "entry",
        interface("Foo", "entry.ts", vec![prop("x", MemType::string(), false)]),
    );

    let found = host.find_declaration("entry", "Foo").unwrap();
    assert_eq!(found.name(), "Foo");
    assert_eq!(found.kind(), DeclarationKind::Interface);
}

#[test]
fn follows_transitive_imports() {
    let host = MemoryHost::new();
    host.declare("shared", interface("Priority", "shared.ts", vec![]));
    host.declare("middle", interface("UserRole", "middle.ts", vec![]));
    host.add_import("middle", "shared");
    host.declare("entry", interface("TestInterface", "entry.ts", vec![]));
    host.add_import("entry", "middle");

    assert!(host.find_declaration("entry", "Priority").is_some());
    assert!(host.find_declaration("entry", "UserRole").is_some());
    assert!(host.find_declaration("entry", "TestInterface").is_some());
}

#[test]
fn missing_declaration_returns_none() {
    let host = MemoryHost::new();
    host.declare("entry", interface("Foo", "entry.ts", vec![]));
    assert!(host.find_declaration("entry", "Bar").is_none());
}

#[test]
fn exported_names_preserve_declaration_order() {
    let host = MemoryHost::new();
    host.declare("entry", interface("First", "entry.ts", vec![]));
    host.declare("entry", interface("Second", "entry.ts", vec![]));
    host.declare("entry", interface("Third", "entry.ts", vec![]));

    assert_eq!(
        host.exported_names("entry"),
        vec!["First".to_string(), "Second".to_string(), "Third".to_string()]
    );
}

#[test]
fn load_module_makes_an_empty_module_queryable() {
    let host = MemoryHost::new();
    host.load_module("fresh");
    assert!(host.find_declaration("fresh", "Anything").is_none());
}

//! End-to-end Resolver → Emitter runs through the façade, against
//! `MemoryHost` fixtures.

use ts2rs_convert::{ConvertOptions, convert};
use ts2rs_host::memory_host::{prop, MemDeclaration, MemType};
use ts2rs_host::{DeclarationKind, MemoryHost};

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
fn converts_entry_module_exports_end_to_end() {
    let host = MemoryHost::new();
    host.declare(
        "entry",
        interface(
            "Person",
            "entry.ts",
            vec![
                prop("fullName", MemType::string(), false),
                prop("age", MemType::number(), false),
            ],
        ),
    );

    let options = ConvertOptions::new("entry");
    let output = convert(&options, &host).unwrap();

    assert_eq!(output.emitted_names, vec!["Person".to_string()]);
    assert!(output.warnings.is_empty());
    assert!(output.text.contains("pub struct Person {"));
    assert!(output.text.contains("pub full_name: String,"));
}

#[test]
fn converts_only_configured_root_type_names() {
    let host = MemoryHost::new();
    host.declare(
        "entry",
        interface("Person", "entry.ts", vec![prop("name", MemType::string(), false)]),
    );
    host.declare(
        "entry",
        interface("Ignored", "entry.ts", vec![prop("name", MemType::string(), false)]),
    );

    let options = ConvertOptions::new("entry").with_type_names(vec!["Person".to_string()]);
    let output = convert(&options, &host).unwrap();

    assert_eq!(output.emitted_names, vec!["Person".to_string()]);
}

#[test]
fn fails_fast_when_entry_module_exports_nothing() {
    let host = MemoryHost::new();

    let options = ConvertOptions::new("missing");
    let err = convert(&options, &host).unwrap_err();

    assert!(err.to_string().contains("entry module 'missing'"));
}

#[test]
fn strict_mode_propagates_as_a_fatal_error() {
    let host = MemoryHost::new();
    host.declare(
        "entry",
        interface(
            "WithExotic",
            "entry.ts",
            vec![prop("weird", MemType::object(vec![]), false)],
        ),
    );

    let options = ConvertOptions::new("entry").with_strict(true);
    let err = convert(&options, &host).unwrap_err();

    assert!(err.to_string().contains("has no nominal representation"));
}

#[test]
fn writes_rendered_text_to_the_configured_output_path() {
    let host = MemoryHost::new();
    host.declare(
        "entry",
        interface("Person", "entry.ts", vec![prop("name", MemType::string(), false)]),
    );

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("nested").join("person.rs");

    let options = ConvertOptions::new("entry").with_output_path(&out_path);
    let output = convert(&options, &host).unwrap();

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, output.text);
    assert!(written.contains("pub struct Person {"));
}

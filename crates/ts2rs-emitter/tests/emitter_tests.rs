//! Rendering assertions against hand-built IR fixtures — the Emitter's
//! input never touches the Resolver in these tests.

use ts2rs_emitter::{EmitterOptions, Emitter, TypeMapping};
use ts2rs_ir::{CollectedType, EnumMemberValue, EnumVariant, Field, LiteralValue, PrimitiveKind, ResolvedType, UnionVariant};

fn field(name: &str, ty: ResolvedType, optional: bool) -> Field {
    Field {
        name: name.to_string(),
        ty,
        optional,
        documentation: None,
    }
}

#[test]
fn struct_renders_camel_case_convention_and_skip_serializing_if() {
    let person = CollectedType::Struct {
        name: "Person".to_string(),
        fields: vec![
            field("fullName", ResolvedType::Primitive(PrimitiveKind::String), false),
            field("isActive", ResolvedType::Primitive(PrimitiveKind::Boolean), false),
            field(
                "nickname",
                ResolvedType::option(ResolvedType::Primitive(PrimitiveKind::String)),
                true,
            ),
        ],
        documentation: Some("A person.".to_string()),
        type_parameters: Vec::new(),
    };

    let emitter = Emitter::new(EmitterOptions::new());
    let output = emitter.emit(&[person]);

    assert_eq!(output.emitted_names, vec!["Person".to_string()]);
    assert!(output.text.contains("/// A person."));
    assert!(output.text.contains("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]"));
    assert!(output.text.contains("#[serde(rename_all = \"camelCase\")]"));
    assert!(output.text.contains("pub struct Person {"));
    assert!(output.text.contains("pub full_name: String,"));
    assert!(output.text.contains("pub is_active: bool,"));
    assert!(output.text.contains("#[serde(skip_serializing_if = \"Option::is_none\")]"));
    assert!(output.text.contains("pub nickname: Option<String>,"));
}

#[test]
fn string_enum_renames_each_variant_to_its_original_value() {
    let direction = CollectedType::Enum {
        name: "Direction".to_string(),
        variants: vec![
            EnumVariant {
                name: "North".to_string(),
                value: Some(EnumMemberValue::Str("north".to_string())),
                documentation: None,
            },
            EnumVariant {
                name: "South".to_string(),
                value: Some(EnumMemberValue::Str("south".to_string())),
                documentation: None,
            },
        ],
        is_string_enum: true,
        documentation: None,
    };

    let emitter = Emitter::new(EmitterOptions::new());
    let output = emitter.emit(&[direction]);

    assert!(output.text.contains("pub enum Direction {"));
    assert!(output.text.contains("#[serde(rename = \"north\")]"));
    assert!(output.text.contains("North,"));
    assert!(!output.text.contains("use std::collections::HashMap;"));
}

#[test]
fn numeric_enum_uses_serde_repr_and_explicit_discriminants() {
    let status = CollectedType::Enum {
        name: "Status".to_string(),
        variants: vec![
            EnumVariant {
                name: "Pending".to_string(),
                value: Some(EnumMemberValue::Num(0)),
                documentation: None,
            },
            EnumVariant {
                name: "Done".to_string(),
                value: Some(EnumMemberValue::Num(1)),
                documentation: None,
            },
        ],
        is_string_enum: false,
        documentation: None,
    };

    let emitter = Emitter::new(EmitterOptions::new());
    let output = emitter.emit(&[status]);

    assert!(output.text.contains("use serde_repr::{Deserialize_repr, Serialize_repr};"));
    assert!(output.text.contains("#[repr(i64)]"));
    assert!(output.text.contains("Pending = 0,"));
    assert!(output.text.contains("Done = 1,"));
}

#[test]
fn discriminated_union_tags_and_inlines_anonymous_payload_structs() {
    let circle_payload = CollectedType::Struct {
        name: "__Anonymous0".to_string(),
        fields: vec![field("radius", ResolvedType::Primitive(PrimitiveKind::Number), false)],
        documentation: None,
        type_parameters: Vec::new(),
    };
    let shape = CollectedType::Union {
        name: "Shape".to_string(),
        variants: vec![
            UnionVariant {
                name: "Circle".to_string(),
                ty: Some(ResolvedType::StructRef("__Anonymous0".to_string())),
                discriminator_value: Some(LiteralValue::Str("circle".to_string())),
                documentation: None,
            },
            UnionVariant {
                name: "Point".to_string(),
                ty: None,
                discriminator_value: Some(LiteralValue::Str("point".to_string())),
                documentation: None,
            },
        ],
        discriminator: Some("kind".to_string()),
        documentation: None,
    };

    let emitter = Emitter::new(EmitterOptions::new());
    let output = emitter.emit(&[shape, circle_payload]);

    // The anonymous payload struct is never emitted as a standalone type.
    assert_eq!(output.emitted_names, vec!["Shape".to_string()]);
    assert!(!output.text.contains("struct __Anonymous0"));
    assert!(output.text.contains("#[serde(tag = \"kind\", rename_all = \"camelCase\")]"));
    assert!(output.text.contains("#[serde(rename = \"circle\")]"));
    assert!(output.text.contains("Circle {"));
    assert!(output.text.contains("pub radius: f64,"));
    assert!(output.text.contains("#[serde(rename = \"point\")]"));
    assert!(output.text.contains("Point,"));
}

#[test]
fn non_discriminated_union_renders_tuple_variants() {
    let either = CollectedType::Union {
        name: "StringOrNumber".to_string(),
        variants: vec![
            UnionVariant {
                name: "Variant0".to_string(),
                ty: Some(ResolvedType::Primitive(PrimitiveKind::String)),
                discriminator_value: None,
                documentation: None,
            },
            UnionVariant {
                name: "Variant1".to_string(),
                ty: Some(ResolvedType::Primitive(PrimitiveKind::Number)),
                discriminator_value: None,
                documentation: None,
            },
        ],
        discriminator: None,
        documentation: None,
    };

    let emitter = Emitter::new(EmitterOptions::new());
    let output = emitter.emit(&[either]);

    assert!(!output.text.contains("#[serde(tag"));
    assert!(output.text.contains("#[serde(untagged, rename_all = \"camelCase\")]"));
    assert!(output.text.contains("Variant0(String),"));
    assert!(output.text.contains("Variant1(f64),"));
}

#[test]
fn type_alias_renders_as_transparent_rust_alias() {
    let id = CollectedType::TypeAlias {
        name: "UserId".to_string(),
        aliased: ResolvedType::Primitive(PrimitiveKind::String),
        documentation: None,
    };

    let emitter = Emitter::new(EmitterOptions::new());
    let output = emitter.emit(&[id]);

    assert!(output.text.contains("pub type UserId = String;"));
}

#[test]
fn imports_are_computed_from_tags_actually_used() {
    let with_map = CollectedType::Struct {
        name: "Catalog".to_string(),
        fields: vec![field(
            "prices",
            ResolvedType::Record(
                Box::new(ResolvedType::Primitive(PrimitiveKind::String)),
                Box::new(ResolvedType::Primitive(PrimitiveKind::Number)),
            ),
            false,
        )],
        documentation: None,
        type_parameters: Vec::new(),
    };

    let emitter = Emitter::new(EmitterOptions::new());
    let output = emitter.emit(&[with_map]);

    assert!(output.text.contains("use std::collections::HashMap;"));
    assert!(!output.text.contains("use std::collections::HashSet;"));
    assert!(!output.text.contains("use serde_repr"));
}

#[test]
fn custom_type_mapping_overrides_struct_ref_and_adds_field_annotations() {
    let widget = CollectedType::Struct {
        name: "Widget".to_string(),
        fields: vec![field("id", ResolvedType::StructRef("Uuid".to_string()), false)],
        documentation: None,
        type_parameters: Vec::new(),
    };

    let options = EmitterOptions::new().with_type_mapping(
        "Uuid",
        TypeMapping::new("uuid::Uuid").with_field_annotations(vec!["#[serde(with = \"uuid_serde\")]".to_string()]),
    );
    let emitter = Emitter::new(options);
    let output = emitter.emit(&[widget]);

    assert!(output.text.contains("pub id: uuid::Uuid,"));
    assert!(output.text.contains("#[serde(with = \"uuid_serde\")]"));
}

#[test]
fn custom_header_footer_and_type_annotations_are_spliced_in() {
    let marker = CollectedType::Struct {
        name: "Marker".to_string(),
        fields: Vec::new(),
        documentation: None,
        type_parameters: Vec::new(),
    };

    let options = EmitterOptions::new()
        .with_header("// hand-maintained prelude")
        .with_footer("// end of generated file")
        .with_type_annotations(vec!["#[allow(dead_code)]".to_string()]);
    let emitter = Emitter::new(options);
    let output = emitter.emit(&[marker]);

    assert!(output.text.contains("DO NOT EDIT"));
    assert!(output.text.contains("// hand-maintained prelude"));
    assert!(output.text.contains("#[allow(dead_code)]"));
    assert!(output.text.trim_end().ends_with("// end of generated file"));
}

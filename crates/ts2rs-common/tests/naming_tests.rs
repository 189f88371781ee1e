use ts2rs_common::naming::{escape_rust_keyword, numeric_variant_name, to_snake_case, to_variant_name};

#[test]
fn variant_name_splits_on_separators() {
    assert_eq!(to_variant_name("circle"), "Circle");
    assert_eq!(to_variant_name("light-bulb"), "LightBulb");
    assert_eq!(to_variant_name("SCREAMING_OK"), "ScreamingOk");
    assert_eq!(to_variant_name("rect angle"), "RectAngle");
}

#[test]
fn numeric_variants_are_positional() {
    assert_eq!(numeric_variant_name(0), "Value0");
    assert_eq!(numeric_variant_name(7), "Value7");
}

#[test]
fn snake_case_handles_common_shapes() {
    assert_eq!(to_snake_case("isActive"), "is_active");
    assert_eq!(to_snake_case("userID"), "user_id");
    assert_eq!(to_snake_case("name"), "name");
    assert_eq!(to_snake_case("nullableOptional"), "nullable_optional");
}

#[test]
fn keyword_fields_get_raw_ident() {
    assert_eq!(escape_rust_keyword("type"), "r#type");
    assert_eq!(escape_rust_keyword("radius"), "radius");
}
